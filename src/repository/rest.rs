use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Listing, ListingFields};
use crate::repository::traits::ListingRepository;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info, warn};

const PROPERTIES_TABLE: &str = "properties";

/// Listings in a hosted Postgres table behind a PostgREST-style API
pub struct RestListingRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestListingRepository {
    /// Create a repository for the project at `base_url`
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("caribbean-realty/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, PROPERTIES_TABLE)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into an error carrying the response body
    async fn check(response: Response) -> RepositoryResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Listing store returned status: {}", status);
        Err(RepositoryError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn rows(request: RequestBuilder) -> RepositoryResult<Vec<Listing>> {
        let response = Self::check(request.send().await?).await?;
        decode_rows(&response.text().await?)
    }
}

fn decode_rows(body: &str) -> RepositoryResult<Vec<Listing>> {
    serde_json::from_str(body).map_err(RepositoryError::Decode)
}

#[async_trait]
impl ListingRepository for RestListingRepository {
    async fn list(&self) -> RepositoryResult<Vec<Listing>> {
        debug!("Fetching listings from {}", self.table_url());

        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        let listings = Self::rows(request).await?;
        info!("Fetched {} listings", listings.len());
        Ok(listings)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Option<Listing>> {
        let request = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))]);

        Ok(Self::rows(request).await?.into_iter().next())
    }

    async fn create(&self, fields: ListingFields) -> RepositoryResult<Listing> {
        let request = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&fields);

        let listing = Self::rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::EmptyResponse)?;

        info!("Created listing {}", listing.id);
        Ok(listing)
    }

    async fn update(&self, id: i64, fields: ListingFields) -> RepositoryResult<Listing> {
        let request = self
            .authorized(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&fields);

        Self::rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let request = self
            .authorized(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");

        let deleted = Self::rows(request).await?;
        if deleted.is_empty() {
            debug!("Listing {} was not present", id);
        }
        Ok(!deleted.is_empty())
    }

    fn source_name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_ignores_trailing_slash() {
        let repo = RestListingRepository::new(
            "https://project.supabase.example/",
            "anon-key",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            repo.table_url(),
            "https://project.supabase.example/rest/v1/properties"
        );
        assert_eq!(repo.source_name(), "remote");
    }

    #[test]
    fn requests_carry_api_key_headers() {
        let repo = RestListingRepository::new("http://localhost:54321", "secret", Duration::from_secs(5))
            .unwrap();

        let request = repo
            .authorized(repo.client.get(repo.table_url()))
            .build()
            .unwrap();

        assert_eq!(request.headers()["apikey"], "secret");
        assert_eq!(request.headers()["authorization"], "Bearer secret");
    }

    #[test]
    fn malformed_rows_are_a_decode_error() {
        assert!(matches!(
            decode_rows(r#"{"message":"not a row list"}"#),
            Err(RepositoryError::Decode(_))
        ));
        assert!(decode_rows("[]").unwrap().is_empty());
    }
}
