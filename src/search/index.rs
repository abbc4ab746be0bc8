use crate::models::{Listing, SearchResult, ServiceEntry, StaticPage};
use crate::search::catalog::{SERVICES, STATIC_PAGES};
use tracing::debug;

/// Typeahead search over listings, static pages and services.
///
/// Matching is case-insensitive substring containment, results keep the
/// order of their source collection. Every query is a linear scan, which is
/// fine for tens of items but wants a real index past a few hundred.
#[derive(Debug, Clone)]
pub struct SiteSearch {
    listings: Vec<Listing>,
    pages: &'static [StaticPage],
    services: &'static [ServiceEntry],
}

impl SiteSearch {
    /// Search over `listings` and the compiled-in page and service catalogs
    pub fn new(listings: Vec<Listing>) -> Self {
        Self::with_catalogs(listings, STATIC_PAGES, SERVICES)
    }

    pub fn with_catalogs(
        listings: Vec<Listing>,
        pages: &'static [StaticPage],
        services: &'static [ServiceEntry],
    ) -> Self {
        Self {
            listings,
            pages,
            services,
        }
    }

    /// Swap in a fresh listings snapshot from the repository
    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn search(&self, query: &str) -> SearchResult {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResult::default();
        }

        let properties: Vec<Listing> = self
            .listings
            .iter()
            .filter(|l| listing_matches(l, &needle))
            .cloned()
            .collect();

        let pages = matching_entries(self.pages, &needle);
        let services = matching_entries(self.services, &needle);

        let total = properties.len() + pages.len() + services.len();
        debug!("Search '{}' matched {} results", needle, total);

        SearchResult {
            properties,
            pages,
            blog: Vec::new(),
            services,
            total,
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn listing_matches(listing: &Listing, needle: &str) -> bool {
    let f = &listing.fields;
    contains(&f.title, needle)
        || contains(&f.location, needle)
        || contains(&f.description, needle)
        || contains(f.property_type.as_str(), needle)
}

fn entry_matches(entry: &StaticPage, needle: &str) -> bool {
    contains(entry.title, needle)
        || contains(entry.content, needle)
        || entry.keywords.iter().any(|k| contains(k, needle))
}

fn matching_entries(entries: &[StaticPage], needle: &str) -> Vec<StaticPage> {
    entries
        .iter()
        .filter(|e| entry_matches(e, needle))
        .cloned()
        .collect()
}
