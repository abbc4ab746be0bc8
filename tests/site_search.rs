use chrono::{TimeZone, Utc};
use caribbean_realty::models::{Listing, ListingFields, PropertyType};
use caribbean_realty::repository::{ListingRepository, MemoryListingRepository};
use caribbean_realty::search::{SiteSearch, STATIC_PAGES};

fn fields(title: &str, location: &str, description: &str, kind: PropertyType) -> ListingFields {
    ListingFields {
        title: title.to_string(),
        location: location.to_string(),
        price: 1_250_000.0,
        description: description.to_string(),
        property_type: kind,
        beds: Some(5.0),
        baths: Some(4.0),
        parking: Some(2.0),
        area: Some(450.0),
        image: "https://images.example/villa.jpg".to_string(),
        images: vec![],
        features: vec!["Infinity pool".to_string()],
        ownership_years: None,
        time_to_attractions: Some("2 minutes to the beach".to_string()),
    }
}

async fn search_over_repository() -> SiteSearch {
    let listed = |id: i64, day: u32, f: ListingFields| {
        Listing::new(id, f, Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap())
    };

    let repo = MemoryListingRepository::with_listings(vec![
        listed(
            1,
            2,
            fields(
                "Stunning Oceanfront Villa",
                "Cabrera",
                "Five bedrooms on the cliffs",
                PropertyType::Villa,
            ),
        ),
        listed(
            2,
            9,
            fields(
                "Downtown Loft",
                "Santo Domingo",
                "Walk to restaurants",
                PropertyType::Apartment,
            ),
        ),
    ]);

    SiteSearch::new(repo.list().await.unwrap())
}

fn titles(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.fields.title.as_str()).collect()
}

#[tokio::test]
async fn containment_is_case_insensitive() {
    let search = search_over_repository().await;

    for query in ["oceanfront", "OCEANFRONT", "Ocean"] {
        let result = search.search(query);
        assert!(
            titles(&result.properties).contains(&"Stunning Oceanfront Villa"),
            "query {query:?} missed the villa"
        );
    }
}

#[tokio::test]
async fn empty_and_blank_queries_return_nothing() {
    let search = search_over_repository().await;

    for query in ["", "   "] {
        let result = search.search(query);
        assert!(result.properties.is_empty());
        assert!(result.pages.is_empty());
        assert!(result.blog.is_empty());
        assert!(result.services.is_empty());
        assert_eq!(result.total, 0);
    }
}

#[tokio::test]
async fn page_matches_on_keyword_alone() {
    let search = search_over_repository().await;

    // "appointment" is only a keyword of the contact page
    let contact = STATIC_PAGES.iter().find(|p| p.title == "Contact").unwrap();
    assert!(!contact.title.to_lowercase().contains("appointment"));
    assert!(!contact.content.to_lowercase().contains("appointment"));

    let result = search.search("Appointment");
    assert_eq!(result.pages, vec![contact.clone()]);
}

#[tokio::test]
async fn total_is_always_the_sum_of_categories() {
    let search = search_over_repository().await;

    for query in ["villa", "a", "legal", "santo", "zzz", "property", "  Rent "] {
        let r = search.search(query);
        assert_eq!(
            r.total,
            r.properties.len() + r.pages.len() + r.blog.len() + r.services.len(),
            "query {query:?}"
        );
    }
}

#[tokio::test]
async fn matches_keep_repository_order() {
    let search = search_over_repository().await;

    // both listings contain "o"; newest (the loft) comes first from the repository
    let result = search.search("o");
    assert_eq!(
        titles(&result.properties),
        vec!["Downtown Loft", "Stunning Oceanfront Villa"]
    );
}

#[tokio::test]
async fn listing_type_is_searchable() {
    let search = search_over_repository().await;
    let result = search.search("apartment");

    assert_eq!(titles(&result.properties), vec!["Downtown Loft"]);
}
