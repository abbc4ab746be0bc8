use crate::models::{Listing, PropertyType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Criteria for the property listings page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Free text matched against title, location and description
    pub query: Option<String>,
    /// Only this kind of property
    pub property_type: Option<PropertyType>,
    /// Minimum price
    pub min_price: Option<f64>,
    /// Maximum price
    pub max_price: Option<f64>,
    /// Minimum number of bedrooms
    pub min_beds: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recently created first; undated listings last
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        let f = &listing.fields;

        if let Some(query) = self.query.as_deref() {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty()
                && ![&f.title, &f.location, &f.description]
                    .iter()
                    .any(|text| text.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(kind) = &self.property_type {
            if &f.property_type != kind {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| f.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| f.price > max) {
            return false;
        }

        // a listing without a bedroom count cannot satisfy a minimum
        if let Some(min) = self.min_beds {
            if f.beds.map_or(true, |beds| beds < min) {
                return false;
            }
        }

        true
    }
}

/// Listings passing `filter`, ordered by `order`.
///
/// The sort is stable, so ties keep the repository's order.
pub fn filter_listings(listings: &[Listing], filter: &ListingFilter, order: SortOrder) -> Vec<Listing> {
    let mut matched: Vec<Listing> = listings
        .iter()
        .filter(|l| filter.matches(l))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => matched.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortOrder::PriceLowToHigh => {
            matched.sort_by(|a, b| a.fields.price.total_cmp(&b.fields.price))
        }
        SortOrder::PriceHighToLow => {
            matched.sort_by(|a, b| b.fields.price.total_cmp(&a.fields.price))
        }
    }

    matched
}
