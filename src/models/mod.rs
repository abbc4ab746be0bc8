use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property a listing advertises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Villa,
    House,
    Condo,
    Apartment,
    Land,
    Commercial,
    Estate,
    /// Anything the admin typed that is not one of the known kinds
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Apartment => "Apartment",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
            PropertyType::Estate => "Estate",
            PropertyType::Other(other) => other,
        }
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "villa" => PropertyType::Villa,
            "house" => PropertyType::House,
            "condo" => PropertyType::Condo,
            "apartment" => PropertyType::Apartment,
            "land" => PropertyType::Land,
            "commercial" => PropertyType::Commercial,
            "estate" => PropertyType::Estate,
            _ => PropertyType::Other(value),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(value: &str) -> Self {
        PropertyType::from(value.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable fields of a listing, used for create and update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingFields {
    pub title: String,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub beds: Option<f64>,
    #[serde(default)]
    pub baths: Option<f64>,
    #[serde(default)]
    pub parking: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    /// Cover image: a URL or an embedded data URI
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub ownership_years: Option<String>,
    #[serde(default)]
    pub time_to_attractions: Option<String>,
}

/// A real-estate property record as stored by the listing repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: i64,
    #[serde(flatten)]
    pub fields: ListingFields,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    pub fn new(id: i64, fields: ListingFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at: Some(created_at),
        }
    }
}

/// A fixed, compiled-in page of the public site
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StaticPage {
    pub title: &'static str,
    pub url: &'static str,
    pub content: &'static str,
    pub keywords: &'static [&'static str],
}

/// A service the brokerage offers; same shape as a static page
pub type ServiceEntry = StaticPage;

/// Blog matches; reserved, the search index never fills it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogMatch {
    pub title: String,
    pub url: String,
}

/// Matches for one query, grouped by category
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SearchResult {
    pub properties: Vec<Listing>,
    pub pages: Vec<StaticPage>,
    pub blog: Vec<BlogMatch>,
    pub services: Vec<ServiceEntry>,
    pub total: usize,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A client enquiry sent through the contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub property_id: Option<i64>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Contact form input before it is stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: Option<i64>,
}
