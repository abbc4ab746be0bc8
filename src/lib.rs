//! Core of the Caribbean Realty website: editable page copy with
//! self-repairing overrides, and typeahead search across listings, pages
//! and services.

pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod session;
pub mod storage;
pub mod submissions;

pub use content::{ContentStore, ContentTree};
pub use search::SiteSearch;
