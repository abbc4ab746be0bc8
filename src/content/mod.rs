//! Editable site copy.
//!
//! Page text lives in a [`ContentTree`] of `page -> section -> field -> text`.
//! A compiled-in default tree is always available; editors persist a partial
//! override tree that the [`ContentStore`] merges over the defaults on every
//! read. Overrides that fail the shape check are discarded and the defaults
//! are served instead.

pub mod defaults;
pub mod events;
pub mod store;
pub mod validate;

pub use defaults::site_defaults;
pub use events::{ContentEvents, Subscription};
pub use store::{ContentState, ContentStore};
pub use validate::{parse_tree, Corruption};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Section key used by pages that have no sections (service detail pages)
pub const FLAT_SECTION: &str = "";

pub type Section = BTreeMap<String, String>;
pub type Page = BTreeMap<String, Section>;

/// Nested `page -> section -> field -> text` mapping of site copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTree {
    pages: BTreeMap<String, Page>,
}

impl ContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, page: &str, section: &str, field: &str) -> Option<&str> {
        self.pages
            .get(page)
            .and_then(|p| p.get(section))
            .and_then(|s| s.get(field))
            .map(String::as_str)
    }

    pub fn set(
        &mut self,
        page: impl Into<String>,
        section: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.pages
            .entry(page.into())
            .or_default()
            .entry(section.into())
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Remove one field, dropping the section and page if they become empty
    pub fn remove(&mut self, page: &str, section: &str, field: &str) -> Option<String> {
        let sections = self.pages.get_mut(page)?;
        let fields = sections.get_mut(section)?;
        let removed = fields.remove(field);

        if fields.is_empty() {
            sections.remove(section);
        }
        if sections.is_empty() {
            self.pages.remove(page);
        }

        removed
    }

    pub fn page(&self, page: &str) -> Option<&Page> {
        self.pages.get(page)
    }

    pub fn section(&self, page: &str, section: &str) -> Option<&Section> {
        self.pages.get(page).and_then(|p| p.get(section))
    }

    pub fn pages(&self) -> impl Iterator<Item = (&str, &Page)> {
        self.pages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of leaf fields across all pages
    pub fn field_count(&self) -> usize {
        self.pages
            .values()
            .flat_map(|p| p.values())
            .map(|s| s.len())
            .sum()
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Fields present in both take the override's value; fields only in
    /// `self` are kept. Pages and sections only in the override are adopted.
    pub fn merged_with(&self, overrides: ContentTree) -> ContentTree {
        let mut merged = self.clone();

        for (page, sections) in overrides.pages {
            let target = merged.pages.entry(page).or_default();
            for (section, fields) in sections {
                target.entry(section).or_default().extend(fields);
            }
        }

        merged
    }

    /// JSON form, with flat-section fields written directly under the page
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();

        for (page, sections) in &self.pages {
            let mut page_obj = Map::new();

            if let Some(flat) = sections.get(FLAT_SECTION) {
                for (field, text) in flat {
                    page_obj.insert(field.clone(), Value::String(text.clone()));
                }
            }

            for (section, fields) in sections {
                if section == FLAT_SECTION {
                    continue;
                }
                let section_obj = fields
                    .iter()
                    .map(|(f, t)| (f.clone(), Value::String(t.clone())))
                    .collect();
                page_obj.insert(section.clone(), Value::Object(section_obj));
            }

            root.insert(page.clone(), Value::Object(page_obj));
        }

        Value::Object(root)
    }
}

impl Serialize for ContentTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl TryFrom<&Value> for ContentTree {
    type Error = Corruption;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        parse_tree(value)
    }
}

impl FromIterator<(String, Page)> for ContentTree {
    fn from_iter<I: IntoIterator<Item = (String, Page)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}
