use crate::content::events::{ContentEvents, Subscription};
use crate::content::validate::parse_tree;
use crate::content::{site_defaults, ContentTree};
use crate::storage::{KeyValueStore, CONTENT_OVERRIDE_KEY};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    Uninitialized,
    Loaded,
}

/// Default copy merged with editor overrides from key-value storage.
///
/// No method returns an error: storage and parse failures are logged and
/// turn into the defaults (reads) or `false` (writes). A stored override
/// that fails the shape check is deleted on the read that finds it.
pub struct ContentStore {
    storage: Arc<dyn KeyValueStore>,
    defaults: Arc<ContentTree>,
    events: ContentEvents,
    loaded: AtomicBool,
}

impl ContentStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, defaults: ContentTree) -> Self {
        Self {
            storage,
            defaults: Arc::new(defaults),
            events: ContentEvents::new(),
            loaded: AtomicBool::new(false),
        }
    }

    /// Store backed by the copy the site ships with
    pub fn with_site_defaults(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::new(storage, site_defaults())
    }

    pub fn state(&self) -> ContentState {
        if self.loaded.load(Ordering::Acquire) {
            ContentState::Loaded
        } else {
            ContentState::Uninitialized
        }
    }

    /// Effective content: the stored override merged over the defaults
    pub fn get_all(&self) -> ContentTree {
        if !self.loaded.swap(true, Ordering::AcqRel) {
            debug!("Loading site content for the first time");
        }

        match self.load_override() {
            Some(overrides) => self.defaults.merged_with(overrides),
            None => self.defaults.as_ref().clone(),
        }
    }

    /// Compiled-in default for one field, or an empty string
    pub fn get_field(&self, page: &str, section: &str, field: &str) -> String {
        self.defaults
            .get(page, section, field)
            .unwrap_or_default()
            .to_string()
    }

    /// Live value for one field, falling back to the default when the live
    /// value is missing or blank
    pub fn resolve(&self, page: &str, section: &str, field: &str) -> String {
        match self.get_all().get(page, section, field) {
            Some(live) if !live.trim().is_empty() => live.to_string(),
            _ => self.get_field(page, section, field),
        }
    }

    /// Replace the stored override with `tree` and notify listeners
    pub fn save(&self, tree: &ContentTree) -> bool {
        let json = match serde_json::to_string(tree) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize content: {}", e);
                return false;
            }
        };

        if let Err(e) = self.storage.set(CONTENT_OVERRIDE_KEY, &json) {
            warn!("Failed to save content: {}", e);
            return false;
        }

        info!("Saved content override ({} fields)", tree.field_count());
        self.events.emit();
        true
    }

    /// Drop the stored override so the defaults apply again
    pub fn reset(&self) -> bool {
        if let Err(e) = self.storage.delete(CONTENT_OVERRIDE_KEY) {
            warn!("Failed to reset content: {}", e);
            return false;
        }

        info!("Content reset to defaults");
        self.events.emit();
        true
    }

    /// The compiled-in defaults, never the live override
    pub fn export_snapshot(&self) -> ContentTree {
        self.defaults.as_ref().clone()
    }

    /// Be told after every successful save or reset
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn events(&self) -> &ContentEvents {
        &self.events
    }

    fn load_override(&self) -> Option<ContentTree> {
        let raw = match self.storage.get(CONTENT_OVERRIDE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read content override, using defaults: {}", e);
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored content is not valid JSON, clearing it: {}", e);
                self.discard_override();
                return None;
            }
        };

        match parse_tree(&value) {
            Ok(tree) => Some(tree),
            Err(corruption) => {
                warn!("Stored content is corrupted ({}), clearing it", corruption);
                self.discard_override();
                None
            }
        }
    }

    fn discard_override(&self) {
        if let Err(e) = self.storage.delete(CONTENT_OVERRIDE_KEY) {
            warn!("Failed to clear corrupted content: {}", e);
        }
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("state", &self.state())
            .field("default_fields", &self.defaults.field_count())
            .field("events", &self.events)
            .finish()
    }
}
