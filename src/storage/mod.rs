pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Editor overrides of the site copy
pub const CONTENT_OVERRIDE_KEY: &str = "websiteContent";
/// Property list kept locally before the remote store existed
pub const LEGACY_PROPERTIES_KEY: &str = "properties";
/// Contact form submissions kept locally
pub const LEGACY_SUBMISSIONS_KEY: &str = "submissions";
/// Whether the admin panel is unlocked
pub const ADMIN_SESSION_KEY: &str = "adminLoggedIn";
