//! Admin panel session flag.
//!
//! Only records whether the panel is unlocked; checking credentials is the
//! caller's business.

use crate::error::StorageError;
use crate::storage::{KeyValueStore, ADMIN_SESSION_KEY};
use std::sync::Arc;
use tracing::info;

pub struct AdminSession {
    storage: Arc<dyn KeyValueStore>,
}

impl AdminSession {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn is_active(&self) -> Result<bool, StorageError> {
        Ok(self.storage.get(ADMIN_SESSION_KEY)?.as_deref() == Some("true"))
    }

    pub fn begin(&self) -> Result<(), StorageError> {
        self.storage.set(ADMIN_SESSION_KEY, "true")?;
        info!("Admin session started");
        Ok(())
    }

    pub fn end(&self) -> Result<(), StorageError> {
        self.storage.delete(ADMIN_SESSION_KEY)?;
        info!("Admin session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn begin_and_end() {
        let session = AdminSession::new(Arc::new(MemoryStore::new()));
        assert!(!session.is_active().unwrap());

        session.begin().unwrap();
        assert!(session.is_active().unwrap());

        session.end().unwrap();
        assert!(!session.is_active().unwrap());
    }

    #[test]
    fn only_the_literal_true_counts() {
        let kv = Arc::new(MemoryStore::with_entries([(ADMIN_SESSION_KEY, "yes")]));
        assert!(!AdminSession::new(kv).is_active().unwrap());
    }
}
