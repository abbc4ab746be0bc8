//! Contact form submissions kept in key-value storage.

use crate::error::StorageError;
use crate::models::{NewSubmission, Submission};
use crate::storage::{KeyValueStore, LEGACY_SUBMISSIONS_KEY};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub struct SubmissionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SubmissionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// All submissions, newest first
    pub fn list(&self) -> Result<Vec<Submission>, StorageError> {
        let mut submissions = self.load()?;
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(submissions)
    }

    pub fn add(&self, new: NewSubmission) -> Result<Submission, StorageError> {
        let mut submissions = self.load()?;
        let id = submissions.iter().map(|s| s.id).max().unwrap_or(0) + 1;

        let submission = Submission {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            message: new.message,
            property_id: new.property_id,
            read: false,
            created_at: Utc::now(),
        };

        submissions.push(submission.clone());
        self.store(&submissions)?;

        info!("Received submission {} from {}", id, submission.email);
        Ok(submission)
    }

    /// Flag submission `id` as read; `false` if it does not exist
    pub fn mark_read(&self, id: i64) -> Result<bool, StorageError> {
        let mut submissions = self.load()?;

        match submissions.iter_mut().find(|s| s.id == id) {
            Some(submission) => submission.read = true,
            None => return Ok(false),
        }

        self.store(&submissions)?;
        Ok(true)
    }

    pub fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let mut submissions = self.load()?;
        let before = submissions.len();
        submissions.retain(|s| s.id != id);

        if submissions.len() == before {
            return Ok(false);
        }

        self.store(&submissions)?;
        Ok(true)
    }

    pub fn unread_count(&self) -> Result<usize, StorageError> {
        Ok(self.load()?.iter().filter(|s| !s.read).count())
    }

    fn load(&self) -> Result<Vec<Submission>, StorageError> {
        match self.storage.get(LEGACY_SUBMISSIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, submissions: &[Submission]) -> Result<(), StorageError> {
        let json = serde_json::to_string(submissions)?;
        self.storage.set(LEGACY_SUBMISSIONS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn enquiry(email: &str) -> NewSubmission {
        NewSubmission {
            name: "Ana".to_string(),
            email: email.to_string(),
            phone: None,
            message: "Is the villa still available?".to_string(),
            property_id: Some(4),
        }
    }

    #[test]
    fn add_read_and_delete() {
        let store = SubmissionStore::new(Arc::new(MemoryStore::new()));

        let first = store.add(enquiry("a@example.com")).unwrap();
        let second = store.add(enquiry("b@example.com")).unwrap();
        assert_eq!(second.id, first.id + 1);
        assert_eq!(store.unread_count().unwrap(), 2);

        assert!(store.mark_read(first.id).unwrap());
        assert!(!store.mark_read(99).unwrap());
        assert_eq!(store.unread_count().unwrap(), 1);

        assert!(store.delete(second.id).unwrap());
        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining[0].read);
    }

    #[test]
    fn empty_storage_lists_nothing() {
        let store = SubmissionStore::new(Arc::new(MemoryStore::new()));
        assert!(store.list().unwrap().is_empty());
        assert!(!store.delete(1).unwrap());
    }
}
