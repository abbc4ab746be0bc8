use crate::error::StorageError;

/// Durable string-keyed storage for text blobs.
///
/// Implementations must be read-your-writes consistent for a single caller.
/// Whole values are replaced on `set`; there are no partial writes.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

