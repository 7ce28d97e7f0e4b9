//! Log storage trait.
//!
//! Defines the interface for the single-blob persistence collaborator.
//! Implementations live in chatline-infra.

use chatline_types::error::StorageError;

/// Trait for persisting the serialized conversation log.
///
/// The widget treats storage as one string blob under one key: read it,
/// overwrite it, or delete it. Uses RPITIT (native async fn in traits,
/// Rust 2024 edition).
pub trait LogStore: Send + Sync {
    /// Read the persisted blob. Returns None if nothing was ever stored.
    fn get(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite the persisted blob with the full serialized log.
    fn set(
        &self,
        blob: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Delete the persisted blob. No-op if nothing was stored.
    fn remove(&self) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
