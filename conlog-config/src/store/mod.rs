//! Profile storage backends
//!
//! # Implementations
//! - `MemoryProfileStore`: shared in-memory book, suitable for tests and embedding
//! - `JsonFileProfileStore`: a single JSON file on disk

mod json_file;
mod memory;

pub use json_file::{JsonFileProfileStore, PROFILE_FILE};
pub use memory::MemoryProfileStore;

use crate::error::ConfigResult;
use crate::profile::ProfileBook;

/// Storage backend for the profile book
///
/// The whole book is read and written as one opaque unit; there is no
/// multi-writer coordination.
pub trait ProfileStore: Send + Sync {
    /// Load the stored book. An absent store yields an empty book.
    fn load(&self) -> ConfigResult<ProfileBook>;

    /// Replace the stored book
    fn store(&self, book: &ProfileBook) -> ConfigResult<()>;

    /// Load, modify and store in one call
    fn update<F, T>(&self, change: F) -> ConfigResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut ProfileBook) -> ConfigResult<T>,
    {
        let mut book = self.load()?;
        let value = change(&mut book)?;
        self.store(&book)?;
        Ok(value)
    }
}
