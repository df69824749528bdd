//! In-memory profile store

use std::sync::{Arc, RwLock};

use crate::error::{ConfigError, ConfigResult};
use crate::profile::ProfileBook;
use crate::store::ProfileStore;

/// An in-memory profile store.
///
/// Clones share the same book.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    book: Arc<RwLock<ProfileBook>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a book
    pub fn with_book(book: ProfileBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> ConfigResult<ProfileBook> {
        let book = self.book.read().map_err(|_| ConfigError::Poisoned)?;
        Ok(book.clone())
    }

    fn store(&self, book: &ProfileBook) -> ConfigResult<()> {
        let mut current = self.book.write().map_err(|_| ConfigError::Poisoned)?;
        *current = book.clone();
        Ok(())
    }
}
