//! Store configuration and builder.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::Store;

/// Configuration for opening a store.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the store file. Ignored when `in_memory` is set.
    pub path: PathBuf,
    /// Whether to create an in-memory store instead of a file.
    pub in_memory: bool,
}

/// Builder for opening a [`Store`] with explicit options.
///
/// # Example
///
/// ```ignore
/// let store = StoreBuilder::new().path("logbook.carlog").open()?;
/// ```
#[derive(Debug, Default)]
pub struct StoreBuilder {
    path: Option<PathBuf>,
    in_memory: bool,
}

impl StoreBuilder {
    /// Create a new builder with no options set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store file path.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Configure an in-memory store (for tests and previews).
    #[must_use]
    pub fn in_memory() -> Self {
        Self { path: None, in_memory: true }
    }

    /// Open the store with the configured options.
    pub fn open(self) -> Result<Store> {
        if self.in_memory {
            return Store::open_with_config(Config { path: PathBuf::new(), in_memory: true });
        }
        let path = self.path.ok_or_else(|| Error::config("store path not set"))?;
        Store::open_with_config(Config { path, in_memory: false })
    }
}
