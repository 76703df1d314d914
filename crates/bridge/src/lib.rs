#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem bridge between local staging and managed volume namespaces
//!
//! The publish pipeline never talks to a concrete transport; it depends on
//! the [`FileBridge`] capability, so any object-store or filesystem backend
//! can be substituted. [`LocalBridge`] is the `tokio::fs` implementation
//! used on a single host and in tests.

mod local;

pub use local::LocalBridge;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use wheelhouse_errors::Error;

/// Capability object for copying files between the local staging area and a
/// (possibly remote) managed volume
#[async_trait]
pub trait FileBridge: Send + Sync {
    /// Copy `src` to `dst`. With `recursive`, `src` must be a directory and
    /// its full tree is materialized at `dst`; otherwise a single file is
    /// copied. Parent directories of `dst` are created as needed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the source is unreadable or the copy fails.
    async fn copy(&self, src: &Path, dst: &Path, recursive: bool) -> Result<(), Error>;

    /// Check if a path exists
    async fn exists(&self, path: &Path) -> bool;

    /// List the entries directly under a directory
    ///
    /// # Errors
    ///
    /// Returns a storage error if the path is absent or not enumerable.
    async fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error>;

    /// Create a directory and all parent directories
    ///
    /// # Errors
    ///
    /// Returns a storage error if directory creation fails.
    async fn create_dir_all(&self, path: &Path) -> Result<(), Error>;

    /// Remove a directory and all contents; succeeds if the path is absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if removal fails.
    async fn remove_dir_all(&self, path: &Path) -> Result<(), Error>;
}
