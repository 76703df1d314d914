//! Wheel artifact identification

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional build output subdirectory produced by the build tool
pub const DIST_DIR: &str = "dist";

/// File extension of a packaged wheel
pub const WHEEL_EXTENSION: &str = "whl";

/// A single packaged build output located in the staging area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelArtifact {
    /// File name, carries the version and compatibility tags
    pub name: String,
    /// Path to the wheel inside the build output directory
    pub local_path: PathBuf,
}

impl WheelArtifact {
    /// Build an artifact from a located wheel path.
    ///
    /// Returns `None` when the path has no `.whl` extension or no usable
    /// file name.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(WHEEL_EXTENSION))
        {
            return None;
        }
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            name,
            local_path: path.to_path_buf(),
        })
    }
}

impl std::fmt::Display for WheelArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
