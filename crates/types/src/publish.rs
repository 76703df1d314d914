//! Publish pipeline request, report, and stage tags

use crate::artifact::WheelArtifact;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Caller-supplied inputs for one pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequest {
    /// Path/URI of the source tree to package, read-only to the pipeline
    pub source: PathBuf,
    /// Managed volume directory the wheel is published into
    pub destination: PathBuf,
    /// Replace an existing wheel of the same name at the destination
    #[serde(default)]
    pub overwrite: bool,
}

impl PublishRequest {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            overwrite: false,
        }
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Outcome of a successful pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReport {
    /// The wheel that was published
    pub artifact: WheelArtifact,
    /// Full destination path of the published wheel
    pub destination_path: PathBuf,
    /// Whether an existing wheel was replaced
    pub overwrote: bool,
}

/// Progress tags for the linear pipeline state machine
///
/// Transitions run `Init` through `Published` in order; any stage may
/// transition to `Failed`, which aborts all subsequent stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Init,
    Staged,
    Built,
    Located,
    Published,
    Failed,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Staged => "staged",
            Self::Built => "built",
            Self::Located => "located",
            Self::Published => "published",
            Self::Failed => "failed",
        };
        write!(f, "{name}")
    }
}
