//! Build output discovery

use std::path::Path;
use wheelhouse_bridge::FileBridge;
use wheelhouse_errors::{Error, PublishError};
use wheelhouse_types::WheelArtifact;

/// Find exactly one wheel in the build output directory.
///
/// A missing output directory counts as zero wheels. More than one match is
/// rejected rather than silently picking one; a multi-wheel `dist/` means
/// the build is misconfigured or carries stale output.
///
/// # Errors
///
/// Returns `PublishError::WheelNotFound` for zero matches,
/// `PublishError::AmbiguousWheel` for more than one, or a storage error if
/// the directory cannot be enumerated.
pub async fn locate_wheel(
    bridge: &dyn FileBridge,
    dist_dir: &Path,
) -> Result<WheelArtifact, Error> {
    if !bridge.exists(dist_dir).await {
        return Err(PublishError::WheelNotFound {
            dir: dist_dir.display().to_string(),
        }
        .into());
    }

    let mut wheels: Vec<WheelArtifact> = bridge
        .list_dir(dist_dir)
        .await?
        .iter()
        .filter_map(|path| WheelArtifact::from_path(path))
        .collect();

    match wheels.len() {
        0 => Err(PublishError::WheelNotFound {
            dir: dist_dir.display().to_string(),
        }
        .into()),
        1 => Ok(wheels.remove(0)),
        count => Err(PublishError::AmbiguousWheel {
            dir: dist_dir.display().to_string(),
            count,
        }
        .into()),
    }
}
