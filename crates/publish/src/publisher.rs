//! Final copy into the managed volume

use std::path::{Path, PathBuf};
use tracing::debug;
use wheelhouse_bridge::FileBridge;
use wheelhouse_errors::{Error, PublishError};
use wheelhouse_types::WheelArtifact;

/// Copy a located wheel into the destination, subject to conflict policy.
///
/// The existence check and the copy are two separate bridge calls, not an
/// atomic conditional write; two concurrent publishes of the same wheel name
/// can both pass the check and the last writer wins. Callers that need the
/// conflict rejection to hold under concurrency must serialize publishes
/// externally.
///
/// Returns the destination path and whether an existing wheel was replaced.
///
/// # Errors
///
/// Returns `PublishError::WheelAlreadyExists` when the destination already
/// holds a wheel of the same name and `overwrite` is false, or a storage
/// error if the copy fails.
pub async fn publish_artifact(
    bridge: &dyn FileBridge,
    artifact: &WheelArtifact,
    destination: &Path,
    overwrite: bool,
) -> Result<(PathBuf, bool), Error> {
    let target = destination.join(&artifact.name);

    let existed = bridge.exists(&target).await;
    if existed && !overwrite {
        return Err(PublishError::WheelAlreadyExists {
            name: artifact.name.clone(),
        }
        .into());
    }

    debug!(
        wheel = %artifact.name,
        target = %target.display(),
        overwrote = existed,
        "copying wheel into target volume"
    );
    bridge.copy(&artifact.local_path, &target, false).await?;

    Ok((target, existed))
}
