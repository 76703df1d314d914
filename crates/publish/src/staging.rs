//! Per-invocation staging directory management

use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;
use wheelhouse_bridge::FileBridge;
use wheelhouse_errors::{Error, PublishError};
use wheelhouse_types::artifact::DIST_DIR;

/// Local scratch directory the source tree is materialized into
///
/// Each invocation gets its own directory under the staging root, so two
/// concurrent pipeline runs on the same host cannot clobber each other's
/// in-flight build.
#[derive(Debug, Clone)]
pub struct StagingArea {
    path: PathBuf,
}

impl StagingArea {
    /// Allocate a unique staging path under `staging_root`.
    ///
    /// Nothing is created on disk until [`populate`](Self::populate) runs.
    #[must_use]
    pub fn allocate(staging_root: &Path) -> Self {
        let path = staging_root.join(format!("stage-{}", Uuid::new_v4()));
        Self { path }
    }

    /// Use a fixed path instead of an allocated one. Test seam.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build output subdirectory the external tool writes wheels into
    #[must_use]
    pub fn dist_dir(&self) -> PathBuf {
        self.path.join(DIST_DIR)
    }

    /// Reset the staging path and copy the source tree into it.
    ///
    /// Any previous contents at the path are removed first; the staging
    /// directory never merges with leftovers from a prior run. After the
    /// copy the path must exist, guarding against a silent no-op copy from
    /// a misconfigured or unreachable source.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::StagingFailed` if the staging path is absent
    /// after the copy, or a storage error if the reset or copy fails.
    pub async fn populate(&self, bridge: &dyn FileBridge, source: &Path) -> Result<(), Error> {
        bridge.remove_dir_all(&self.path).await?;

        debug!(
            source = %source.display(),
            staging = %self.path.display(),
            "copying source tree into staging area"
        );
        bridge.copy(source, &self.path, true).await?;

        if !bridge.exists(&self.path).await {
            return Err(PublishError::StagingFailed {
                path: self.path.display().to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Remove the staging directory.
    ///
    /// Called only after a successful publish; failed runs leave the
    /// directory in place for operator inspection.
    ///
    /// # Errors
    ///
    /// Returns a storage error if removal fails.
    pub async fn discard(&self, bridge: &dyn FileBridge) -> Result<(), Error> {
        bridge.remove_dir_all(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;
    use tokio::fs;
    use wheelhouse_bridge::LocalBridge;

    #[test]
    fn allocate_yields_distinct_paths() {
        let root = Path::new("/tmp/wh");
        let a = StagingArea::allocate(root);
        let b = StagingArea::allocate(root);
        assert_ne!(a.path(), b.path());
        assert!(a.path().starts_with(root));
    }

    #[tokio::test]
    async fn populate_resets_previous_contents() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir_all(&source).await.unwrap();
        fs::write(source.join("setup.py"), b"# build script")
            .await
            .unwrap();

        let staging = StagingArea::at(temp.path().join("stage"));
        fs::create_dir_all(staging.path()).await.unwrap();
        fs::write(staging.path().join("stale.whl"), b"residue")
            .await
            .unwrap();

        let bridge = LocalBridge::new();
        staging.populate(&bridge, &source).await.unwrap();

        assert!(staging.path().join("setup.py").exists());
        assert!(!staging.path().join("stale.whl").exists());
    }

    /// Bridge whose copy silently does nothing, mimicking an unreachable
    /// source location.
    struct NoOpCopyBridge;

    #[async_trait]
    impl FileBridge for NoOpCopyBridge {
        async fn copy(&self, _src: &Path, _dst: &Path, _recursive: bool) -> Result<(), Error> {
            Ok(())
        }

        async fn exists(&self, _path: &Path) -> bool {
            false
        }

        async fn list_dir(&self, _path: &Path) -> Result<Vec<PathBuf>, Error> {
            Ok(Vec::new())
        }

        async fn create_dir_all(&self, _path: &Path) -> Result<(), Error> {
            Ok(())
        }

        async fn remove_dir_all(&self, _path: &Path) -> Result<(), Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn populate_fails_when_copy_leaves_nothing_behind() {
        let staging = StagingArea::at("/tmp/wh/stage-missing");
        let err = staging
            .populate(&NoOpCopyBridge, Path::new("/src/proj"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Publish(PublishError::StagingFailed { .. })
        ));
    }
}
