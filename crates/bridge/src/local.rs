//! Local filesystem implementation of the bridge

use crate::FileBridge;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use wheelhouse_errors::{Error, StorageError};

/// `FileBridge` backed by the local filesystem via `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct LocalBridge;

impl LocalBridge {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn copy_file(src: &Path, dst: &Path) -> Result<(), Error> {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, parent))?;
        }
        fs::copy(src, dst)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, src))?;
        Ok(())
    }

    async fn copy_tree(src: &Path, dst: &Path) -> Result<(), Error> {
        // Iterative walk; directories are queued as (source, destination) pairs
        let mut pending = vec![(src.to_path_buf(), dst.to_path_buf())];

        while let Some((src_dir, dst_dir)) = pending.pop() {
            fs::create_dir_all(&dst_dir)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, &dst_dir))?;

            let mut entries = fs::read_dir(&src_dir)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, &src_dir))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, &src_dir))?
            {
                let entry_src = entry.path();
                let entry_dst = dst_dir.join(entry.file_name());
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| StorageError::from_io_with_path(&e, &entry_src))?;

                if file_type.is_dir() {
                    pending.push((entry_src, entry_dst));
                } else {
                    fs::copy(&entry_src, &entry_dst)
                        .await
                        .map_err(|e| StorageError::from_io_with_path(&e, &entry_src))?;
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl FileBridge for LocalBridge {
    async fn copy(&self, src: &Path, dst: &Path, recursive: bool) -> Result<(), Error> {
        if recursive {
            let meta = fs::metadata(src)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, src))?;
            if !meta.is_dir() {
                return Err(StorageError::NotADirectory {
                    path: src.display().to_string(),
                }
                .into());
            }
            Self::copy_tree(src, dst).await
        } else {
            Self::copy_file(src, dst).await
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, path))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, path))?
        {
            paths.push(entry.path());
        }
        Ok(paths)
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, path))?;
        Ok(())
    }

    async fn remove_dir_all(&self, path: &Path) -> Result<(), Error> {
        match fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from_io_with_path(&e, path).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn recursive_copy_materializes_full_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("nested")).await.unwrap();
        fs::write(src.join("top.txt"), b"top").await.unwrap();
        fs::write(src.join("nested/deep.txt"), b"deep")
            .await
            .unwrap();

        let bridge = LocalBridge::new();
        let dst = temp.path().join("dst");
        bridge.copy(&src, &dst, true).await.unwrap();

        assert_eq!(fs::read(dst.join("top.txt")).await.unwrap(), b"top");
        assert_eq!(
            fs::read(dst.join("nested/deep.txt")).await.unwrap(),
            b"deep"
        );
    }

    #[tokio::test]
    async fn recursive_copy_rejects_file_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("file.txt");
        fs::write(&src, b"x").await.unwrap();

        let bridge = LocalBridge::new();
        let err = bridge
            .copy(&src, &temp.path().join("dst"), true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::NotADirectory { .. })
        ));
    }

    #[tokio::test]
    async fn file_copy_creates_destination_parents() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("wheel.whl");
        fs::write(&src, b"bytes").await.unwrap();

        let bridge = LocalBridge::new();
        let dst = temp.path().join("volumes/team/pkgs/wheel.whl");
        bridge.copy(&src, &dst, false).await.unwrap();

        assert_eq!(fs::read(&dst).await.unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn remove_dir_all_tolerates_missing_path() {
        let temp = TempDir::new().unwrap();
        let bridge = LocalBridge::new();
        bridge
            .remove_dir_all(&temp.path().join("absent"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn list_dir_returns_direct_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.whl"), b"a").await.unwrap();
        fs::write(temp.path().join("b.txt"), b"b").await.unwrap();

        let bridge = LocalBridge::new();
        let mut entries = bridge.list_dir(temp.path()).await.unwrap();
        entries.sort();
        assert_eq!(entries.len(), 2);

        let err = bridge
            .list_dir(&temp.path().join("absent"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::PathNotFound { .. })
        ));
    }
}
