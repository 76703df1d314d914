//! External build tool invocation

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;
use wheelhouse_config::PublishConfig;
use wheelhouse_errors::{Error, PublishError};

/// Capability object for the opaque source-to-wheel build step
///
/// Alternative build toolchains can be substituted without touching the
/// pipeline control flow.
#[async_trait]
pub trait WheelBuilder: Send + Sync {
    /// Run the build with `working_dir` as the current directory.
    ///
    /// The build is expected to leave its wheel(s) in the conventional
    /// `dist/` subdirectory of `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::BuildFailed` when the build cannot run or
    /// exits unsuccessfully.
    async fn build(&self, working_dir: &Path) -> Result<(), Error>;
}

/// `WheelBuilder` that shells out to a configured command
#[derive(Debug, Clone)]
pub struct CommandWheelBuilder {
    command: String,
    args: Vec<String>,
}

impl CommandWheelBuilder {
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    #[must_use]
    pub fn from_config(config: &PublishConfig) -> Self {
        Self::new(config.build_command.clone(), config.build_args.clone())
    }
}

impl Default for CommandWheelBuilder {
    fn default() -> Self {
        Self::new(
            "python",
            vec!["setup.py".to_string(), "bdist_wheel".to_string()],
        )
    }
}

#[async_trait]
impl WheelBuilder for CommandWheelBuilder {
    async fn build(&self, working_dir: &Path) -> Result<(), Error> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        cmd.current_dir(working_dir);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(
            command = %self.command,
            args = ?self.args,
            working_dir = %working_dir.display(),
            "running build command"
        );

        let output = cmd.output().await.map_err(|e| PublishError::BuildFailed {
            message: format!("{}: {e}", self.command),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PublishError::BuildFailed {
                message: format!(
                    "{} {} exited with {}: {}",
                    self.command,
                    self.args.join(" "),
                    output.status,
                    stderr.trim()
                ),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn build_surfaces_nonzero_exit_with_stderr() {
        let temp = TempDir::new().unwrap();
        let builder = CommandWheelBuilder::new(
            "sh",
            vec!["-c".to_string(), "echo broken >&2; exit 3".to_string()],
        );

        let err = builder.build(temp.path()).await.unwrap_err();
        match err {
            Error::Publish(PublishError::BuildFailed { message }) => {
                assert!(message.contains("broken"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn build_runs_in_working_directory() {
        let temp = TempDir::new().unwrap();
        let builder = CommandWheelBuilder::new(
            "sh",
            vec!["-c".to_string(), "pwd > where.txt".to_string()],
        );

        builder.build(temp.path()).await.unwrap();
        let recorded = std::fs::read_to_string(temp.path().join("where.txt")).unwrap();
        assert_eq!(
            Path::new(recorded.trim()).canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[tokio::test]
    async fn build_fails_when_command_is_missing() {
        let temp = TempDir::new().unwrap();
        let builder = CommandWheelBuilder::new("wheelhouse-no-such-tool", Vec::new());

        let err = builder.build(temp.path()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Publish(PublishError::BuildFailed { .. })
        ));
    }
}
