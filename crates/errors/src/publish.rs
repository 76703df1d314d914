//! Build-and-publish pipeline error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum PublishError {
    #[error("staging directory not found after copy: {path}")]
    StagingFailed { path: String },

    #[error("build command failed: {message}")]
    BuildFailed { message: String },

    #[error("build timeout after {seconds} seconds")]
    BuildTimeout { seconds: u64 },

    #[error("no wheel files found in {dir}")]
    WheelNotFound { dir: String },

    #[error("expected exactly one wheel in {dir}, found {count}")]
    AmbiguousWheel { dir: String, count: usize },

    #[error("wheel {name} already exists in target volume")]
    WheelAlreadyExists { name: String },
}

impl UserFacingError for PublishError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::StagingFailed { .. } => {
                Some("Check that the source location exists and is readable.")
            }
            Self::BuildFailed { .. } => {
                Some("Inspect the staging directory and the build tool output, then re-run.")
            }
            Self::BuildTimeout { .. } => Some("Increase the build timeout and retry."),
            Self::WheelNotFound { .. } => {
                Some("Ensure the project's build configuration produces a wheel under dist/.")
            }
            Self::AmbiguousWheel { .. } => {
                Some("Clean stale wheels out of the build output before publishing.")
            }
            Self::WheelAlreadyExists { .. } => {
                Some("Pass --overwrite to replace the published wheel, or bump the version.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StagingFailed { .. } | Self::BuildTimeout { .. }
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::StagingFailed { .. } => "publish.staging_failed",
            Self::BuildFailed { .. } => "publish.build_failed",
            Self::BuildTimeout { .. } => "publish.build_timeout",
            Self::WheelNotFound { .. } => "publish.wheel_not_found",
            Self::AmbiguousWheel { .. } => "publish.ambiguous_wheel",
            Self::WheelAlreadyExists { .. } => "publish.wheel_already_exists",
        };
        Some(code)
    }
}
