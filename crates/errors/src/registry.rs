//! Model registry error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("model {name} not registered under {namespace}")]
    ModelNotFound { name: String, namespace: String },

    #[error("registry query failed: {message}")]
    QueryFailed { message: String },
}

impl UserFacingError for RegistryError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ModelNotFound { .. } => {
                Some("Register the model under the catalog.schema namespace first.")
            }
            Self::QueryFailed { .. } => Some("Check connectivity to the model registry and retry."),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ModelNotFound { .. } => "registry.model_not_found",
            Self::QueryFailed { .. } => "registry.query_failed",
        };
        Some(code)
    }
}
