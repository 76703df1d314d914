//! Catalog and schema discovery error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("initial catalog name is empty in cluster configuration")]
    MissingCatalogName,

    #[error("no schema exists in catalog {catalog}")]
    EmptyCatalog { catalog: String },

    #[error("schema {schema} not found in catalog {catalog}")]
    SchemaNotFound { schema: String, catalog: String },

    #[error("metadata query failed: {message}")]
    QueryFailed { message: String },
}

impl UserFacingError for CatalogError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingCatalogName => {
                Some("Set the initial catalog name in the cluster configuration.")
            }
            Self::EmptyCatalog { .. } => {
                Some("Create at least one external volume schema in the catalog.")
            }
            Self::SchemaNotFound { .. } => None,
            Self::QueryFailed { .. } => {
                Some("Check connectivity to the metadata service and retry.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MissingCatalogName => "catalog.missing_catalog_name",
            Self::EmptyCatalog { .. } => "catalog.empty_catalog",
            Self::SchemaNotFound { .. } => "catalog.schema_not_found",
            Self::QueryFailed { .. } => "catalog.query_failed",
        };
        Some(code)
    }
}
