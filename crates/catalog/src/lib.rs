#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Catalog and schema discovery
//!
//! Queries the platform metadata service once for the external volume
//! schemas of a catalog and holds a local name-indexed view. The metadata
//! query itself stays behind the [`MetadataClient`] seam; this crate only
//! owns the local index built on top of it.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;
use wheelhouse_errors::{CatalogError, Error};
use wheelhouse_types::SchemaInfo;

/// Read-only access to the platform metadata service
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// The catalog the current execution context is bound to, if any
    async fn initial_catalog_name(&self) -> Result<Option<String>, Error>;

    /// External volume schemas of a catalog and their storage locations
    async fn external_schemas(&self, catalog: &str) -> Result<Vec<SchemaInfo>, Error>;
}

/// A catalog and its external volume schemas, indexed by schema name
#[derive(Debug, Clone)]
pub struct CatalogInfo {
    name: String,
    schemas: Vec<SchemaInfo>,
    by_name: HashMap<String, usize>,
}

impl CatalogInfo {
    /// Query the metadata service and build the local schema index.
    ///
    /// `catalog_override` takes precedence over the execution context's
    /// initial catalog name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingCatalogName` when no catalog name is
    /// available, `CatalogError::EmptyCatalog` when the catalog has no
    /// external volume schemas, or the client's query error.
    pub async fn discover(
        client: &dyn MetadataClient,
        catalog_override: Option<&str>,
    ) -> Result<Self, Error> {
        let name = match catalog_override {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => client
                .initial_catalog_name()
                .await?
                .filter(|name| !name.is_empty())
                .ok_or(CatalogError::MissingCatalogName)?,
        };

        let schemas = client.external_schemas(&name).await?;
        if schemas.is_empty() {
            return Err(CatalogError::EmptyCatalog { catalog: name }.into());
        }

        debug!(catalog = %name, schemas = schemas.len(), "discovered catalog schemas");
        Ok(Self::from_schemas(name, schemas))
    }

    /// Build the index over already-fetched rows. Later rows win on
    /// duplicate schema names.
    #[must_use]
    pub fn from_schemas(name: impl Into<String>, schemas: Vec<SchemaInfo>) -> Self {
        let by_name = schemas
            .iter()
            .enumerate()
            .map(|(idx, schema)| (schema.name.clone(), idx))
            .collect();
        Self {
            name: name.into(),
            schemas,
            by_name,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a schema by name
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&SchemaInfo> {
        self.by_name.get(name).map(|idx| &self.schemas[*idx])
    }

    /// Look up a schema by name, failing with `SchemaNotFound`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SchemaNotFound` when the schema does not exist
    /// in the catalog.
    pub fn get(&self, name: &str) -> Result<&SchemaInfo, Error> {
        self.schema(name).ok_or_else(|| {
            CatalogError::SchemaNotFound {
                schema: name.to_string(),
                catalog: self.name.clone(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaInfo> {
        self.schemas.iter()
    }
}

impl<'a> IntoIterator for &'a CatalogInfo {
    type Item = &'a SchemaInfo;
    type IntoIter = std::slice::Iter<'a, SchemaInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClient {
        initial: Option<String>,
        schemas: Vec<SchemaInfo>,
    }

    #[async_trait]
    impl MetadataClient for FakeClient {
        async fn initial_catalog_name(&self) -> Result<Option<String>, Error> {
            Ok(self.initial.clone())
        }

        async fn external_schemas(&self, _catalog: &str) -> Result<Vec<SchemaInfo>, Error> {
            Ok(self.schemas.clone())
        }
    }

    #[tokio::test]
    async fn discover_indexes_schemas_by_name() {
        let client = FakeClient {
            initial: Some("main".to_string()),
            schemas: vec![
                SchemaInfo::new("bronze", "s3://bucket/bronze"),
                SchemaInfo::new("silver", "s3://bucket/silver"),
            ],
        };

        let catalog = CatalogInfo::discover(&client, None).await.unwrap();
        assert_eq!(catalog.name(), "main");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("silver").unwrap().storage_location,
            "s3://bucket/silver"
        );

        let err = catalog.get("gold").unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::SchemaNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn discover_prefers_explicit_catalog_name() {
        let client = FakeClient {
            initial: Some("main".to_string()),
            schemas: vec![SchemaInfo::new("bronze", "s3://bucket/bronze")],
        };

        let catalog = CatalogInfo::discover(&client, Some("sandbox")).await.unwrap();
        assert_eq!(catalog.name(), "sandbox");
    }

    #[tokio::test]
    async fn discover_rejects_missing_catalog_name() {
        for initial in [None, Some(String::new())] {
            let client = FakeClient {
                initial,
                schemas: vec![SchemaInfo::new("bronze", "s3://bucket/bronze")],
            };
            let err = CatalogInfo::discover(&client, None).await.unwrap_err();
            assert!(matches!(
                err,
                Error::Catalog(CatalogError::MissingCatalogName)
            ));
        }
    }

    #[tokio::test]
    async fn discover_rejects_empty_catalog() {
        let client = FakeClient {
            initial: Some("main".to_string()),
            schemas: Vec::new(),
        };
        let err = CatalogInfo::discover(&client, None).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn duplicate_schema_names_resolve_to_last_row() {
        let catalog = CatalogInfo::from_schemas(
            "main",
            vec![
                SchemaInfo::new("bronze", "s3://bucket/old"),
                SchemaInfo::new("bronze", "s3://bucket/new"),
            ],
        );
        assert_eq!(
            catalog.schema("bronze").unwrap().storage_location,
            "s3://bucket/new"
        );
    }
}
