#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Model-registry lookup cache
//!
//! Queries the model registry once, keeps only the models registered under
//! a `catalog.schema.` namespace, and indexes them by short name for cheap
//! repeated lookups. The registry query stays behind the [`RegistryClient`]
//! seam.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;
use wheelhouse_errors::{Error, RegistryError};
use wheelhouse_types::RegisteredModel;

/// Read-only access to the model registry
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// All registered models visible to the caller
    async fn search_registered_models(&self) -> Result<Vec<RegisteredModel>, Error>;
}

/// Local short-name index over one `catalog.schema` namespace
#[derive(Debug, Clone)]
pub struct ModelCache {
    namespace: String,
    models: HashMap<String, RegisteredModel>,
}

impl ModelCache {
    /// Query the registry and index the models registered under
    /// `catalog.schema.`.
    ///
    /// An empty result is not an error; the namespace may simply hold no
    /// models yet.
    ///
    /// # Errors
    ///
    /// Returns the client's query error.
    pub async fn load(
        client: &dyn RegistryClient,
        catalog: &str,
        schema: &str,
    ) -> Result<Self, Error> {
        let namespace = format!("{catalog}.{schema}");
        let prefix = format!("{namespace}.");

        let models: HashMap<String, RegisteredModel> = client
            .search_registered_models()
            .await?
            .into_iter()
            .filter(|model| model.full_name.starts_with(&prefix))
            .map(|model| (model.short_name().to_string(), model))
            .collect();

        debug!(namespace = %namespace, models = models.len(), "loaded model cache");
        Ok(Self { namespace, models })
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Look up a model by short name
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&RegisteredModel> {
        self.models.get(name)
    }

    /// Look up a model by short name, failing with `ModelNotFound`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ModelNotFound` when no model with that short
    /// name is registered under the namespace.
    pub fn get(&self, name: &str) -> Result<&RegisteredModel, Error> {
        self.model(name).ok_or_else(|| {
            RegistryError::ModelNotFound {
                name: name.to_string(),
                namespace: self.namespace.clone(),
            }
            .into()
        })
    }

    /// Sorted short names of the cached models
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeRegistry {
        models: Vec<RegisteredModel>,
    }

    #[async_trait]
    impl RegistryClient for FakeRegistry {
        async fn search_registered_models(&self) -> Result<Vec<RegisteredModel>, Error> {
            Ok(self.models.clone())
        }
    }

    fn registry() -> FakeRegistry {
        FakeRegistry {
            models: vec![
                RegisteredModel::new("main.analytics.churn"),
                RegisteredModel::new("main.analytics.forecast"),
                RegisteredModel::new("main.sandbox.churn"),
                RegisteredModel::new("other.analytics.ignored"),
            ],
        }
    }

    #[tokio::test]
    async fn load_filters_to_namespace_and_indexes_by_short_name() {
        let cache = ModelCache::load(&registry(), "main", "analytics")
            .await
            .unwrap();

        assert_eq!(cache.namespace(), "main.analytics");
        assert_eq!(cache.names(), vec!["churn", "forecast"]);
        assert_eq!(
            cache.get("churn").unwrap().full_name,
            "main.analytics.churn"
        );
    }

    #[tokio::test]
    async fn get_reports_namespace_on_miss() {
        let cache = ModelCache::load(&registry(), "main", "analytics")
            .await
            .unwrap();

        let err = cache.get("ranker").unwrap_err();
        assert!(matches!(
            err,
            Error::Registry(RegistryError::ModelNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn empty_namespace_is_not_an_error() {
        let cache = ModelCache::load(&registry(), "main", "empty_schema")
            .await
            .unwrap();
        assert!(cache.is_empty());
    }
}
