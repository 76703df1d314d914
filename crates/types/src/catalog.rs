//! Metadata rows surfaced by the catalog and registry helpers

use serde::{Deserialize, Serialize};

/// An external volume schema and its storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInfo {
    /// Schema name within the catalog
    pub name: String,
    /// Storage location backing the schema's volumes
    pub storage_location: String,
}

impl SchemaInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, storage_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_location: storage_location.into(),
        }
    }
}

/// A model registered in the model registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredModel {
    /// Fully qualified name, `catalog.schema.model`
    pub full_name: String,
    /// Optional free-form description from the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RegisteredModel {
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            description: None,
        }
    }

    /// Last segment of the fully qualified name
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.full_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_takes_last_segment() {
        let model = RegisteredModel::new("main.analytics.churn");
        assert_eq!(model.short_name(), "churn");

        let bare = RegisteredModel::new("churn");
        assert_eq!(bare.short_name(), "churn");
    }
}
