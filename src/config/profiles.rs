//! Custom compliance profiles from YAML.
//!
//! A profile file lists named profiles and the checks they require. Each
//! listed name resolves first as a profile item key, then as a
//! comprehensive feature key or alias; the latter is wrapped as a required
//! item. Names that resolve to nothing are skipped with a warning, and a
//! profile left with no checks is not registered at all.

use std::path::Path;

use super::file::ConfigFileError;
use super::types::{ProfileConfig, ProfileDefinition};
use super::validation::Validatable;
use crate::quality::{Catalog, CatalogBuilder, ProfileFeatureSpec, ProfileSpec};

impl ProfileConfig {
    /// Parse and validate profile YAML.
    pub fn parse(content: &str) -> Result<Self, ConfigFileError> {
        let config: Self = serde_yaml::from_str(content)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigFileError::Invalid(errors))
        }
    }

    /// Load and validate a profile file.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Err(ConfigFileError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Extend `catalog` with these profiles.
    ///
    /// A custom profile replaces a built-in one with the same key.
    #[must_use]
    pub fn apply_to(&self, catalog: &Catalog) -> Catalog {
        let mut builder = catalog.to_builder();
        for definition in &self.profiles {
            register_profile(&mut builder, definition);
        }
        builder.build()
    }
}

fn register_profile(builder: &mut CatalogBuilder, definition: &ProfileDefinition) {
    let key = definition.key();
    let mut items = Vec::with_capacity(definition.features.len());

    for name in &definition.features {
        let name = name.trim();
        match resolve_item(builder, name) {
            Some(item) => items.push(item),
            None => tracing::warn!(
                "Profile '{}': unknown feature '{}', skipping",
                definition.name,
                name
            ),
        }
    }

    if items.is_empty() {
        tracing::warn!(
            "Profile '{}' has no known features, not registering it",
            definition.name
        );
        return;
    }

    tracing::debug!("Registering custom profile '{}' with {} items", key, items.len());
    builder.insert_profile(ProfileSpec {
        key,
        name: definition.name.trim().to_string(),
        description: definition.description.clone().unwrap_or_default(),
        features: items,
    });
}

/// Resolve a listed name to a profile item key, registering a wrapper
/// item for comprehensive features.
fn resolve_item(builder: &mut CatalogBuilder, name: &str) -> Option<String> {
    if builder.catalog().has_profile_feature(name) {
        return Some(name.to_string());
    }

    let wrapped = {
        let catalog = builder.catalog();
        let key = catalog.resolve_feature_alias(name)?;
        if catalog.has_profile_feature(key) {
            return Some(key.to_string());
        }
        let feature = catalog.feature(key)?;
        ProfileFeatureSpec {
            key: feature.key.clone(),
            name: feature.name.clone(),
            required: true,
            description: String::new(),
            evaluate: feature.evaluate,
        }
    };

    let key = wrapped.key.clone();
    builder.insert_profile_feature(wrapped);
    Some(key)
}
