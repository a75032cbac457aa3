//! List command handler.
//!
//! Prints the catalog: categories, features or profiles.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;

use super::build_catalog;
use crate::config::ScoreConfig;
use crate::pipeline::{write_output, OutputTarget};
use crate::quality::Catalog;

/// What `sbom-score list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Scoring categories with weights
    Categories,
    /// Comprehensive features grouped by category
    Features,
    /// Compliance profiles and their checks
    Profiles,
}

/// Run the list command
pub fn run_list(target: ListTarget, config: &ScoreConfig) -> Result<()> {
    let catalog = build_catalog(config)?;
    write_output(&render_list(&catalog, target), &OutputTarget::Stdout)?;
    Ok(())
}

/// Render one catalog listing as plain text
#[must_use]
pub fn render_list(catalog: &Catalog, target: ListTarget) -> String {
    let mut out = String::new();
    match target {
        ListTarget::Categories => {
            let _ = writeln!(out, "{:<16} {:<32} {:>6} FEATURES", "KEY", "NAME", "WEIGHT");
            for category in catalog.categories() {
                let weight = if category.is_informational() {
                    "info".to_string()
                } else {
                    format!("{}", category.weight)
                };
                let _ = writeln!(
                    out,
                    "{:<16} {:<32} {:>6} {}",
                    category.key,
                    category.name,
                    weight,
                    category.features.len()
                );
            }
        }
        ListTarget::Features => {
            for category in catalog.categories() {
                let _ = writeln!(out, "{} ({})", category.name, category.key);
                for key in &category.features {
                    if let Some(feature) = catalog.feature(key) {
                        let _ = writeln!(
                            out,
                            "  {:<34} {:>5.2}  {}",
                            feature.key, feature.weight, feature.name
                        );
                    }
                }
            }
        }
        ListTarget::Profiles => {
            for profile in catalog.profiles() {
                let _ = writeln!(out, "{} ({})", profile.name, profile.key);
                if !profile.description.is_empty() {
                    let _ = writeln!(out, "  {}", profile.description);
                }
                for key in &profile.features {
                    if let Some(item) = catalog.profile_feature(key) {
                        let kind = if item.required { "required" } else { "optional" };
                        let _ = writeln!(out, "  {:<34} {:<8}  {}", item.key, kind, item.name);
                    }
                }
            }
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_categories() {
        let out = render_list(&Catalog::standard(), ListTarget::Categories);
        assert!(out.starts_with("KEY"));
        assert!(out.contains("identification"));
        assert!(out.contains("compinfo"));
        assert!(out.contains("info"));
    }

    #[test]
    fn test_render_features_and_profiles() {
        let catalog = Catalog::standard();
        let features = render_list(&catalog, ListTarget::Features);
        assert!(features.contains("comp_with_name"));

        let profiles = render_list(&catalog, ListTarget::Profiles);
        assert!(profiles.contains("(ntia)"));
        assert!(profiles.contains("ntia_comp_supplier"));
        assert!(profiles.contains("required"));
    }
}
