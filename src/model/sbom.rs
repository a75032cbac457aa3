//! Core SBOM document and component data structures.

use super::{
    Author, Checksum, ComponentType, Composition, ExternalIdentifiers, LicenseInfo, Organization,
    Signature, SpecMetadata, Tool, Vulnerability,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalized SBOM document, read-only input to the scoring engine.
///
/// The parser layer normalizes `CycloneDX` and SPDX documents into this
/// shape; in particular SPDX `DEPENDS_ON` relationships and `CycloneDX`
/// `dependencies[].dependsOn` both become [`DependencyDeclaration`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SbomDocument {
    /// Spec-level metadata
    pub spec: SpecMetadata,
    /// Document authors
    pub authors: Vec<Author>,
    /// Generating tools
    pub tools: Vec<Tool>,
    /// Supplier of the document
    pub supplier: Option<Organization>,
    /// Manufacturer of the product described
    pub manufacturer: Option<Organization>,
    /// Document signature
    pub signature: Option<Signature>,
    /// Lifecycle phases the SBOM was produced in (e.g., "build")
    pub lifecycles: Vec<String>,
    /// Composition/completeness declarations
    pub compositions: Vec<Composition>,
    /// Vulnerabilities declared in the document
    pub vulnerabilities: Vec<Vulnerability>,
    /// Id of the primary component (`CycloneDX` metadata.component or SPDX documentDescribes)
    pub primary_component_id: Option<String>,
    /// Components in document order
    pub components: Vec<Component>,
    /// Dependency declarations in the depends-on direction
    pub dependencies: Vec<DependencyDeclaration>,
}

impl SbomDocument {
    /// Create an empty document with the given spec metadata
    #[must_use]
    pub fn new(spec: SpecMetadata) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    /// Get total component count
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Get a component by id
    #[must_use]
    pub fn get_component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Get the primary component if it is identified and present
    #[must_use]
    pub fn primary_component(&self) -> Option<&Component> {
        self.primary_component_id
            .as_deref()
            .and_then(|id| self.get_component(id))
    }

    /// Set of all component ids
    #[must_use]
    pub fn component_ids(&self) -> HashSet<&str> {
        self.components.iter().map(|c| c.id.as_str()).collect()
    }

    /// Count the components satisfying a predicate
    pub fn count_components<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Component) -> bool,
    {
        self.components.iter().filter(|c| predicate(c)).count()
    }
}

/// Component in the normalized SBOM
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Document-local id (`CycloneDX` bom-ref, SPDX SPDXID)
    pub id: String,
    /// Component name
    pub name: String,
    /// Version string
    pub version: Option<String>,
    /// Declared purpose
    pub component_type: Option<ComponentType>,
    /// Supplier information
    pub supplier: Option<Organization>,
    /// Manufacturer information
    pub manufacturer: Option<Organization>,
    /// Component authors
    pub authors: Vec<Author>,
    /// License information
    pub licenses: LicenseInfo,
    /// Cryptographic checksums
    pub checksums: Vec<Checksum>,
    /// PURL/CPE/SWID/SWHID/OmniBOR identifiers
    pub identifiers: ExternalIdentifiers,
    /// Source code repository URL
    pub source_code_url: Option<String>,
    /// Hash of the source code archive
    pub source_code_hash: Option<String>,
    /// Download location of the distributed artifact
    pub download_url: Option<String>,
    /// Copyright text
    pub copyright: Option<String>,
}

impl Component {
    /// Create a new component with minimal required fields
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a PURL
    #[must_use]
    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.identifiers.purls.push(purl.into());
        self
    }

    /// Whether the component has a non-blank name
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Whether the component has a non-blank version
    #[must_use]
    pub fn has_version(&self) -> bool {
        has_text(self.version.as_deref())
    }

    /// Whether any checksum carries a value
    #[must_use]
    pub fn has_checksum(&self) -> bool {
        self.checksums.iter().any(Checksum::has_value)
    }

    /// Whether a SHA-256-or-stronger checksum carries a value
    #[must_use]
    pub fn has_strong_checksum(&self) -> bool {
        self.checksums
            .iter()
            .any(|c| c.has_value() && c.algorithm.is_strong())
    }

    /// Whether the supplier (or, failing that, the manufacturer) is identified
    #[must_use]
    pub fn has_supplier(&self) -> bool {
        self.supplier.as_ref().is_some_and(Organization::is_present)
            || self
                .manufacturer
                .as_ref()
                .is_some_and(Organization::is_present)
    }

    /// Whether an author, supplier or manufacturer identifies who created it
    #[must_use]
    pub fn has_creator(&self) -> bool {
        self.authors.iter().any(|a| !a.name.trim().is_empty()) || self.has_supplier()
    }

    /// Display name with version
    #[must_use]
    pub fn display_name(&self) -> String {
        self.version
            .as_ref()
            .map_or_else(|| self.name.clone(), |v| format!("{}@{}", self.name, v))
    }
}

/// Dependency declaration: `source` depends on each of `depends_on`.
///
/// An empty `depends_on` is an explicit declaration of "no dependencies",
/// which is different from the source having no declaration at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyDeclaration {
    /// Depending component id
    pub source: String,
    /// Ids of the direct dependencies
    pub depends_on: Vec<String>,
}

impl DependencyDeclaration {
    /// Create a new declaration
    #[must_use]
    pub fn new<I, S>(source: impl Into<String>, depends_on: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: source.into(),
            depends_on: depends_on.into_iter().map(Into::into).collect(),
        }
    }
}

pub(crate) fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
