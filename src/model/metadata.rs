//! Metadata structures for SBOM documents and components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SBOM specification family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SbomSpec {
    CycloneDx,
    Spdx,
    #[default]
    Unknown,
}

impl SbomSpec {
    /// Spec versions that are considered current for scoring purposes
    #[must_use]
    pub const fn supported_versions(&self) -> &'static [&'static str] {
        match self {
            Self::CycloneDx => &["1.4", "1.5", "1.6"],
            Self::Spdx => &["2.2", "2.3", "3.0"],
            Self::Unknown => &[],
        }
    }
}

impl std::fmt::Display for SbomSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CycloneDx => write!(f, "CycloneDX"),
            Self::Spdx => write!(f, "SPDX"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Serialization format of the source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileFormat {
    Json,
    Xml,
    TagValue,
    Yaml,
    Rdf,
    Other(String),
}

impl FileFormat {
    /// Whether the format is machine-readable in the sense used by the
    /// compliance standards (JSON, XML, tag-value, YAML, RDF).
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
            Self::TagValue => write!(f, "tag-value"),
            Self::Yaml => write!(f, "yaml"),
            Self::Rdf => write!(f, "rdf"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Document-level spec metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecMetadata {
    /// Specification family
    pub spec: SbomSpec,
    /// Specification version (e.g., "1.5" for `CycloneDX`, "2.3" for SPDX)
    pub spec_version: Option<String>,
    /// File format the document was read from
    pub file_format: Option<FileFormat>,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
    /// Serial number (`CycloneDX`) or document namespace (SPDX)
    pub namespace: Option<String>,
    /// Whether the source passed schema validation in the parser
    pub schema_valid: bool,
    /// Data license of the document itself (SPDX `dataLicense`)
    pub data_license: Option<String>,
}

impl SpecMetadata {
    /// Whether the declared spec version is one of the supported versions
    #[must_use]
    pub fn has_supported_version(&self) -> bool {
        self.spec_version.as_deref().is_some_and(|v| {
            let v = v.trim().trim_start_matches("SPDX-");
            self.spec.supported_versions().contains(&v)
        })
    }
}

/// Author of the SBOM document or a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    pub name: String,
    /// Optional email
    #[serde(default)]
    pub email: Option<String>,
    /// Author type
    #[serde(default)]
    pub author_type: AuthorType,
}

impl Author {
    /// Create a person author with just a name
    #[must_use]
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            author_type: AuthorType::Person,
        }
    }

    /// Whether the author carries a usable contact
    #[must_use]
    pub fn has_contact(&self) -> bool {
        self.email.as_deref().is_some_and(is_plausible_email)
    }
}

/// Type of author
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    #[default]
    Person,
    Organization,
}

/// Tool that generated the SBOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name
    pub name: String,
    /// Tool version
    #[serde(default)]
    pub version: Option<String>,
}

/// Organization/supplier/manufacturer information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    /// Organization name
    pub name: String,
    /// Contact URLs
    pub urls: Vec<String>,
    /// Contact entries
    pub contacts: Vec<Contact>,
}

impl Organization {
    /// Create a new organization with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urls: Vec::new(),
            contacts: Vec::new(),
        }
    }

    /// An organization counts as present when it has a name, a URL or a contact
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.name.trim().is_empty() || !self.urls.is_empty() || !self.contacts.is_empty()
    }

    /// Whether any contact email or URL is available
    #[must_use]
    pub fn has_contact(&self) -> bool {
        !self.urls.is_empty()
            || self
                .contacts
                .iter()
                .any(|c| c.email.as_deref().is_some_and(is_plausible_email))
    }
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Contact name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
}

/// Digital signature attached to the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    /// Signature algorithm (e.g., "ES256", "RS512")
    pub algorithm: String,
    /// Signature value
    pub value: String,
    /// Public key material, if embedded
    pub public_key: Option<String>,
    /// Certificate chain, if embedded
    pub certificate_path: Vec<String>,
}

impl Signature {
    /// A signature is complete when it has an algorithm, a value and key material
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.algorithm.trim().is_empty()
            && !self.value.trim().is_empty()
            && (self.public_key.is_some() || !self.certificate_path.is_empty())
    }
}

/// Self-declared completeness of an SBOM or an assembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessDeclaration {
    Complete,
    IncompleteFirstPartyOnly,
    IncompleteThirdPartyOnly,
    Incomplete,
    #[default]
    Unknown,
    NotSpecified,
}

impl CompletenessDeclaration {
    /// Whether the declaration carries information beyond "unknown"
    #[must_use]
    pub const fn is_declared(&self) -> bool {
        !matches!(self, Self::Unknown | Self::NotSpecified)
    }
}

impl std::fmt::Display for CompletenessDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::IncompleteFirstPartyOnly => write!(f, "incomplete (first-party only)"),
            Self::IncompleteThirdPartyOnly => write!(f, "incomplete (third-party only)"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::Unknown => write!(f, "unknown"),
            Self::NotSpecified => write!(f, "not specified"),
        }
    }
}

/// Composition (aggregate completeness) declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Composition {
    /// Completeness of the aggregate
    pub aggregate: CompletenessDeclaration,
    /// Component ids the declaration covers (empty = whole document)
    pub assemblies: Vec<String>,
}

/// Component type classification (the component's declared purpose)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ComponentType {
    Application,
    Framework,
    Library,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    File,
    Data,
    MachineLearningModel,
    Platform,
    DeviceDriver,
    Cryptographic,
    Other(String),
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Framework => write!(f, "framework"),
            Self::Library => write!(f, "library"),
            Self::Container => write!(f, "container"),
            Self::OperatingSystem => write!(f, "operating-system"),
            Self::Device => write!(f, "device"),
            Self::Firmware => write!(f, "firmware"),
            Self::File => write!(f, "file"),
            Self::Data => write!(f, "data"),
            Self::MachineLearningModel => write!(f, "machine-learning-model"),
            Self::Platform => write!(f, "platform"),
            Self::DeviceDriver => write!(f, "device-driver"),
            Self::Cryptographic => write!(f, "cryptographic"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Cryptographic checksum of a component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum {
    /// Hash algorithm
    pub algorithm: HashAlgorithm,
    /// Hash value (hex encoded)
    pub value: String,
}

impl Checksum {
    /// Create a new checksum
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            value: value.into(),
        }
    }

    /// A checksum with an empty value carries no integrity information
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Hash algorithm types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
    Other(String),
}

impl HashAlgorithm {
    /// SHA-256 or stronger (SHA-2 family at 256+ bits, SHA-3, BLAKE)
    #[must_use]
    pub const fn is_strong(&self) -> bool {
        !matches!(self, Self::Md5 | Self::Sha1 | Self::Other(_))
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Md5 => write!(f, "MD5"),
            Self::Sha1 => write!(f, "SHA-1"),
            Self::Sha256 => write!(f, "SHA-256"),
            Self::Sha384 => write!(f, "SHA-384"),
            Self::Sha512 => write!(f, "SHA-512"),
            Self::Sha3_256 => write!(f, "SHA3-256"),
            Self::Sha3_384 => write!(f, "SHA3-384"),
            Self::Sha3_512 => write!(f, "SHA3-512"),
            Self::Blake2b256 => write!(f, "BLAKE2b-256"),
            Self::Blake2b384 => write!(f, "BLAKE2b-384"),
            Self::Blake2b512 => write!(f, "BLAKE2b-512"),
            Self::Blake3 => write!(f, "BLAKE3"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Loose email check: one `@` with non-empty local part and a dotted domain
pub(crate) fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
