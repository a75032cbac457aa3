//! Normalized, read-only SBOM document model.
//!
//! This module defines the format-agnostic structures the scoring engine
//! reads. `CycloneDX` and SPDX documents are normalized to these structures
//! by the parser layer; the engine never mutates them.
//!
//! Documents are serde (de)serializable, so a normalized document can be
//! loaded from JSON:
//!
//! ```ignore
//! let doc: SbomDocument = serde_json::from_str(&content)?;
//! println!("{} components", doc.component_count());
//! ```

mod identifiers;
mod license;
mod metadata;
mod sbom;
mod vulnerability;

pub use identifiers::*;
pub use license::*;
pub use metadata::*;
pub use sbom::*;
pub use vulnerability::*;

pub(crate) use sbom::has_text;
