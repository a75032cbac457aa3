//! External identifiers for SBOM components.
//!
//! A component may carry any number of globally meaningful identifiers in
//! addition to its document-local id:
//!
//! 1. **PURL** (Package URL) - ecosystem-aware package coordinates
//! 2. **CPE** (Common Platform Enumeration) - used for vulnerability matching
//! 3. **SWID** (Software Identification) - ISO/IEC 19770-2 tag id
//! 4. **SWHID** (Software Heritage ID) - intrinsic content identifier
//! 5. **OmniBOR** - artifact dependency graph identifier

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

// Patterns are literals; a failed compile only disables that check.
static CPE_23: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^cpe:2\.3:[aho\*\-](:[^:\s]+){10}$").ok());

static CPE_22: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^cpe:/[aho]:[^:\s]+(:[^:\s]*){0,5}$").ok());

static SWHID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^swh:1:(cnt|dir|rel|rev|snp):[0-9a-f]{40}(;.*)?$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, input: &str) -> bool {
    Option::as_ref(pattern).is_some_and(|re| re.is_match(input))
}

/// Globally meaningful identifiers attached to a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIdentifiers {
    /// Package URLs
    pub purls: Vec<String>,
    /// CPE 2.2 or 2.3 strings
    pub cpes: Vec<String>,
    /// SWID tag ids
    pub swids: Vec<String>,
    /// Software Heritage ids
    pub swhids: Vec<String>,
    /// OmniBOR artifact ids
    pub omnibor_ids: Vec<String>,
}

impl ExternalIdentifiers {
    /// Whether any identifier of any kind is present
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.all().any(|id| !id.trim().is_empty())
    }

    /// Iterate over all identifiers regardless of kind
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.purls
            .iter()
            .chain(&self.cpes)
            .chain(&self.swids)
            .chain(&self.swhids)
            .chain(&self.omnibor_ids)
    }

    /// Whether at least one PURL is present
    #[must_use]
    pub fn has_purl(&self) -> bool {
        self.purls.iter().any(|p| !p.trim().is_empty())
    }

    /// Whether at least one CPE is present
    #[must_use]
    pub fn has_cpe(&self) -> bool {
        self.cpes.iter().any(|c| !c.trim().is_empty())
    }

    /// Whether every PURL present parses as a Package URL (false if none)
    #[must_use]
    pub fn has_valid_purls(&self) -> bool {
        self.has_purl() && self.purls.iter().all(|p| is_valid_purl(p))
    }

    /// Whether every CPE present is well formed (false if none)
    #[must_use]
    pub fn has_valid_cpes(&self) -> bool {
        self.has_cpe() && self.cpes.iter().all(|c| is_valid_cpe(c))
    }
}

/// Check a Package URL with the `packageurl` parser
#[must_use]
pub fn is_valid_purl(purl: &str) -> bool {
    packageurl::PackageUrl::from_str(purl.trim()).is_ok()
}

/// Check a CPE 2.3 formatted string or a CPE 2.2 URI
#[must_use]
pub fn is_valid_cpe(cpe: &str) -> bool {
    let cpe = cpe.trim();
    matches(&CPE_23, cpe) || matches(&CPE_22, cpe)
}

/// Check a Software Heritage identifier (core SWHID plus optional qualifiers)
#[must_use]
pub fn is_valid_swhid(swhid: &str) -> bool {
    matches(&SWHID, swhid.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purl_validation() {
        assert!(is_valid_purl("pkg:npm/%40scope/name@1.0.0"));
        assert!(is_valid_purl("pkg:maven/org.apache/commons-lang3@3.12.0"));
        assert!(!is_valid_purl("npm:something"));
        assert!(!is_valid_purl("invalid"));
    }

    #[test]
    fn test_cpe_validation() {
        assert!(is_valid_cpe("cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*"));
        assert!(is_valid_cpe("cpe:/a:vendor:product:1.0"));
        assert!(!is_valid_cpe("cpe:2.3:a:vendor:product"));
        assert!(!is_valid_cpe("something:else"));
    }

    #[test]
    fn test_swhid_validation() {
        assert!(is_valid_swhid(
            "swh:1:cnt:94a9ed024d3859793618152ea559a168bbcbb5e2"
        ));
        assert!(!is_valid_swhid("swh:1:cnt:xyz"));
    }

    #[test]
    fn test_identifier_presence() {
        let mut ids = ExternalIdentifiers::default();
        assert!(!ids.has_any());
        assert!(!ids.has_valid_purls());

        ids.swids.push("swid:example-tag".to_string());
        assert!(ids.has_any());
        assert!(!ids.has_purl());

        ids.purls.push("pkg:cargo/serde@1.0.200".to_string());
        assert!(ids.has_valid_purls());

        ids.purls.push("not-a-purl".to_string());
        assert!(!ids.has_valid_purls());
    }
}
