//! License data and SPDX expression handling.
//!
//! Uses the `spdx` crate for expression parsing and license classification.

use serde::{Deserialize, Serialize};

/// Sentinel values that SPDX documents use for "no license information"
const NO_LICENSE_SENTINELS: &[&str] = &["NOASSERTION", "NONE", ""];

/// Declared and concluded license expressions of a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseInfo {
    /// Licenses declared by the component author
    pub declared: Vec<String>,
    /// Licenses concluded by the SBOM author
    pub concluded: Vec<String>,
}

impl LicenseInfo {
    /// Iterate over all meaningful expressions (declared then concluded)
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.declared
            .iter()
            .chain(&self.concluded)
            .map(String::as_str)
            .filter(|e| is_meaningful(e))
    }

    /// Whether any declared or concluded license is present
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.expressions().next().is_some()
    }

    /// Whether a meaningful declared license is present
    #[must_use]
    pub fn has_declared(&self) -> bool {
        self.declared.iter().any(|e| is_meaningful(e))
    }

    /// Whether a meaningful concluded license is present
    #[must_use]
    pub fn has_concluded(&self) -> bool {
        self.concluded.iter().any(|e| is_meaningful(e))
    }

    /// Whether every present expression is a valid SPDX expression (false if none)
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.has_any() && self.expressions().all(is_valid_spdx_expression)
    }

    /// Whether any expression references a deprecated SPDX license id
    #[must_use]
    pub fn any_deprecated(&self) -> bool {
        self.expressions().any(has_deprecated_license)
    }

    /// Whether any expression requires copyleft compliance
    #[must_use]
    pub fn any_restrictive(&self) -> bool {
        self.expressions().any(is_restrictive_expression)
    }
}

fn is_meaningful(expr: &str) -> bool {
    !NO_LICENSE_SENTINELS.contains(&expr.trim())
}

/// Validate an SPDX expression using lax parsing.
///
/// Lax mode accepts common non-standard spellings ("Apache2", "/" for OR).
#[must_use]
pub fn is_valid_spdx_expression(expr: &str) -> bool {
    if !is_meaningful(expr) {
        return false;
    }
    spdx::Expression::parse_mode(expr, spdx::ParseMode::LAX).is_ok()
}

/// Split an expression into bare license ids, dropping operators,
/// parentheses, exceptions and `+` suffixes.
fn license_ids(expr: &str) -> impl Iterator<Item = &str> {
    let mut skip_next = false;
    expr.split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|tok| !tok.is_empty())
        .filter_map(move |tok| {
            if skip_next {
                skip_next = false;
                return None;
            }
            match tok {
                "AND" | "OR" | "and" | "or" => None,
                "WITH" | "with" => {
                    skip_next = true;
                    None
                }
                _ => Some(tok.trim_end_matches('+')),
            }
        })
}

/// Whether any license id in the expression is deprecated by SPDX
#[must_use]
pub fn has_deprecated_license(expr: &str) -> bool {
    license_ids(expr).any(|id| spdx::license_id(id).is_some_and(|l| l.is_deprecated()))
}

/// Whether any license id in the expression is copyleft
#[must_use]
pub fn is_restrictive_expression(expr: &str) -> bool {
    license_ids(expr).any(|id| spdx::license_id(id).is_some_and(|l| l.is_copyleft()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spdx_expression_validation() {
        assert!(is_valid_spdx_expression("MIT"));
        assert!(is_valid_spdx_expression("Apache-2.0"));
        assert!(is_valid_spdx_expression("MIT AND Apache-2.0"));
        assert!(is_valid_spdx_expression("GPL-2.0-only OR MIT"));
        assert!(!is_valid_spdx_expression("NOASSERTION"));
        assert!(!is_valid_spdx_expression(""));
    }

    #[test]
    fn test_license_id_tokenizer() {
        let ids: Vec<_> =
            license_ids("(MIT OR GPL-2.0+) AND Apache-2.0 WITH LLVM-exception").collect();
        assert_eq!(ids, vec!["MIT", "GPL-2.0", "Apache-2.0"]);
    }

    #[test]
    fn test_deprecated_license_detection() {
        assert!(has_deprecated_license("GPL-2.0"));
        assert!(has_deprecated_license("MIT OR GPL-2.0"));
        assert!(!has_deprecated_license("GPL-2.0-only"));
        assert!(!has_deprecated_license("MIT"));
    }

    #[test]
    fn test_restrictive_license_detection() {
        assert!(is_restrictive_expression("GPL-3.0-only"));
        assert!(is_restrictive_expression("MIT AND AGPL-3.0-only"));
        assert!(!is_restrictive_expression("MIT"));
        assert!(!is_restrictive_expression("Apache-2.0"));
    }

    #[test]
    fn test_license_info_sentinels() {
        let info = LicenseInfo {
            declared: vec!["NOASSERTION".to_string()],
            concluded: vec!["NONE".to_string()],
        };
        assert!(!info.has_any());
        assert!(!info.all_valid());

        let info = LicenseInfo {
            declared: vec!["MIT".to_string()],
            concluded: Vec::new(),
        };
        assert!(info.has_declared());
        assert!(!info.has_concluded());
        assert!(info.all_valid());
    }
}
