//! Document loading stage.
//!
//! Reads normalized SBOM documents from JSON.

use std::path::Path;

use crate::error::{ErrorContext, Result, SbomScoreError};
use crate::model::SbomDocument;

/// Parse a normalized document from a JSON string
pub fn parse_document_str(content: &str) -> Result<SbomDocument> {
    if content.trim().is_empty() {
        return Err(SbomScoreError::empty_input("<input>"));
    }
    Ok(serde_json::from_str(content)?)
}

/// Load a normalized document from a file
pub fn load_document(path: &Path) -> Result<SbomDocument> {
    tracing::debug!("Loading SBOM: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| SbomScoreError::io(path, e))?;
    if content.trim().is_empty() {
        return Err(SbomScoreError::empty_input(path.display().to_string()));
    }

    let doc = serde_json::from_str::<SbomDocument>(&content)
        .with_context(|| format!("reading {}", path.display()))?;

    tracing::debug!(
        "Loaded {} components and {} dependency declarations from {}",
        doc.component_count(),
        doc.dependencies.len(),
        path.display()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_object_is_empty_document() {
        let doc = parse_document_str("{}").unwrap();
        assert_eq!(doc.component_count(), 0);
        assert!(doc.primary_component_id.is_none());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_document_str("  \n"),
            Err(SbomScoreError::Load {
                source: LoadErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_invalid_json_and_wrong_shape() {
        assert!(matches!(
            parse_document_str("{ not json"),
            Err(SbomScoreError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            })
        ));
        assert!(matches!(
            parse_document_str("[1, 2, 3]"),
            Err(SbomScoreError::Load {
                source: LoadErrorKind::NotADocument(_),
                ..
            })
        ));
    }

    #[test]
    fn test_load_document_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(
            &path,
            r#"{"primary_component_id": "app", "components": [{"id": "app", "name": "app"}]}"#,
        )
        .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.component_count(), 1);
        assert_eq!(doc.primary_component().map(|c| c.name.as_str()), Some("app"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, SbomScoreError::Io { .. }));
    }
}
