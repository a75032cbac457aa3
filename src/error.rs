//! Unified error types for sbom-score.
//!
//! Scoring itself never fails; errors come from the edges: loading
//! documents, reading configuration and rendering reports.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-score operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomScoreError {
    /// Errors while loading a normalized document
    #[error("Failed to load SBOM: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Empty input")]
    Empty,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Not a normalized SBOM document: {0}")]
    NotADocument(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Failed to write report: {0}")]
    WriteError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-score operations
pub type Result<T> = std::result::Result<T, SbomScoreError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SbomScoreError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for an empty input
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::load(format!("at {}", path.into()), LoadErrorKind::Empty)
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SbomScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomScoreError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_data() {
            LoadErrorKind::NotADocument(err.to_string())
        } else {
            LoadErrorKind::InvalidJson(err.to_string())
        };
        Self::load("JSON deserialization", kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first: `"outer: inner: original"`.
///
/// ```ignore
/// use sbom_score::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomScoreError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SbomScoreError, new_ctx: &str) -> SbomScoreError {
    match err {
        SbomScoreError::Load { context, source } => SbomScoreError::Load {
            context: chain_context(new_ctx, &context),
            source,
        },
        SbomScoreError::Report { context, source } => SbomScoreError::Report {
            context: chain_context(new_ctx, &context),
            source,
        },
        SbomScoreError::Io {
            path,
            message,
            source,
        } => SbomScoreError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomScoreError::Config(msg) => SbomScoreError::Config(chain_context(new_ctx, &msg)),
        SbomScoreError::Validation(msg) => {
            SbomScoreError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = SbomScoreError::empty_input("sbom.json");
        assert_eq!(err.to_string(), "Failed to load SBOM: at sbom.json");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SbomScoreError::io("/tmp/missing.json", io_err);
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_serde_json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            SbomScoreError::from(syntax),
            SbomScoreError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            }
        ));

        let data = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        assert!(matches!(
            SbomScoreError::from(data),
            SbomScoreError::Load {
                source: LoadErrorKind::NotADocument(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chains_outermost_first() {
        fn inner() -> Result<()> {
            Err(SbomScoreError::load("base", LoadErrorKind::Empty))
        }

        let result = inner().context("middle").context("outer");
        match result {
            Err(SbomScoreError::Load { context, .. }) => {
                assert_eq!(context, "outer: middle: base");
            }
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let ok: Result<i32> = Ok(1);
        let _ = ok.with_context(|| {
            called = true;
            "unused"
        });
        assert!(!called);

        let err: Result<i32> = Err(SbomScoreError::config("bad"));
        let chained = err.with_context(|| "loading config");
        assert!(
            matches!(chained, Err(SbomScoreError::Config(msg)) if msg == "loading config: bad")
        );
    }
}
