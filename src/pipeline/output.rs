//! Output handling for reports.

use std::path::PathBuf;

use crate::error::{ReportErrorKind, Result, SbomScoreError};

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Determine if color should be used based on flags, environment and target
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err() && *target == OutputTarget::Stdout
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| {
                SbomScoreError::report(
                    format!("writing {}", path.display()),
                    ReportErrorKind::WriteError(e.to_string()),
                )
            })?;
            tracing::info!("Report written to {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("/tmp/report.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_no_color_for_files_or_flag() {
        let file = OutputTarget::File(PathBuf::from("out.txt"));
        assert!(!should_use_color(false, &file));
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        write_output("hello", &OutputTarget::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_write_output_missing_dir_fails() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/report.txt"));
        match write_output("x", &target) {
            Err(SbomScoreError::Report {
                context,
                source: ReportErrorKind::WriteError(_),
            }) => assert_eq!(context, "writing /nonexistent/dir/report.txt"),
            other => panic!("expected WriteError, got {other:?}"),
        }
    }
}
