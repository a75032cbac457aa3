//! Pipeline orchestration for scoring runs.
//!
//! Shared load → evaluate → report logic for the CLI command handlers.

mod evaluate_stage;
mod load;
mod output;
mod report_stage;

pub use evaluate_stage::{evaluate_document, evaluate_file, evaluate_files, EvaluationRequest};
pub use load::{load_document, parse_document_str};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::output_reports;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall score below `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
    /// At least one profile failed its compliance policy
    pub const NON_COMPLIANT: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_THRESHOLD, 1);
        assert_eq!(exit_codes::NON_COMPLIANT, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
