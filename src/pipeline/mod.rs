//! Pipeline orchestration for CLI commands.
//!
//! Shared input → analyze → report plumbing, so the command handlers only
//! deal with arguments and exit codes.

mod analyze;
mod input;
mod output;

pub use analyze::AnalysisPipeline;
pub use input::InputSource;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A final score fell below `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
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
        assert_eq!(exit_codes::ERROR, 3);
    }
}
