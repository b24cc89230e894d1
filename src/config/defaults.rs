//! Default configuration values.

/// Default remote analyzer request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries for failed remote analyzer requests
pub const DEFAULT_MAX_RETRIES: u8 = 2;

/// Upper bound accepted for `analyzer.max_retries`
pub const MAX_RETRIES_LIMIT: u8 = 10;

/// Environment variable holding the remote analyzer's bearer key
pub const DEFAULT_API_KEY_ENV: &str = "AEO_SCORER_API_KEY";
