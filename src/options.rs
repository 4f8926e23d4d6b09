//! Engine configuration.

use std::time::Duration;

/// Options threaded through every validation and comparison call.
#[derive(Debug, Clone)]
pub struct Options {
    /// Normalized Levenshtein ratio a fuzzy text comparison must *exceed*
    /// to count as a match. A ratio exactly equal to the threshold fails.
    pub levenshtein_ratio_threshold: f64,
    /// Hard deadline for a single outbound authority request.
    pub http_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            levenshtein_ratio_threshold: 0.90,
            http_timeout: Duration::from_secs(3),
        }
    }
}
