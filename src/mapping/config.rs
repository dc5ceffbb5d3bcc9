//! Configuration for varbind mapping

use serde::{Deserialize, Serialize};

/// Configuration for [`RecordMapper`](super::RecordMapper).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Report malformed pattern bindings as errors instead of treating
    /// the field as a non-match.
    pub strict_patterns: bool,
}

impl MapperConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable strict pattern handling.
    pub fn with_strict_patterns(mut self, enabled: bool) -> Self {
        self.strict_patterns = enabled;
        self
    }
}
