//! Types for mapping results

use serde::{Deserialize, Serialize};

/// Summary of one bulk mapping pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingReport {
    /// Varbinds processed.
    pub total: usize,
    /// Varbinds that found a field.
    pub matched: usize,
    /// OIDs that matched no field, in arrival order.
    pub unmatched_oids: Vec<String>,
}

impl MappingReport {
    /// Whether every varbind found a field.
    pub fn all_matched(&self) -> bool {
        self.matched == self.total
    }

    /// Fraction of varbinds that found a field.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.matched as f64 / self.total as f64
    }
}
