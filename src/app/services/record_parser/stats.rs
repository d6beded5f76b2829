//! Per-pass parsing statistics

/// Counters for one read pass
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Data lines handed to the record builder (header and skipped lines excluded)
    pub lines_read: usize,

    /// Records delivered to the handler
    pub records_parsed: usize,

    /// Lines rejected for an arity mismatch
    pub records_rejected: usize,

    /// Whether the pass stopped early on a rejected line
    pub halted: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Check if every data line produced a record
    pub fn is_clean(&self) -> bool {
        self.records_rejected == 0 && !self.halted
    }
}
