use crate::error::ComparisonError;
use core_types::Verdict;
use serde::{Deserialize, Serialize};

/// A standardized report of how one developer's usage measures against the
/// framework-wide baseline.
///
/// This struct is the final output of the `ComparisonEngine` and serves as the
/// data transfer object handed to the presentation layer. It is derived fresh
/// on every comparison and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    // I. Command Surface
    pub total_commands_count: usize,
    pub used_commands_count: usize,

    // II. Per-Command Threshold Counts
    pub higher_frequency_count: usize,
    pub higher_usage_count: usize,

    // III. Overall Verdicts
    pub coverage_verdict: Verdict,
    pub frequency_verdict: Verdict,

    // IV. Usage Over Time
    pub years_list: Vec<String>,
    pub year_series: Vec<u64>,
}

impl ComparisonReport {
    /// Creates a new, zeroed-out ComparisonReport.
    /// This is useful as a default or starting point before calculations;
    /// the verdicts start at `Equal`.
    pub fn new() -> Self {
        Self {
            total_commands_count: 0,
            used_commands_count: 0,
            higher_frequency_count: 0,
            higher_usage_count: 0,
            coverage_verdict: Verdict::Equal,
            frequency_verdict: Verdict::Equal,
            years_list: Vec::new(),
            year_series: Vec::new(),
        }
    }

    /// Share of the framework's command surface the developer exercised, as a
    /// percentage.
    ///
    /// An empty baseline would make this a 0/0 ratio, so that case is surfaced
    /// as an explicit `AmbiguousRatio` error instead of a NaN reaching
    /// presentation.
    pub fn used_percentage(&self) -> Result<f64, ComparisonError> {
        if self.total_commands_count == 0 {
            return Err(ComparisonError::AmbiguousRatio(
                "usedCommandsCount / totalCommandsCount".to_string(),
            ));
        }
        Ok(self.used_commands_count as f64 / self.total_commands_count as f64 * 100.0)
    }
}

impl Default for ComparisonReport {
    fn default() -> Self {
        Self::new()
    }
}
