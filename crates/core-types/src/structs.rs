use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Using `#[serde(rename_all = "camelCase")]` to automatically map from the analyzer
// service's JSON camelCase to Rust snake_case.

/// The reserved key in a dataset's `years` map that holds the all-time
/// aggregate. It is not a calendar year and must never appear in a per-year
/// series.
pub const TOTAL_LABEL: &str = "total";

/// Usage statistics for a single command (one named entry point of the
/// framework's API surface).
///
/// Baseline-side and user-side stats share this shape but populate different
/// fields: the baseline carries `average_usage` (the expected usage count of
/// the aggregate population), the user side carries `count` (the observed
/// usage count). A field the analyzer did not emit deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandStat {
    /// Command identifier, unique within a dataset's command list.
    pub command: String,

    /// How many times the developer used the command. User-side only.
    #[serde(default)]
    pub count: Option<u64>,

    /// Usage rate normalized per thousand lines of code.
    #[serde(default)]
    pub average_frequency: Option<f64>,

    /// Expected usage count exhibited by the aggregate population. Baseline-side only.
    #[serde(default)]
    pub average_usage: Option<f64>,
}

impl CommandStat {
    /// The frequency threshold this entry carries as a baseline command.
    ///
    /// A baseline command without `averageFrequency` cannot be compared
    /// against, so this is an `InvalidInput` error rather than a default.
    pub fn required_frequency(&self) -> Result<f64, CoreError> {
        self.average_frequency.ok_or_else(|| {
            CoreError::InvalidInput(
                format!("command '{}'", self.command),
                "missing averageFrequency".to_string(),
            )
        })
    }

    /// The expected-usage threshold this entry carries as a baseline command.
    pub fn required_usage(&self) -> Result<f64, CoreError> {
        self.average_usage.ok_or_else(|| {
            CoreError::InvalidInput(
                format!("command '{}'", self.command),
                "missing averageUsage".to_string(),
            )
        })
    }
}

/// Usage aggregated for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBucket {
    /// Total usage count attributed to that year.
    pub total: u64,
}

/// One usage dataset as delivered by the analyzer service.
///
/// The same shape describes both the framework-wide baseline and a single
/// developer's usage; see `CommandStat` for the field-presence differences
/// between the two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Per-command statistics, unique by `command` name. Kept optional at the
    /// wire level so a malformed payload surfaces as an `InvalidInput` error
    /// from `commands()` instead of an opaque deserialization failure.
    #[serde(default)]
    pub commands: Option<Vec<CommandStat>>,

    /// Usage per year label, plus the reserved `TOTAL_LABEL` aggregate entry.
    /// May be empty.
    #[serde(default)]
    pub years: BTreeMap<String, YearBucket>,

    /// Fraction of the command surface actually exercised, in [0, 1].
    pub average_coverage: f64,

    /// Overall normalized usage rate across all commands (# per kLOC).
    pub average_frequency: f64,
}

impl Dataset {
    /// Validated access to the command list.
    pub fn commands(&self) -> Result<&[CommandStat], CoreError> {
        self.commands.as_deref().ok_or_else(|| {
            CoreError::InvalidInput("commands".to_string(), "field is absent".to_string())
        })
    }

    /// Finds this dataset's entry for `command` by exact name match.
    pub fn find_command(&self, command: &str) -> Option<&CommandStat> {
        self.commands
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|stat| stat.command == command)
    }
}

/// The analyzer service's response envelope: the framework-wide baseline plus
/// the statistics mined for one developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerResponse {
    /// The framework-wide aggregate baseline.
    pub framework: Dataset,
    /// The single developer's usage.
    pub user: Dataset,
}
