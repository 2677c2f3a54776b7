use crate::error::ComparisonError;
use crate::report::ComparisonReport;
use core_types::{CommandStat, CoreError, Dataset, TOTAL_LABEL, Verdict};
use std::collections::BTreeSet;

/// A stateless calculator for deriving comparison metrics from usage datasets.
#[derive(Debug, Default)]
pub struct ComparisonEngine {}

impl ComparisonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for comparing a developer's usage against the
    /// framework-wide baseline.
    ///
    /// # Arguments
    ///
    /// * `baseline` - The framework-wide aggregate `Dataset`. Its command
    ///   list is the universe: commands it does not list are not part of the
    ///   framework's surface.
    /// * `user` - The `Dataset` mined for a single developer.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `ComparisonReport` or a `ComparisonError`.
    pub fn compare(
        &self,
        baseline: &Dataset,
        user: &Dataset,
    ) -> Result<ComparisonReport, ComparisonError> {
        // A dataset without a command list is rejected before any comparison.
        let baseline_commands = baseline.commands()?;
        let user_commands = user.commands()?;

        let mut report = ComparisonReport::new();
        report.total_commands_count = baseline_commands.len();
        report.used_commands_count = user_commands.len();

        self.count_threshold_matches(baseline_commands, user, &mut report)?;
        self.compare_overall_averages(baseline, user, &mut report);
        self.collect_year_series(baseline, user, &mut report);

        tracing::debug!(
            total = report.total_commands_count,
            used = report.used_commands_count,
            higher_frequency = report.higher_frequency_count,
            higher_usage = report.higher_usage_count,
            "usage comparison complete"
        );

        Ok(report)
    }

    /// Counts the baseline commands whose thresholds the developer meets or
    /// exceeds.
    fn count_threshold_matches(
        &self,
        baseline_commands: &[CommandStat],
        user: &Dataset,
        report: &mut ComparisonReport,
    ) -> Result<(), ComparisonError> {
        // Extract every threshold first, so a malformed baseline entry fails
        // the whole call before anything has been counted.
        let thresholds = baseline_commands
            .iter()
            .map(|cmd| Ok((&cmd.command, cmd.required_frequency()?, cmd.required_usage()?)))
            .collect::<Result<Vec<_>, CoreError>>()?;

        for (command, baseline_frequency, baseline_usage) in thresholds {
            // A command the developer never used contributes to neither count.
            // It is skipped, not counted as falling short.
            if let Some(used) = user.find_command(command) {
                // Ties count as meeting the baseline.
                if used
                    .average_frequency
                    .is_some_and(|frequency| frequency >= baseline_frequency)
                {
                    report.higher_frequency_count += 1;
                }
                if used.count.is_some_and(|count| count as f64 >= baseline_usage) {
                    report.higher_usage_count += 1;
                }
            }
        }

        Ok(())
    }

    /// Classifies the user's overall coverage and frequency against the
    /// baseline's.
    fn compare_overall_averages(
        &self,
        baseline: &Dataset,
        user: &Dataset,
        report: &mut ComparisonReport,
    ) {
        report.coverage_verdict = Verdict::of(user.average_coverage, baseline.average_coverage);
        report.frequency_verdict = Verdict::of(user.average_frequency, baseline.average_frequency);
    }

    /// Builds the per-year usage series over the union of both datasets'
    /// calendar years.
    fn collect_year_series(
        &self,
        baseline: &Dataset,
        user: &Dataset,
        report: &mut ComparisonReport,
    ) {
        let mut labels: BTreeSet<&str> = baseline.years.keys().map(String::as_str).collect();
        labels.extend(user.years.keys().map(String::as_str));
        // The all-time aggregate is not a calendar year.
        labels.remove(TOTAL_LABEL);

        // Year labels are formatted so lexical order equals chronological
        // order, and the BTreeSet already iterates ascending.
        let years_list: Vec<String> = labels.iter().map(|label| (*label).to_string()).collect();
        let year_series = years_list
            .iter()
            .map(|label| user.years.get(label).map_or(0, |bucket| bucket.total))
            .collect();

        report.years_list = years_list;
        report.year_series = year_series;
    }
}
