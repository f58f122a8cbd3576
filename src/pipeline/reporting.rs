//! Changelog run reporting

use std::fmt::Write;

use super::PipelineReport;

/// Pipeline run reporter
pub struct PipelineReporter;

impl PipelineReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &PipelineReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Changelog Summary ===\n");
        writeln!(output, "Releases:     {}", report.releases)
            .expect("Writing to String should never fail");
        writeln!(output, "Mod deltas:   {}", report.deltas)
            .expect("Writing to String should never fail");

        if !report.warnings.is_empty() {
            writeln!(output, "\nWarnings ({}):", report.warnings.len())
                .expect("Writing to String should never fail");
            for warning in &report.warnings {
                writeln!(output, "  - {warning}").expect("Writing to String should never fail");
            }
        }

        if report.is_clean() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with warnings\n");
        }

        output
    }
}
