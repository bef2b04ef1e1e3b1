//! Console report formatter

use colored::Colorize;
use luagen_application::GenerateReport;

/// Formats generate run reports for console display
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format the report of a finished run.
    pub fn format(report: &GenerateReport) -> String {
        let mut output = String::new();

        if report.no_records() {
            output.push_str(&format!(
                "{}\n",
                "No records found in the source data.".yellow()
            ));
            return output;
        }

        if report.nothing_matched() {
            output.push_str(&format!(
                "{}\n",
                "No record matched the requested version; nothing was written.".yellow()
            ));
            return output;
        }

        for path in &report.written {
            output.push_str(&format!(
                "{} {}\n",
                "Generated".green().bold(),
                path.display()
            ));
        }

        for failure in &report.failures {
            output.push_str(&format!(
                "{} record {}: {}\n",
                "Failed".red().bold(),
                failure.position,
                failure.error
            ));
        }

        let summary = format!(
            "{} of {} records written",
            report.written.len(),
            report.total_records
        );
        output.push_str(&format!("{}\n", summary.cyan()));

        output
    }
}
