use std::time::Duration;

use lexometer_core::{AnalysisReport, ScrapeReport};
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Lexometer".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Article extraction and readability metrics\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a labelled value line
pub fn print_detail(label: &str, value: impl std::fmt::Display) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.to_string().bright_white());
}

/// Print elapsed time for a stage
pub fn print_timing(label: &str, duration: Duration) {
    eprintln!(
        "  {} {:>8.2}ms",
        format!("{}:", label).dimmed(),
        duration.as_secs_f64() * 1000.0
    );
}

/// Print the outcome of a fetch run
pub fn print_scrape_summary(report: &ScrapeReport) {
    for failure in &report.failures {
        print_error(&format!("{} ({}): {}", failure.record.url, failure.record.url_id, failure.error));
    }

    let message = format!("{} of {} articles saved", report.saved.len(), report.attempted());
    if report.failures.is_empty() { print_success(&message) } else { print_warning(&message) }
}

/// Print the outcome of an analysis run
pub fn print_analysis_summary(report: &AnalysisReport) {
    for skipped in &report.skipped {
        print_warning(&format!("Skipped {}: {}", skipped.path.display(), skipped.error));
    }
    if !report.empty.is_empty() {
        print_info(&format!("{} empty file(s) ignored", report.empty.len()));
    }
}
