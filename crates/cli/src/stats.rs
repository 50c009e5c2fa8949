//! Run summary output

use gk_engine::RunReport;
use owo_colors::OwoColorize;

/// Print the summary of a finished run
pub fn print_summary(report: &RunReport) {
    let renamed = report.renamed();
    let failed = report.failed;

    if failed > 0 {
        println!(
            "{} {} renamed | {} {} failed",
            "●".bright_green(),
            renamed.to_string().bright_green().bold(),
            "●".bright_red(),
            failed.to_string().bright_red().bold(),
        );
    } else {
        println!(
            "{} {} renamed",
            "●".bright_green(),
            renamed.to_string().bright_green().bold()
        );
    }

    println!("  {}", summary_details(report).dimmed());

    println!(
        "  {} {} {}",
        report.root.display().bright_white().bold(),
        "in".dimmed(),
        format!("{:.2?}", report.elapsed).dimmed()
    );
}

/// Per-pass counters joined into one line
fn summary_details(report: &RunReport) -> String {
    let mut parts = Vec::new();
    parts.push(format!("{} files copied", report.files_copied));
    parts.push(format!("{} files rewritten", report.files_rewritten));
    if report.files_renamed > 0 {
        parts.push(format!("{} files renamed", report.files_renamed));
    }
    if report.dirs_renamed > 0 {
        parts.push(format!("{} directories renamed", report.dirs_renamed));
    }
    if report.pipelines_patched > 0 {
        parts.push(format!("{} pipelines patched", report.pipelines_patched));
    }
    if report.dirs_skipped > 0 {
        parts.push(format!("{} directories skipped", report.dirs_skipped));
    }
    parts.join(", ")
}
