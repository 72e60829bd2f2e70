// Colored terminal report for a document comparison.
//
// The answer file only carries the bare percentage; this is the human
// view — score banner, a similarity bar, and the shared terms driving
// the match.

use std::path::Path;

use colored::Colorize;

use crate::similarity::report::ComparisonReport;

/// Display the full comparison report in the terminal.
pub fn display_report(report: &ComparisonReport, original: &Path, candidate: &Path) {
    println!("\n{}", "=== Similarity Report ===".bold());
    println!();
    println!("  Original:  {}", original.display());
    println!("  Candidate: {}", candidate.display());
    println!();

    let bar_width: usize = 30;
    let filled = ((report.cosine * bar_width as f64).round() as usize).min(bar_width);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));

    println!(
        "  {} {}  {}",
        bar.dimmed(),
        colorize_score(report.percent),
        band_label(report.percent),
    );
    println!();

    println!(
        "  Tokens:     {} original / {} candidate",
        report.original_tokens, report.candidate_tokens
    );
    println!(
        "  Vocabulary: {} original / {} candidate",
        report.original_vocabulary, report.candidate_vocabulary
    );
    println!("  Jaccard:    {:.2}", report.jaccard);

    if report.shared_terms.is_empty() {
        println!("\n  {}", "No shared terms.".dimmed());
        return;
    }

    println!("\n  {}", "Top shared terms".dimmed());
    println!(
        "  {:<16} {:>8}  {:>9}",
        "Term".dimmed(),
        "Original".dimmed(),
        "Candidate".dimmed(),
    );
    println!("  {}", "-".repeat(36).dimmed());
    for term in &report.shared_terms {
        println!(
            "  {:<16} {:>8}  {:>9}",
            term.term, term.original_count, term.candidate_count
        );
    }
}

/// Color the percentage by similarity band: high similarity is the alarm
/// condition in a plagiarism check, so it gets red.
fn colorize_score(percent: f64) -> String {
    let text = format!("{percent:>6.2}%");
    if percent >= 80.0 {
        text.red().bold().to_string()
    } else if percent >= 50.0 {
        text.yellow().bold().to_string()
    } else {
        text.green().to_string()
    }
}

fn band_label(percent: f64) -> String {
    let label = if percent >= 80.0 {
        "likely copy"
    } else if percent >= 50.0 {
        "substantial overlap"
    } else if percent > 0.0 {
        "low overlap"
    } else {
        "no overlap"
    };
    label.dimmed().to_string()
}
