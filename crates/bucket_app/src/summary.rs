use std::path::Path;

use bucket_engine::ScanSummary;
use console::style;

pub fn print_summary(summary: &ScanSummary, output: &Path) {
    println!("{}", style("Scan Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Candidates:").bold(), summary.total_candidates);
    println!("  {} {}", style("Attempted:").bold(), summary.attempted);
    println!("  {} {}", style("Found:").bold(), summary.succeeded);
    println!(
        "  {} {} rejected, {} unreachable",
        style("Failed:").bold(),
        summary.rejected,
        summary.unreachable
    );
    if summary.cancelled > 0 || summary.skipped() > 0 {
        println!(
            "  {} {} cancelled in flight, {} never dispatched",
            style("Interrupted:").yellow().bold(),
            summary.cancelled,
            summary.skipped()
        );
    }
    println!(
        "  {} {:.1}s",
        style("Duration:").bold(),
        summary.elapsed.as_secs_f64()
    );
    println!("  {} {}", style("Output:").bold(), output.display());
}
