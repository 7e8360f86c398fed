use crate::domain::FilterOutcome;

const RULE: &str = "============================================================";

pub fn print_summary(outcome: &FilterOutcome) {
    let summary = outcome.summary();

    println!();
    println!("{RULE}");
    println!("Filtering results:");
    println!("  total servers: {}", summary.total);
    println!("  passed: {}", summary.passed);
    println!(
        "  filtered: {} ({:.1}%)",
        summary.filtered, summary.filter_rate
    );
    println!("{RULE}");
    println!();

    let tally = outcome.reason_tally();
    if !tally.is_empty() {
        println!("Breakdown by reason:");
        for (reason, count) in &tally {
            println!("  - {reason}: {count}");
        }
        println!();
    }
}
