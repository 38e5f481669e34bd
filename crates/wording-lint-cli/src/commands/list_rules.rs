//! List rules command implementation.

use wording_lint_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} {:<8} Description", "Code", "Name", "Fixable");
    println!("{}", "-".repeat(80));

    for rule in default_rules() {
        println!(
            "{:<10} {:<25} {:<8} {}",
            rule.code(),
            rule.name(),
            if rule.is_fixable() { "yes" } else { "no" },
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  wording-lint check --rules example-wording");
    println!("  wording-lint check --rules EW001 --fix");
}
