//! Output formatting for CLI

use crate::search::SearchStats;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the counters of a finished search
pub fn print_stats(stats: &SearchStats) {
    print_kv("Nodes visited", &format_number(stats.nodes));
    print_kv("Leaves evaluated", &format_number(stats.leaves));
    print_kv("Cutoffs", &format_number(stats.cutoffs));
}

/// Join a path for display, `(empty)` when nothing was expanded
pub fn format_path<T: std::fmt::Display>(path: &[T]) -> String {
    if path.is_empty() {
        return "(empty)".to_string();
    }
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
