use std::fmt::Write;

use crate::memory::{Reason, Statistics, Usage, Warning, WARNING_THRESHOLD};

/// Render the log of a memory check.
pub fn check(usages: &[Usage]) -> String {
    let mut buffer = String::new();
    super::rule(&mut buffer, '=');
    let _ = writeln!(buffer, "PROCESS MEMORY MANAGEMENT EXECUTION");
    super::rule(&mut buffer, '=');

    let _ = writeln!(buffer, "\n[INPUT]");
    super::rule(&mut buffer, '-');
    for (i, usage) in usages.iter().enumerate() {
        let _ = writeln!(buffer, "P[{}] Allocated: {} | Used: {}", i + 1, usage.allocated, usage.used);
    }

    let _ = writeln!(buffer, "\n[OVERLOAD CHECK]");
    super::rule(&mut buffer, '-');
    for (i, usage) in usages.iter().enumerate() {
        let _ = match usage.classify().reason {
            Reason::ExceedsAllocation => writeln!(buffer, "P[{}] is overloaded!", i + 1),
            Reason::NearCapacity => writeln!(buffer, "P[{}] memory warning!", i + 1),
            Reason::Normal => writeln!(buffer, "P[{}] is normal.", i + 1),
        };
    }

    let _ = writeln!(buffer, "\n[PROCESS LIST]");
    super::rule(&mut buffer, '-');
    for (i, usage) in usages.iter().enumerate() {
        let _ = writeln!(buffer, "P[{}]: Allocated={} | Used={} | State={}", i + 1,
                         usage.allocated, usage.used, usage.classify().state);
    }

    buffer.push('\n');
    super::rule(&mut buffer, '=');
    let _ = writeln!(buffer, "DONE");
    super::rule(&mut buffer, '=');
    buffer
}

/// Render one card per process.
pub fn cards(usages: &[Usage]) -> String {
    let mut buffer = String::new();
    for (i, usage) in usages.iter().enumerate() {
        let classification = usage.classify();
        let _ = writeln!(buffer, "{:<12}{:>48}", format!("P[{}]", i + 1), classification.state);
        let _ = writeln!(buffer, "  {:<12}{} unit", "Allocated:", usage.allocated);
        let _ = writeln!(buffer, "  {:<12}{} unit", "Used:", usage.used);
        let _ = writeln!(buffer, "  {:<12}{:.2}%", "Used %:", classification.utilization);
        let _ = writeln!(buffer, "  {:<12}{}", "Reason:", classification.reason);
    }
    buffer
}

/// Render the list of warnings.
pub fn warnings(warnings: &[Warning]) -> String {
    let mut buffer = String::new();
    for warning in warnings {
        let _ = writeln!(buffer, "P[{}] - using {:.2}%", warning.index, warning.utilization);
        let _ = writeln!(buffer, "  Allocated: {} unit | Used: {} unit", warning.allocated,
                         warning.used);
        let _ = writeln!(buffer, "  Memory usage is at or above {}%, keep an eye on it!",
                         WARNING_THRESHOLD);
    }
    buffer
}

/// Render summary statistics.
pub fn statistics(statistics: &Statistics) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Running: {}", statistics.running);
    let _ = writeln!(buffer, "Blocked: {}", statistics.blocked);
    let _ = writeln!(buffer, "Overload: {:.2}%", statistics.overload_rate);
    let _ = writeln!(buffer, "Total Memory: {} unit", statistics.total_allocated);
    buffer
}

/// Render the report of a memory check.
pub fn memory(usages: &[Usage]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "PROCESS MEMORY MANAGEMENT REPORT");
    super::rule(&mut buffer, '=');
    let _ = writeln!(buffer, "\nPROCESS DETAILS:");
    super::rule(&mut buffer, '-');
    for (i, usage) in usages.iter().enumerate() {
        let classification = usage.classify();
        let _ = writeln!(buffer, "\nP[{}]:", i + 1);
        let _ = writeln!(buffer, "  Allocated: {}", usage.allocated);
        let _ = writeln!(buffer, "  Used: {}", usage.used);
        let _ = writeln!(buffer, "  State: {}", classification.state);
        let _ = writeln!(buffer, "  Reason: {}", classification.reason);
    }
    buffer.push('\n');
    super::rule(&mut buffer, '=');
    let _ = writeln!(buffer, "STATISTICS:");
    super::rule(&mut buffer, '-');
    buffer.push_str(&statistics(&Statistics::new(usages)));
    buffer
}

#[cfg(test)]
mod tests {
    use crate::memory::{Statistics, Usage, Warning};

    fn usages() -> Vec<Usage> {
        vec![Usage::new(100, 85), Usage::new(50, 60), Usage::new(0, 0)]
    }

    #[test]
    fn check() {
        let text = super::check(&usages());

        assert!(text.contains("P[1] Allocated: 100 | Used: 85\n"));
        assert!(text.contains("P[1] memory warning!\nP[2] is overloaded!\nP[3] is normal.\n"));
        assert!(text.contains("P[2]: Allocated=50 | Used=60 | State=BLOCKED\n"));
    }

    #[test]
    fn cards() {
        let text = super::cards(&usages()[..1]);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("P[1]") && lines[0].ends_with("RUNNING"));
        assert_eq!(lines[3], "  Used %:     85.00%");
        assert_eq!(lines[4], "  Reason:     near-capacity warning");
    }

    #[test]
    fn warnings() {
        let text = super::warnings(&Warning::collect(&usages()));
        assert!(text.starts_with("P[1] - using 85.00%\n  Allocated: 100 unit | Used: 85 unit\n"));
        assert_eq!(super::warnings(&[]), "");
    }

    #[test]
    fn statistics() {
        let text = super::statistics(&Statistics::new(&usages()));
        assert_eq!(text, "Running: 2\nBlocked: 1\nOverload: 33.33%\nTotal Memory: 150 unit\n");
    }

    #[test]
    fn memory() {
        let text = super::memory(&usages());
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "PROCESS MEMORY MANAGEMENT REPORT");
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(&lines[5..11], &["", "P[1]:", "  Allocated: 100", "  Used: 85", "  State: RUNNING",
                                    "  Reason: near-capacity warning"][..]);

        let tail = format!("STATISTICS:\n{}\nRunning: 2\nBlocked: 1\nOverload: 33.33%\n\
                            Total Memory: 150 unit\n", "-".repeat(60));
        assert!(text.ends_with(&tail));
    }
}
