use std::fmt::Write;

use crate::schedule::{EventKind, Metrics, Timeline};

/// Render the execution log of a simulation.
pub fn execution(timeline: &Timeline) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "=== ROUND ROBIN SCHEDULING STARTED ===");
    super::rule(&mut buffer, '_');
    for event in timeline.events() {
        let _ = match event.kind {
            EventKind::Dispatch { remaining } => {
                writeln!(buffer, "[PROCESS] P[{}] | remaining: {}", event.process, remaining)
            },
            EventKind::Preempt { ran, remaining } => {
                writeln!(buffer, "  -> Run {} | remaining: {} (back to queue)", ran, remaining)
            },
            EventKind::Complete { completion, .. } => {
                writeln!(buffer, "  -> COMPLETED at time: {}", completion)
            },
        };
        if let EventKind::Dispatch { .. } = event.kind {
            continue;
        }
        super::rule(&mut buffer, '_');
    }
    let _ = writeln!(buffer, "=== ROUND ROBIN SCHEDULING FINISHED ===");
    buffer
}

/// Render the table of per-process times followed by the averages.
pub fn results(metrics: &Metrics) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{:<8}{:>8}{:>12}{:>12}{:>10}",
                     "Process", "Burst", "Completion", "Turnaround", "Waiting");
    super::rule(&mut buffer, '-');
    for row in &metrics.rows {
        let _ = writeln!(buffer, "{:<8}{:>8}{:>12}{:>12}{:>10}",
                         format!("P[{}]", row.id), row.burst, row.completion, row.turnaround,
                         row.waiting);
    }
    super::rule(&mut buffer, '-');
    let _ = writeln!(buffer, "Average turnaround time: {:.2}", metrics.average_turnaround);
    let _ = writeln!(buffer, "Average waiting time: {:.2}", metrics.average_waiting);
    buffer
}
