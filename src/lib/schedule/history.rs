use crate::schedule::{Event, EventKind};

/// Statistics about a simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct History {
    /// The number of dispatches.
    pub dispatched: usize,
    /// The number of preemptions.
    pub preempted: usize,
    /// The number of completed processes.
    pub completed: usize,
}

impl History {
    /// Take into account an event.
    pub fn count(&mut self, event: &Event) {
        match event.kind {
            EventKind::Dispatch { .. } => self.dispatched += 1,
            EventKind::Preempt { .. } => self.preempted += 1,
            EventKind::Complete { .. } => self.completed += 1,
        }
    }
}
