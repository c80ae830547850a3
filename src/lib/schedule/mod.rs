//! CPU scheduling.

use std::collections::BTreeMap;

use crate::Result;

mod event;
mod history;
mod metrics;
mod round_robin;

pub use self::event::{Event, EventKind};
pub use self::history::History;
pub use self::metrics::{Metrics, Row};
pub use self::round_robin::RoundRobin;

/// A scheduling policy.
pub trait Schedule {
    /// Simulate the execution of processes that are all ready at time zero.
    fn run(&self, processes: &[Process]) -> Result<Timeline>;
}

/// A CPU-bound process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Process {
    /// The identifier.
    pub id: usize,
    /// The total CPU time required.
    pub burst: usize,
}

/// The outcome of a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<Event>,
    completion: BTreeMap<usize, usize>,
    history: History,
    length: usize,
}

impl Process {
    /// Create a process.
    #[inline]
    pub fn new(id: usize, burst: usize) -> Process {
        Process { id, burst }
    }

    /// Create processes numbered from one in the given order.
    pub fn numbered(bursts: &[usize]) -> Vec<Process> {
        bursts.iter().enumerate().map(|(i, &burst)| Process::new(i + 1, burst)).collect()
    }
}

impl Timeline {
    fn new() -> Timeline {
        Timeline { events: vec![], completion: BTreeMap::new(), history: History::default(), length: 0 }
    }

    fn push(&mut self, event: Event) {
        debug!(target: "Schedule", "{}", event);
        self.history.count(&event);
        if let EventKind::Complete { completion, .. } = event.kind {
            self.completion.insert(event.process, completion);
            self.length = self.length.max(completion);
        }
        self.events.push(event);
    }

    /// Return the completion time of a process.
    #[inline]
    pub fn completion(&self, id: usize) -> Option<usize> {
        self.completion.get(&id).copied()
    }

    /// Return the completion times keyed by process identifier.
    #[inline]
    pub fn completions(&self) -> &BTreeMap<usize, usize> {
        &self.completion
    }

    getter!(ref events: [Event]);
    getter!(ref history: History);
    getter!(length: usize);
}
