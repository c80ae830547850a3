//! Memory overload checking.

use std::fmt;

mod statistics;

pub use self::statistics::{Statistics, Warning};

/// The utilization in percent starting from which a process is flagged.
pub const WARNING_THRESHOLD: f64 = 80.0;

/// The memory usage of a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Usage {
    /// The number of allocated units.
    pub allocated: u64,
    /// The number of used units.
    pub used: u64,
}

/// The classification of a process.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// The state.
    pub state: State,
    /// The reason for the state.
    pub reason: Reason,
    /// The used memory relative to the allocated one in percent.
    pub utilization: f64,
}

/// The state of a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Blocked,
}

/// The reason for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The usage is below the warning threshold.
    Normal,
    /// The usage is at or above the warning threshold but within the allocation.
    NearCapacity,
    /// The usage exceeds the allocation.
    ExceedsAllocation,
}

impl Usage {
    /// Create a usage record.
    #[inline]
    pub fn new(allocated: u64, used: u64) -> Usage {
        Usage { allocated, used }
    }

    /// Classify the usage.
    #[inline]
    pub fn classify(&self) -> Classification {
        classify(self.allocated, self.used)
    }
}

/// Classify a process given its allocated and used memory.
pub fn classify(allocated: u64, used: u64) -> Classification {
    let utilization = utilization(allocated, used);
    let (state, reason) = if used > allocated {
        (State::Blocked, Reason::ExceedsAllocation)
    } else if utilization >= WARNING_THRESHOLD {
        (State::Running, Reason::NearCapacity)
    } else {
        (State::Running, Reason::Normal)
    };
    Classification { state, reason, utilization }
}

/// Compute the utilization in percent, which is zero when nothing is allocated.
#[inline]
pub fn utilization(allocated: u64, used: u64) -> f64 {
    if allocated > 0 { used as f64 / allocated as f64 * 100.0 } else { 0.0 }
}

impl fmt::Display for State {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            State::Running => "RUNNING",
            State::Blocked => "BLOCKED",
        };
        formatter.pad(name)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Reason::Normal => "normal",
            Reason::NearCapacity => "near-capacity warning",
            Reason::ExceedsAllocation => "exceeds allocation",
        };
        formatter.pad(name)
    }
}
