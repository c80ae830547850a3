use std::fmt;

/// An entry of the execution trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// The time.
    pub time: usize,
    /// The process.
    pub process: usize,
    /// The type.
    pub kind: EventKind,
}

/// The type of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A process has been taken from the head of the queue.
    Dispatch {
        /// The time still required at dispatch.
        remaining: usize,
    },
    /// A process has used up its slice and gone back to the tail of the queue.
    Preempt {
        /// The time the process ran.
        ran: usize,
        /// The time still required afterwards.
        remaining: usize,
    },
    /// A process has finished.
    Complete {
        /// The time the process ran in its last slice.
        ran: usize,
        /// The absolute completion time.
        completion: usize,
    },
}

impl Event {
    /// Create a dispatch event.
    #[inline]
    pub fn dispatch(time: usize, process: usize, remaining: usize) -> Event {
        Event { time, process, kind: EventKind::Dispatch { remaining } }
    }

    /// Create a preemption event.
    #[inline]
    pub fn preempt(time: usize, process: usize, ran: usize, remaining: usize) -> Event {
        Event { time, process, kind: EventKind::Preempt { ran, remaining } }
    }

    /// Create a completion event.
    #[inline]
    pub fn complete(process: usize, ran: usize, completion: usize) -> Event {
        Event { time: completion, process, kind: EventKind::Complete { ran, completion } }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:5} - P[{}] {}", self.time, self.process, &self.kind)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EventKind::Dispatch { remaining } => {
                write!(formatter, "dispatched with {} remaining", remaining)
            },
            EventKind::Preempt { ran, remaining } => {
                write!(formatter, "preempted after {} with {} remaining", ran, remaining)
            },
            EventKind::Complete { ran, completion } => {
                write!(formatter, "completed at {} after {}", completion, ran)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Event;

    #[test]
    fn display() {
        assert_eq!(Event::dispatch(0, 1, 5).to_string(), "    0 - P[1] dispatched with 5 remaining");
        assert_eq!(Event::preempt(3, 1, 3, 2).to_string(),
                   "    3 - P[1] preempted after 3 with 2 remaining");
        assert_eq!(Event::complete(2, 3, 6).to_string(), "    6 - P[2] completed at 6 after 3");
    }
}
