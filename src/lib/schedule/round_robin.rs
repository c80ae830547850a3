use std::collections::{HashSet, VecDeque};

use crate::schedule::{Event, Process, Schedule, Timeline};
use crate::{Error, Result};

/// A round-robin scheduling policy with a single first-in-first-out queue.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobin {
    quantum: usize,
}

#[derive(Clone, Copy)]
struct Slot {
    id: usize,
    remaining: usize,
}

impl RoundRobin {
    /// Create a scheduling policy with a time quantum.
    pub fn new(quantum: usize) -> Result<RoundRobin> {
        if quantum == 0 {
            return Err(Error::invalid("the time quantum should be positive"));
        }
        Ok(RoundRobin { quantum })
    }

    getter!(quantum: usize);
}

impl Schedule for RoundRobin {
    fn run(&self, processes: &[Process]) -> Result<Timeline> {
        if processes.is_empty() {
            return Err(Error::invalid("at least one process is required"));
        }
        let mut seen = HashSet::with_capacity(processes.len());
        let mut total = 0usize;
        for (i, process) in processes.iter().enumerate() {
            if process.burst == 0 {
                return Err(Error::invalid("the burst time should be positive").at(i + 1));
            }
            total = match total.checked_add(process.burst) {
                Some(total) => total,
                _ => return Err(Error::invalid("the total burst time is too large").at(i + 1)),
            };
            if !seen.insert(process.id) {
                return Err(Error::invalid(format!("the identifier {} is taken", process.id)).at(i + 1));
            }
        }

        info!(target: "Round Robin", "Scheduling {} processes with a quantum of {}...",
              processes.len(), self.quantum);

        let quantum = self.quantum;
        let mut queue = processes.iter()
                                 .map(|process| Slot { id: process.id, remaining: process.burst })
                                 .collect::<VecDeque<_>>();
        let mut timeline = Timeline::new();
        // Bounded by the total burst time.
        let mut time = 0;

        while let Some(mut slot) = queue.pop_front() {
            timeline.push(Event::dispatch(time, slot.id, slot.remaining));
            if slot.remaining > quantum {
                time += quantum;
                slot.remaining -= quantum;
                timeline.push(Event::preempt(time, slot.id, quantum, slot.remaining));
                queue.push_back(slot);
            } else {
                time += slot.remaining;
                timeline.push(Event::complete(slot.id, slot.remaining, time));
            }
        }

        info!(target: "Round Robin", "Finished at {} after {} dispatches.",
              time, timeline.history().dispatched);

        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::{Event, EventKind, Process, RoundRobin, Schedule};
    use crate::ErrorKind;

    fn run(bursts: &[usize], quantum: usize) -> crate::schedule::Timeline {
        RoundRobin::new(quantum).unwrap().run(&Process::numbered(bursts)).unwrap()
    }

    #[test]
    fn three_processes() {
        let timeline = run(&[5, 3, 8], 3);

        assert_eq!(timeline.completion(1), Some(11));
        assert_eq!(timeline.completion(2), Some(6));
        assert_eq!(timeline.completion(3), Some(16));
        assert_eq!(timeline.length(), 16);
        assert_eq!(timeline.events(), &[
            Event::dispatch(0, 1, 5), Event::preempt(3, 1, 3, 2),
            Event::dispatch(3, 2, 3), Event::complete(2, 3, 6),
            Event::dispatch(6, 3, 8), Event::preempt(9, 3, 3, 5),
            Event::dispatch(9, 1, 2), Event::complete(1, 2, 11),
            Event::dispatch(11, 3, 5), Event::preempt(14, 3, 3, 2),
            Event::dispatch(14, 3, 2), Event::complete(3, 2, 16),
        ][..]);

        let history = timeline.history();
        assert_eq!((history.dispatched, history.preempted, history.completed), (6, 3, 3));
    }

    #[test]
    fn single_process() {
        let timeline = run(&[7], 4);

        let kinds = timeline.events().iter()
                                     .filter(|event| match event.kind {
                                         EventKind::Dispatch { .. } => false,
                                         _ => true,
                                     })
                                     .map(|event| event.kind)
                                     .collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            EventKind::Preempt { ran: 4, remaining: 3 },
            EventKind::Complete { ran: 3, completion: 7 },
        ]);
        assert_eq!(timeline.completion(1), Some(7));
    }

    #[test]
    fn first_in_first_out() {
        let timeline = run(&[4, 4, 4], 2);

        let order = timeline.events().iter()
                                     .filter(|event| match event.kind {
                                         EventKind::Dispatch { .. } => true,
                                         _ => false,
                                     })
                                     .map(|event| event.process)
                                     .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(timeline.completions().values().cloned().collect::<Vec<_>>(), vec![8, 10, 12]);
    }

    #[test]
    fn large_quantum() {
        let timeline = run(&[2, 9, 1], 100);

        assert_eq!(timeline.history().preempted, 0);
        assert_eq!(timeline.completion(1), Some(2));
        assert_eq!(timeline.completion(2), Some(11));
        assert_eq!(timeline.completion(3), Some(12));
    }

    #[test]
    fn length_equals_total_burst() {
        let bursts = [13, 1, 7, 22, 5, 9, 3, 17, 2, 11];
        for quantum in 1..25 {
            let timeline = run(&bursts, quantum);
            assert_eq!(timeline.length(), bursts.iter().sum::<usize>());
            assert_eq!(timeline.history().completed, bursts.len());
            assert_eq!(timeline.completions().values().max(), Some(&timeline.length()));
        }
    }

    #[test]
    fn repeatable() {
        assert_eq!(run(&[6, 2, 9, 4], 3), run(&[6, 2, 9, 4], 3));
    }

    #[test]
    fn independent_runs() {
        use std::thread;

        let policy = RoundRobin::new(3).unwrap();
        let handles = (1..5).map(|k| {
            thread::spawn(move || policy.run(&Process::numbered(&[5 * k, 3, 8])).unwrap())
        }).collect::<Vec<_>>();
        for (k, handle) in (1..5).zip(handles) {
            assert_eq!(handle.join().unwrap(), run(&[5 * k, 3, 8], 3));
        }
    }

    #[test]
    fn custom_identifiers() {
        let processes = vec![Process::new(7, 2), Process::new(3, 1)];
        let timeline = RoundRobin::new(1).unwrap().run(&processes).unwrap();

        assert_eq!(timeline.completion(7), Some(3));
        assert_eq!(timeline.completion(3), Some(2));
    }

    #[test]
    fn reject() {
        assert_eq!(RoundRobin::new(0).unwrap_err().kind(), ErrorKind::InvalidInput);

        let policy = RoundRobin::new(2).unwrap();
        assert_eq!(policy.run(&[]).unwrap_err().kind(), ErrorKind::InvalidInput);

        let error = policy.run(&Process::numbered(&[3, 0, 1])).unwrap_err();
        assert_eq!((error.kind(), error.index()), (ErrorKind::InvalidInput, Some(2)));

        let error = policy.run(&[Process::new(1, 1), Process::new(1, 2)]).unwrap_err();
        assert_eq!(error.index(), Some(2));
    }

    #[test]
    fn reject_overflow() {
        let policy = RoundRobin::new(usize::MAX).unwrap();
        let processes = vec![Process::new(1, usize::MAX), Process::new(2, usize::MAX),
                             Process::new(3, 1)];
        let error = policy.run(&processes).unwrap_err();
        assert_eq!((error.kind(), error.index()), (ErrorKind::InvalidInput, Some(2)));
    }
}
