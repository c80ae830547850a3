use crate::schedule::{Process, Timeline};
use crate::Result;

/// Per-process times and their averages.
///
/// Turnaround time is taken to be the completion time since every process
/// arrives at time zero. Supporting arrival times would require subtracting
/// them here.
#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    /// The rows in the order of the processes.
    pub rows: Vec<Row>,
    /// The average turnaround time.
    pub average_turnaround: f64,
    /// The average waiting time.
    pub average_waiting: f64,
}

/// The times of a single process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: usize,
    pub burst: usize,
    pub completion: usize,
    pub turnaround: usize,
    pub waiting: usize,
}

impl Metrics {
    /// Compute the metrics of processes given their timeline.
    pub fn new(processes: &[Process], timeline: &Timeline) -> Result<Metrics> {
        let mut rows = Vec::with_capacity(processes.len());
        for process in processes {
            let completion = some!(timeline.completion(process.id),
                                   "P[{}] has not completed", process.id);
            let turnaround = completion;
            let waiting = some!(turnaround.checked_sub(process.burst),
                                "P[{}] has completed before its burst time", process.id);
            rows.push(Row { id: process.id, burst: process.burst, completion, turnaround, waiting });
        }
        let count = rows.len().max(1) as f64;
        let average_turnaround = rows.iter().map(|row| row.turnaround).sum::<usize>() as f64 / count;
        let average_waiting = rows.iter().map(|row| row.waiting).sum::<usize>() as f64 / count;
        Ok(Metrics { rows, average_turnaround, average_waiting })
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::{Metrics, Process, RoundRobin, Row, Schedule};

    fn compute(bursts: &[usize], quantum: usize) -> Metrics {
        let processes = Process::numbered(bursts);
        let timeline = RoundRobin::new(quantum).unwrap().run(&processes).unwrap();
        Metrics::new(&processes, &timeline).unwrap()
    }

    #[test]
    fn three_processes() {
        let metrics = compute(&[5, 3, 8], 3);

        assert_eq!(metrics.rows, vec![
            Row { id: 1, burst: 5, completion: 11, turnaround: 11, waiting: 6 },
            Row { id: 2, burst: 3, completion: 6, turnaround: 6, waiting: 3 },
            Row { id: 3, burst: 8, completion: 16, turnaround: 16, waiting: 8 },
        ]);
        assert::close(&[metrics.average_turnaround, metrics.average_waiting],
                      &[11.0, 17.0 / 3.0], 1e-12);
    }

    #[test]
    fn single_process() {
        let metrics = compute(&[7], 4);

        assert_eq!(metrics.rows[0].completion, 7);
        assert_eq!(metrics.rows[0].waiting, 0);
        assert::close(&[metrics.average_waiting], &[0.0], 1e-12);
    }

    #[test]
    fn waiting_balance() {
        let bursts = [12, 4, 19, 1, 8, 8, 30];
        for quantum in 1..10 {
            let metrics = compute(&bursts, quantum);
            let waiting = metrics.rows.iter().map(|row| row.waiting).sum::<usize>();
            let completion = metrics.rows.iter().map(|row| row.completion).sum::<usize>();
            assert_eq!(waiting, completion - bursts.iter().sum::<usize>());
        }
    }

    #[test]
    fn missing_completion() {
        let processes = Process::numbered(&[2, 2]);
        let timeline = RoundRobin::new(2).unwrap().run(&processes[..1]).unwrap();
        assert!(Metrics::new(&processes, &timeline).is_err());
    }
}
