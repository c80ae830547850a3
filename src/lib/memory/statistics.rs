use crate::memory::{Reason, State, Usage};

/// Summary statistics over classified processes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    /// The number of running processes.
    pub running: usize,
    /// The number of blocked processes.
    pub blocked: usize,
    /// The share of blocked processes in percent.
    pub overload_rate: f64,
    /// The total allocated memory.
    pub total_allocated: u128,
}

/// A process whose usage is close to its allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warning {
    /// The 1-based index of the process.
    pub index: usize,
    pub utilization: f64,
    pub allocated: u64,
    pub used: u64,
}

impl Statistics {
    /// Aggregate the classifications of processes.
    pub fn new(usages: &[Usage]) -> Statistics {
        let mut statistics = Statistics::default();
        for usage in usages {
            match usage.classify().state {
                State::Running => statistics.running += 1,
                State::Blocked => statistics.blocked += 1,
            }
            statistics.total_allocated += u128::from(usage.allocated);
        }
        if !usages.is_empty() {
            statistics.overload_rate = statistics.blocked as f64 / usages.len() as f64 * 100.0;
        }
        info!(target: "Memory", "{} running, {} blocked, {:.2}% overloaded.",
              statistics.running, statistics.blocked, statistics.overload_rate);
        statistics
    }
}

impl Warning {
    /// Collect the processes that are running close to their allocation.
    pub fn collect(usages: &[Usage]) -> Vec<Warning> {
        usages.iter().enumerate().filter_map(|(i, usage)| {
            let classification = usage.classify();
            if classification.reason != Reason::NearCapacity {
                return None;
            }
            info!(target: "Memory", "P[{}] uses {:.2}% of its memory.", i + 1,
                  classification.utilization);
            Some(Warning {
                index: i + 1,
                utilization: classification.utilization,
                allocated: usage.allocated,
                used: usage.used,
            })
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::{Statistics, Usage, Warning};

    fn usages() -> Vec<Usage> {
        vec![Usage::new(100, 85), Usage::new(50, 60), Usage::new(0, 0), Usage::new(200, 20)]
    }

    #[test]
    fn statistics() {
        let statistics = Statistics::new(&usages());

        assert_eq!(statistics.running, 3);
        assert_eq!(statistics.blocked, 1);
        assert_eq!(statistics.total_allocated, 350);
        assert::close(&[statistics.overload_rate], &[25.0], 1e-12);
    }

    #[test]
    fn statistics_large() {
        let usages = vec![Usage::new(u64::MAX, 0); 3];
        let statistics = Statistics::new(&usages);

        assert_eq!(statistics.total_allocated, 3 * u128::from(u64::MAX));
        assert_eq!((statistics.running, statistics.blocked), (3, 0));
    }

    #[test]
    fn statistics_empty() {
        assert_eq!(Statistics::new(&[]), Statistics::default());
    }

    #[test]
    fn warnings() {
        let warnings = Warning::collect(&usages());

        assert_eq!(warnings.len(), 1);
        assert_eq!((warnings[0].index, warnings[0].allocated, warnings[0].used), (1, 100, 85));
        assert::close(&[warnings[0].utilization], &[85.0], 1e-12);
    }
}
