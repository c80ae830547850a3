//! Random workloads.

use random::Source;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{input, Config, Error, Result};

/// The smallest burst time drawn by default.
pub const MIN_BURST: usize = 5;

/// The largest burst time drawn by default.
pub const MAX_BURST: usize = 24;

/// A workload model that draws burst times uniformly from a range.
pub struct Random {
    min: usize,
    max: usize,
    source: random::Default,
}

impl Random {
    /// Create a model from a `workload` configuration section.
    ///
    /// The range defaults to `MIN_BURST..=MAX_BURST`. A given seed takes
    /// precedence over the configured one. A seed of zero or no seed at all
    /// means that the current time is used.
    pub fn new(config: &Config, seed: Option<u64>) -> Result<Random> {
        let min = input::integer(config, "min")?.unwrap_or(MIN_BURST as i64);
        let max = input::integer(config, "max")?.unwrap_or(MAX_BURST as i64);
        if min < 1 || max < min || max > input::MAX_BURST_TIME {
            return Err(Error::invalid(format!("the range of burst times should be within 1..={}, \
                                               found {}..={}", input::MAX_BURST_TIME, min, max)));
        }
        let seed = match seed {
            Some(seed) => seed,
            _ => input::integer(config, "seed")?.map(|seed| seed as u64).unwrap_or(0),
        };
        Ok(Random::with_seed(min as usize, max as usize, seed))
    }

    /// Create a model given a range and a seed.
    pub fn with_seed(min: usize, max: usize, seed: u64) -> Random {
        let seed = if seed > 0 { seed } else { now() };
        info!(target: "Workload", "Drawing burst times from {}..={} with seed {}...", min, max, seed);
        Random {
            min,
            max: max.max(min),
            source: random::default().seed([seed ^ 0x12345678, seed ^ 0x87654321]),
        }
    }

    /// Draw a burst time.
    pub fn next(&mut self) -> usize {
        let span = (self.max - self.min + 1) as u64;
        self.min + (self.source.read_u64() % span) as usize
    }

    /// Draw burst times for a number of processes.
    pub fn take(&mut self, count: usize) -> Result<Vec<usize>> {
        input::check_count(count)?;
        Ok((0..count).map(|_| self.next()).collect())
    }
}

fn now() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_secs().max(1),
        _ => 1,
    }
}
