//! Input validation.
//!
//! Values arrive either from a configuration file or as text from the command
//! line. Missing values are kept as `None` until validation so that errors can
//! name the process at fault.

use crate::memory::Usage;
use crate::schedule::Process;
use crate::{Config, Error, Result};

/// The largest number of processes accepted in a simulation.
pub const MAX_PROCESSES: usize = 10;

/// The longest burst time accepted in a simulation.
pub const MAX_BURST_TIME: i64 = 100;

/// Validated input of a scheduling simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduling {
    /// The time quantum.
    pub quantum: usize,
    /// The processes numbered from one.
    pub processes: Vec<Process>,
}

/// Validated input of a memory check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checking {
    /// The memory usage of each process.
    pub usages: Vec<Usage>,
}

impl Scheduling {
    /// Validate a quantum and burst times.
    pub fn new(quantum: Option<i64>, bursts: &[Option<i64>]) -> Result<Scheduling> {
        let quantum = match quantum {
            Some(quantum) if quantum >= 1 => match usize::try_from(quantum) {
                Ok(quantum) => quantum,
                _ => return Err(Error::invalid(format!("the time quantum {} is too large", quantum))),
            },
            Some(quantum) => {
                return Err(Error::invalid(format!("the time quantum should be positive, found {}",
                                                  quantum)));
            },
            _ => return Err(Error::invalid("a time quantum is required")),
        };
        check_count(bursts.len())?;
        let mut processes = Vec::with_capacity(bursts.len());
        for (i, &burst) in bursts.iter().enumerate() {
            let burst = match burst {
                Some(burst) if burst >= 1 && burst <= MAX_BURST_TIME => burst as usize,
                Some(burst) => {
                    return Err(Error::invalid(format!("the burst time should be between 1 and {}, \
                                                       found {}", MAX_BURST_TIME, burst)).at(i + 1));
                },
                _ => return Err(Error::incomplete(i + 1, "the burst time is missing")),
            };
            processes.push(Process::new(i + 1, burst));
        }
        Ok(Scheduling { quantum, processes })
    }

    /// Read and validate a `round_robin` configuration section.
    pub fn from_config(config: &Config) -> Result<Scheduling> {
        Scheduling::new(integer(config, "quantum")?, &bursts(config)?)
    }

    /// Return the burst times in the order of the processes.
    pub fn bursts(&self) -> Vec<usize> {
        self.processes.iter().map(|process| process.burst).collect()
    }
}

impl Checking {
    /// Validate allocated and used memory pairs.
    pub fn new(pairs: &[(Option<i64>, Option<i64>)]) -> Result<Checking> {
        check_count(pairs.len())?;
        let mut usages = Vec::with_capacity(pairs.len());
        for (i, &pair) in pairs.iter().enumerate() {
            let (allocated, used) = match pair {
                (Some(allocated), Some(used)) => (allocated, used),
                _ => return Err(Error::incomplete(i + 1, "the allocated and used memory are required")),
            };
            if allocated < 0 || used < 0 {
                return Err(Error::invalid("the memory values should be non-negative").at(i + 1));
            }
            usages.push(Usage::new(allocated as u64, used as u64));
        }
        Ok(Checking { usages })
    }

    /// Read and validate a `memory` configuration section.
    pub fn from_config(config: &Config) -> Result<Checking> {
        Checking::new(&pairs(config)?)
    }
}

/// Read the burst times listed under `processes` in a configuration section.
pub fn bursts(config: &Config) -> Result<Vec<Option<i64>>> {
    let forest = match config.forest("processes") {
        Some(forest) => forest,
        _ => return Ok(vec![]),
    };
    forest.iter().enumerate().map(|(i, tree)| {
        integer(tree, "burst").map_err(|error| error.at(i + 1))
    }).collect()
}

/// Read the memory values listed under `processes` in a configuration section.
pub fn pairs(config: &Config) -> Result<Vec<(Option<i64>, Option<i64>)>> {
    let forest = match config.forest("processes") {
        Some(forest) => forest,
        _ => return Ok(vec![]),
    };
    forest.iter().enumerate().map(|(i, tree)| {
        let allocated = integer(tree, "allocated").map_err(|error| error.at(i + 1))?;
        let used = integer(tree, "used").map_err(|error| error.at(i + 1))?;
        Ok((allocated, used))
    }).collect()
}

/// Read an integer from a configuration section.
///
/// An absent value is `None`, and a value of another type is an error.
pub fn integer(config: &Config, name: &str) -> Result<Option<i64>> {
    if let Some(&value) = config.get::<i64>(name) {
        return Ok(Some(value));
    }
    if let Some(value) = config.get::<f64>(name) {
        return Err(Error::invalid(format!("expected an integer {}, found {}", name, value)));
    }
    if let Some(value) = config.get::<String>(name) {
        return Err(Error::invalid(format!("expected an integer {}, found {:?}", name, value)));
    }
    if let Some(value) = config.get::<bool>(name) {
        return Err(Error::invalid(format!("expected an integer {}, found {}", name, value)));
    }
    Ok(None)
}

/// Parse an integer.
pub fn parse(text: &str, name: &str) -> Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        _ => Err(Error::invalid(format!("expected an integer {}, found {:?}", name, text.trim()))),
    }
}

/// Parse a comma-separated list of integers where empty fields are missing
/// values.
pub fn parse_list(text: &str) -> Result<Vec<Option<i64>>> {
    text.split(',').enumerate().map(|(i, field)| {
        parse_field(field).map_err(|error| error.at(i + 1))
    }).collect()
}

/// Parse a comma-separated list of `allocated:used` pairs.
pub fn parse_pairs(text: &str) -> Result<Vec<(Option<i64>, Option<i64>)>> {
    text.split(',').enumerate().map(|(i, field)| {
        let mut parts = field.splitn(2, ':');
        let allocated = parse_field(parts.next().unwrap_or("")).map_err(|error| error.at(i + 1))?;
        let used = parse_field(parts.next().unwrap_or("")).map_err(|error| error.at(i + 1))?;
        Ok((allocated, used))
    }).collect()
}

fn parse_field(field: &str) -> Result<Option<i64>> {
    if field.trim().is_empty() {
        return Ok(None);
    }
    parse(field, "value").map(Some)
}

pub(crate) fn check_count(count: usize) -> Result<()> {
    if count < 1 || count > MAX_PROCESSES {
        return Err(Error::invalid(format!("expected between 1 and {} processes, found {}",
                                          MAX_PROCESSES, count)));
    }
    Ok(())
}
