//! Tool for classroom operating-system exercises.
//!
//! Two independent engines are provided: round-robin CPU scheduling and
//! memory overload checking. Both are pure computations over the input of a
//! single run.

#[macro_use]
extern crate log;

extern crate configuration;
extern crate random;

#[cfg(test)]
extern crate assert;

#[macro_use]
mod macros;

mod result;

pub mod input;
pub mod memory;
pub mod report;
pub mod schedule;
pub mod workload;

pub use result::{Error, ErrorKind, Result};

/// A configuration.
pub type Config = configuration::Tree;
