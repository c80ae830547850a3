//! Plain-text reports.

use std::fmt::Write;

mod memory;
mod schedule;

pub use self::memory::{cards, check, memory, statistics, warnings};
pub use self::schedule::{execution, results};

const WIDTH: usize = 60;

fn rule(buffer: &mut String, symbol: char) {
    let _ = writeln!(buffer, "{}", symbol.to_string().repeat(WIDTH));
}
