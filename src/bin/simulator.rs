#[macro_use]
extern crate log;

extern crate arguments;
extern crate configuration;
extern crate simulator;
extern crate term;

use arguments::Arguments;
use configuration::format::TOML;
use log::Level;
use simulator::input::{self, Checking, Scheduling};
use simulator::memory::{Statistics, Warning};
use simulator::schedule::{Metrics, RoundRobin, Schedule};
use simulator::{report, workload, Config};

pub use simulator::{Error, ErrorKind, Result};

const USAGE: &str = "
Usage: simulator <command> [options]

Commands:
    round-robin              Simulate round-robin CPU scheduling.
    memory                   Check processes for memory overload.

Options:
    --config <path>          Configuration file.

    --quantum <time>         Time quantum.
    --bursts <list>          Comma-separated burst times.
    --random <count>         Draw burst times for <count> processes.
    --seed <number>          Seed for drawing burst times.

    --usage <list>           Comma-separated allocated:used pairs.
    --report <path>          Output file for the memory report.

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($message:expr) => (return Err(::simulator::Error::new($message)));
    ($($arg:tt)*) => (return Err(::simulator::Error::new(format!($($arg)*))));
);

macro_rules! ok(
    ($result:expr) => (match $result {
        Ok(result) => result,
        Err(error) => raise!(error.to_string()),
    });
);

mod logger;
mod output;

use output::Output;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = ok!(arguments::parse(std::env::args()));

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let config = match arguments.get::<String>("config") {
        Some(path) => {
            info!(target: "Simulator", "Reading the configuration from {:?}...", &path);
            Some(ok!(TOML::open(&path)))
        },
        _ => None,
    };

    match arguments.orphans.first().map(|command| command.as_str()) {
        Some("round-robin") => round_robin(&arguments, config.as_ref()),
        Some("memory") => memory(&arguments, config.as_ref()),
        Some(command) => raise!("the command {:?} is unknown", command),
        _ => raise!("a command is required (see --help)"),
    }
}

fn round_robin(arguments: &Arguments, config: Option<&Config>) -> Result<()> {
    let input = scheduling(arguments, config)?;
    let timeline = RoundRobin::new(input.quantum)?.run(&input.processes)?;
    let metrics = Metrics::new(&input.processes, &timeline)?;

    let history = timeline.history();
    info!(target: "Simulator", "{} dispatches, {} preemptions, {} completions in {} time units.",
          history.dispatched, history.preempted, history.completed, timeline.length());

    let mut terminal = output::Terminal;
    terminal.next(&report::execution(&timeline))?;
    terminal.next(&report::results(&metrics))?;

    Ok(())
}

fn scheduling(arguments: &Arguments, config: Option<&Config>) -> Result<Scheduling> {
    let section = config.and_then(|config| config.branch("round_robin"));

    let quantum = match arguments.get::<String>("quantum") {
        Some(text) => Some(input::parse(&text, "quantum")?),
        _ => match section {
            Some(ref section) => input::integer(section, "quantum")?,
            _ => None,
        },
    };

    let bursts = if let Some(text) = arguments.get::<String>("bursts") {
        input::parse_list(&text)?
    } else if let Some(bursts) = generate(arguments, config)? {
        bursts.into_iter().map(|burst| Some(burst as i64)).collect()
    } else if let Some(ref section) = section {
        input::bursts(section)?
    } else {
        raise!("burst times are required (see --help)");
    };

    Scheduling::new(quantum, &bursts)
}

fn generate(arguments: &Arguments, config: Option<&Config>) -> Result<Option<Vec<usize>>> {
    let section = config.and_then(|config| config.branch("workload"));

    let count = match arguments.get::<String>("random") {
        Some(text) => input::parse(&text, "process count")?,
        _ => match section {
            Some(ref section) => match input::integer(section, "count")? {
                Some(count) => count,
                _ => return Ok(None),
            },
            _ => return Ok(None),
        },
    };
    if count < 1 {
        return Err(Error::invalid(format!("the process count should be positive, found {}", count)));
    }

    let seed = match arguments.get::<String>("seed") {
        Some(text) => Some(input::parse(&text, "seed")? as u64),
        _ => None,
    };
    let mut source = match section {
        Some(ref section) => workload::Random::new(section, seed)?,
        _ => workload::Random::with_seed(workload::MIN_BURST, workload::MAX_BURST,
                                         seed.unwrap_or(0)),
    };

    source.take(count as usize).map(Some)
}

fn memory(arguments: &Arguments, config: Option<&Config>) -> Result<()> {
    let section = config.and_then(|config| config.branch("memory"));

    let input = match (arguments.get::<String>("usage"), section) {
        (Some(text), _) => Checking::new(&input::parse_pairs(&text)?)?,
        (_, Some(section)) => Checking::from_config(&section)?,
        _ => raise!("memory usage is required (see --help)"),
    };
    let usages = &input.usages;

    let statistics = Statistics::new(usages);
    let warnings = Warning::collect(usages);

    let mut terminal = output::Terminal;
    terminal.next(&report::check(usages))?;
    terminal.next(&report::cards(usages))?;
    if !warnings.is_empty() {
        terminal.next(&report::warnings(&warnings))?;
    }
    terminal.next(&report::statistics(&statistics))?;

    let mut output = output::new(arguments.get::<String>("report"))?;
    output.next(&report::memory(usages))?;

    Ok(())
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

fn fail(error: Error) -> ! {
    use std::io::{stderr, Write};

    let hint = match error.kind() {
        ErrorKind::IncompleteInput => " Please fill in every value of that process.",
        _ => "",
    };
    match term::stderr() {
        Some(mut output) => {
            let _ = output.fg(term::color::RED);
            let _ = output.write_all(format!("Error: {}.{}\n", error, hint).as_bytes());
            let _ = output.reset();
        },
        _ => {
            let _ = stderr().write_all(format!("Error: {}.{}\n", error, hint).as_bytes());
        },
    }
    std::process::exit(1);
}
