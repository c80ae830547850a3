use std::io::{self, Write};
use term::color;

use crate::output::Output;
use simulator::Result;

/// Standard output with completion lines in green and overload lines in red.
pub struct Terminal;

impl Output for Terminal {
    fn next(&mut self, text: &str) -> Result<()> {
        let mut stdout = match term::stdout() {
            Some(stdout) => stdout,
            _ => {
                let stdout = io::stdout();
                let mut stdout = stdout.lock();
                ok!(stdout.write_all(text.as_bytes()));
                ok!(writeln!(stdout));
                return Ok(());
            },
        };
        for line in text.lines() {
            match paint(line) {
                Some(color) => {
                    let _ = stdout.fg(color);
                    ok!(writeln!(stdout, "{}", line));
                    let _ = stdout.reset();
                },
                _ => ok!(writeln!(stdout, "{}", line)),
            }
        }
        ok!(writeln!(stdout));
        Ok(())
    }
}

fn paint(line: &str) -> Option<color::Color> {
    if line.contains("COMPLETED") {
        Some(color::GREEN)
    } else if line.contains("BLOCKED") || line.contains("overloaded") {
        Some(color::RED)
    } else if line.contains("warning") {
        Some(color::YELLOW)
    } else {
        None
    }
}
