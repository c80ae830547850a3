use log::{Level, Log, Metadata, Record};

pub struct Terminal(pub Level);

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stdout = term::stdout();
        if record.metadata().level() < Level::Info {
            stdout.as_mut().map(|stdout| stdout.fg(term::color::RED));
        } else {
            stdout.as_mut().map(|stdout| stdout.fg(term::color::GREEN));
        }
        print!("{:>12}", record.target());
        stdout.as_mut().map(|stdout| stdout.reset());
        println!(" {}", record.args());
    }

    fn flush(&self) {
    }
}
