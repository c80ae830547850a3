use std::path::Path;

use simulator::Result;

mod file;
mod null;
mod terminal;

pub use self::file::File;
pub use self::null::Null;
pub use self::terminal::Terminal;

pub trait Output {
    fn next(&mut self, text: &str) -> Result<()>;
}

pub fn new<T: AsRef<Path>>(output: Option<T>) -> Result<Box<dyn Output>> {
    Ok(match output {
        Some(output) => Box::new(File::new(output)?),
        _ => Box::new(Null),
    })
}
