use std::fs;
use std::io::Write;
use std::path::Path;

use crate::output::Output;
use simulator::Result;

pub struct File {
    backend: fs::File,
}

impl File {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<File> {
        let path = path.as_ref();
        info!(target: "Output", "Writing the report into {:?}...", path);
        Ok(File { backend: ok!(fs::File::create(path)) })
    }
}

impl Output for File {
    fn next(&mut self, text: &str) -> Result<()> {
        ok!(self.backend.write_all(text.as_bytes()));
        ok!(self.backend.flush());
        Ok(())
    }
}
