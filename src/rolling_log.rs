//! Size-bounded rolling log sink.
//!
//! Writes go to `<base>0.log`. Once that file has grown past `max_bytes` it
//! is closed, every older file moves up one index (`<base>0.log` becomes
//! `<base>1.log` and so on, the last one dropped) and a fresh `<base>0.log`
//! is started. I/O errors are swallowed: the game must behave the same
//! whether or not the log can be written.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug)]
pub struct RollingLog {
    base: PathBuf,
    max_bytes: u64,
    max_files: u32,
    file: Option<File>,
    written: u64,
}

impl RollingLog {
    pub fn new(base: impl Into<PathBuf>, max_bytes: u64, max_files: u32) -> Self {
        Self {
            base: base.into(),
            max_bytes,
            max_files: max_files.max(1),
            file: None,
            written: 0,
        }
    }

    /// Path of the log file with index `i`
    pub fn path(&self, i: u32) -> PathBuf {
        let mut name = OsString::from(self.base.as_os_str());
        name.push(format!("{i}.log"));
        PathBuf::from(name)
    }

    fn open(&mut self) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(0))?;
        self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.file = Some(file);
        Ok(())
    }

    fn roll(&mut self) {
        self.file = None;
        let _ = fs::remove_file(self.path(self.max_files - 1));
        for i in (0..self.max_files - 1).rev() {
            let _ = fs::rename(self.path(i), self.path(i + 1));
        }
    }
}

impl Write for RollingLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.file.is_none() {
            let _ = self.open();
        }
        if self.file.is_some() && self.written > self.max_bytes {
            self.roll();
            let _ = self.open();
        }
        if let Some(file) = self.file.as_mut() {
            match file.write_all(buf) {
                Ok(()) => self.written += buf.len() as u64,
                Err(_) => self.file = None,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        Ok(())
    }
}
