//! Output targets shared between a logger and the loggers derived from it

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Line-oriented writer behind a mutex
///
/// Cloning shares the underlying target, so every logger derived through
/// `with_field` writes to the same place.
#[derive(Clone)]
pub struct SharedWriter {
    name: Arc<str>,
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("custom", writer)
    }

    fn named<W: Write + Send + 'static>(name: &str, writer: W) -> Self {
        Self {
            name: Arc::from(name),
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// Append to a file, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::target(path.display().to_string(), e.to_string()))?;
        Ok(Self::named(&path.display().to_string(), BufWriter::new(file)))
    }

    /// In-memory target, returned together with a handle to read it back
    ///
    /// ```
    /// use rust_fanout_logger::backends::SharedWriter;
    ///
    /// let (writer, buffer) = SharedWriter::memory();
    /// writer.write_line("hello").unwrap();
    /// assert_eq!(buffer.contents(), "hello\n");
    /// ```
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::default();
        (Self::named("memory", buffer.clone()), buffer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one line and flush it through
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").field("name", &self.name).finish()
    }
}

/// Growable in-memory byte buffer, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
