use super::RecordSink;
use std::fmt::Display;
use std::time::Instant;
use tracing::info;

/// A sink that prints each merged record to stdout and reports how many
/// records were printed, and how fast, when the merge completes.
pub struct PrinterSink {
    prefix: String,
    printed: u64,
    started: Option<Instant>,
}

impl PrinterSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        PrinterSink {
            prefix: prefix.into(),
            printed: 0,
            started: None,
        }
    }

    pub fn printed(&self) -> u64 {
        self.printed
    }
}

impl Default for PrinterSink {
    fn default() -> Self {
        PrinterSink::new("")
    }
}

impl<T: Display + Send> RecordSink<T> for PrinterSink {
    fn print(&mut self, record: T) {
        self.started.get_or_insert_with(Instant::now);
        println!("{}{}", self.prefix, record);
        self.printed += 1;
    }

    fn done(&mut self) {
        let elapsed = self
            .started
            .map(|started| started.elapsed())
            .unwrap_or_default();
        info!("printed {} records in {:?}", self.printed, elapsed);
    }
}
