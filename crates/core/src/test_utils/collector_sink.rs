use crate::sinks::RecordSink;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A sink that collects merged records for assertions and records how many
/// times `done` was called and how many records had been printed by then.
pub struct CollectorSink<T> {
    pub results: Arc<Mutex<Vec<T>>>,
    pub done_calls: Arc<AtomicUsize>,
    pub printed_at_done: Arc<Mutex<Option<usize>>>,
}

impl<T> CollectorSink<T> {
    pub fn new() -> Self {
        CollectorSink {
            results: Arc::new(Mutex::new(Vec::new())),
            done_calls: Arc::new(AtomicUsize::new(0)),
            printed_at_done: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> Default for CollectorSink<T> {
    fn default() -> Self {
        CollectorSink::new()
    }
}

impl<T: Send> RecordSink<T> for CollectorSink<T> {
    fn print(&mut self, record: T) {
        if let Ok(mut results) = self.results.lock() {
            results.push(record);
        }
    }

    fn done(&mut self) {
        self.done_calls.fetch_add(1, Ordering::SeqCst);
        let printed = self.results.lock().map(|r| r.len()).unwrap_or(0);
        if let Ok(mut at_done) = self.printed_at_done.lock() {
            *at_done = Some(printed);
        }
    }
}
