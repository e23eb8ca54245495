pub mod printer_sink;

pub use printer_sink::PrinterSink;

/// Receives the merged output stream.
pub trait RecordSink<T>: Send {
    /// Called exactly once per record, in final merged order.
    fn print(&mut self, record: T);

    /// Called exactly once after the last record, only on success. Never
    /// called after a fatal error.
    fn done(&mut self);
}
