mod collector_sink;
mod counting_source;
mod delayed_source;
mod faulty_source;

pub use collector_sink::CollectorSink;
pub use counting_source::CountingSource;
pub use delayed_source::DelayedSource;
pub use faulty_source::FaultySource;
