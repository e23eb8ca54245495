use logmerge::{LogEntry, MergeTask, PrinterSink, RandomLogSource, RecordSource};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let num_sources: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);

    info!("merging {} random log sources", num_sources);

    let sources: Vec<Box<dyn RecordSource<LogEntry>>> = (0..num_sources)
        .map(|_| Box::new(RandomLogSource::new().with_latency(5)) as Box<dyn RecordSource<LogEntry>>)
        .collect();

    let task = MergeTask::new(sources, |entry: &LogEntry| entry.date);
    let mut sink = PrinterSink::default();

    match task.run(&mut sink).await {
        Ok(stats) => info!(
            "merged {} records from {} sources",
            stats.emitted, num_sources
        ),
        Err(e) => {
            error!("merge failed: {}", e);
            std::process::exit(1);
        }
    }
}
