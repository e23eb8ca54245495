use super::channel::SourceSender;
use crate::sources::RecordSource;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Spawns the background read-ahead loop for one source. The task keeps its
/// channel topped up until the source drains, the source faults, or the
/// coordinator goes away. Dropping the sender on exit is what marks the
/// channel drained on the coordinator side.
pub(crate) fn spawn<T>(mut source: Box<dyn RecordSource<T>>, output: SourceSender<T>) -> JoinHandle<()>
where
    T: Send + 'static,
{
    tokio::spawn(async move {
        debug!("fetcher {} starting", output.source_id());
        loop {
            match source.pop().await {
                Ok(Some(record)) => {
                    if output.send(Ok(record)).await.is_err() {
                        debug!("fetcher {} stopping, coordinator gone", output.source_id());
                        break;
                    }
                }
                Ok(None) => {
                    debug!("fetcher {} drained its source", output.source_id());
                    break;
                }
                Err(e) => {
                    error!("fetcher {} read failed: {}", output.source_id(), e);
                    let _ = output.send(Err(e)).await;
                    break;
                }
            }
        }
    })
}
