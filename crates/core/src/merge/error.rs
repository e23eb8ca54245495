use thiserror::Error;

/// A source's read call faulted. Always fatal to the merge: a partial merge
/// has no well-defined meaning for the sink, so no retries happen here.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
        }
    }
}

/// Errors surfaced by a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A source read failed; the merge was aborted and all fetchers stopped.
    #[error("source {source_id} failed: {source}")]
    Source {
        source_id: usize,
        #[source]
        source: SourceError,
    },
}
