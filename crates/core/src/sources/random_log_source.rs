use super::RecordSource;
use crate::merge::SourceError;
use crate::records::LogEntry;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const MESSAGES: &[&str] = &[
    "connection established",
    "connection closed by peer",
    "request served",
    "cache miss, fetching upstream",
    "cache entry evicted",
    "retrying after transient failure",
    "configuration reloaded",
    "heartbeat ok",
    "queue depth above watermark",
    "worker recycled",
];

/// Generates a chronologically increasing stream of pseudo-random log
/// entries, starting weeks in the past and draining once it catches up to
/// now. Optionally sleeps per read to simulate a network or disk source.
pub struct RandomLogSource {
    current: DateTime<Utc>,
    end: DateTime<Utc>,
    latency_ms: u64,
}

impl RandomLogSource {
    pub fn new() -> Self {
        let now = Utc::now();
        let start_days = rand::thread_rng().gen_range(40..60);
        RandomLogSource {
            current: now - Duration::days(start_days),
            end: now,
            latency_ms: 0,
        }
    }

    /// Sleeps up to `max_ms` milliseconds on each `pop`.
    pub fn with_latency(mut self, max_ms: u64) -> Self {
        self.latency_ms = max_ms;
        self
    }
}

impl Default for RandomLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource<LogEntry> for RandomLogSource {
    async fn pop(&mut self) -> Result<Option<LogEntry>, SourceError> {
        let (step_ms, delay_ms, msg) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(10_000..3_600_000),
                if self.latency_ms > 0 {
                    rng.gen_range(0..=self.latency_ms)
                } else {
                    0
                },
                MESSAGES[rng.gen_range(0..MESSAGES.len())],
            )
        };

        if delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        }

        self.current = self.current + Duration::milliseconds(step_ms);
        if self.current > self.end {
            return Ok(None);
        }
        Ok(Some(LogEntry::new(self.current, msg)))
    }
}
