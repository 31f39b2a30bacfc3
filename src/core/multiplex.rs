use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// Waits on two delayed messages at once with a `select!` loop that
/// carries a timeout branch. A timeout shorter than the message delays
/// produces a timeout event instead of the message events.
pub struct MultiplexDemo {
    first_delay_ms: u64,
    second_delay_ms: u64,
    timeout_ms: u64,
}

impl MultiplexDemo {
    pub fn new(first_delay_ms: u64, second_delay_ms: u64, timeout_ms: u64) -> Self {
        Self {
            first_delay_ms,
            second_delay_ms,
            timeout_ms,
        }
    }
}

#[async_trait]
impl Demo for MultiplexDemo {
    fn name(&self) -> &'static str {
        "select"
    }

    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport> {
        let started_at = chrono::Utc::now();
        let (tx1, mut rx1) = mpsc::channel::<String>(1);
        let (tx2, mut rx2) = mpsc::channel::<String>(1);

        let first_delay = Duration::from_millis(self.first_delay_ms);
        tokio::spawn(async move {
            sleep(first_delay).await;
            let _ = tx1.send("message from channel one".to_string()).await;
        });

        let second_delay = Duration::from_millis(self.second_delay_ms);
        tokio::spawn(async move {
            sleep(second_delay).await;
            let _ = tx2.send("message from channel two".to_string()).await;
        });

        let timeout = Duration::from_millis(self.timeout_ms);
        let mut received = 0usize;
        for _ in 0..2 {
            tokio::select! {
                Some(msg) = rx1.recv() => {
                    sink.emit(self.name(), &format!("received: {}", msg));
                    received += 1;
                }
                Some(msg) = rx2.recv() => {
                    sink.emit(self.name(), &format!("received: {}", msg));
                    received += 1;
                }
                _ = sleep(timeout) => {
                    sink.emit(self.name(), "timeout!");
                    break;
                }
            }
        }

        Ok(DemoReport::new(self.name(), received, started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::MemorySink;

    #[tokio::test(start_paused = true)]
    async fn test_both_messages_arrive_before_long_timeout() {
        let sink = MemorySink::new();
        let demo = MultiplexDemo::new(100, 200, 3000);
        let report = demo.run(Arc::new(sink.clone())).await.unwrap();

        assert_eq!(report.items, 2);
        let lines = sink.lines();
        assert!(lines.iter().any(|l| l.contains("channel one")));
        assert!(lines.iter().any(|l| l.contains("channel two")));
        assert!(!lines.iter().any(|l| l.contains("timeout")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_timeout_fires_before_messages() {
        let sink = MemorySink::new();
        let demo = MultiplexDemo::new(100, 200, 50);
        let report = demo.run(Arc::new(sink.clone())).await.unwrap();

        assert_eq!(report.items, 0);
        assert!(sink.lines().iter().any(|l| l.contains("timeout")));
    }
}
