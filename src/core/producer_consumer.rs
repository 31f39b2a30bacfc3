use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

/// One producer pacing values into a bounded channel, one consumer
/// draining it. The producer closes the channel by dropping its sender;
/// the consumer's recv loop ends when the channel reports closed.
pub struct ProducerConsumerDemo {
    messages: u32,
    capacity: usize,
    pace_ms: u64,
}

impl ProducerConsumerDemo {
    pub fn new(messages: u32, capacity: usize, pace_ms: u64) -> Self {
        Self {
            messages,
            capacity,
            pace_ms,
        }
    }
}

#[async_trait]
impl Demo for ProducerConsumerDemo {
    fn name(&self) -> &'static str {
        "producer-consumer"
    }

    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport> {
        let started_at = chrono::Utc::now();
        let (tx, mut rx) = mpsc::channel::<u32>(self.capacity);

        let producer_sink = Arc::clone(&sink);
        let messages = self.messages;
        let pace = Duration::from_millis(self.pace_ms);
        let producer = tokio::spawn(async move {
            for value in 1..=messages {
                producer_sink.emit("producer-consumer", &format!("producing: {}", value));
                tx.send(value).await.map_err(|_| DemoError::ChannelClosed {
                    context: "producing values".to_string(),
                })?;
                sleep(pace).await;
            }
            // Sender dropped here: this is what ends the consumer loop.
            Ok::<(), DemoError>(())
        });

        let mut consumed = 0usize;
        while let Some(value) = rx.recv().await {
            sink.emit(self.name(), &format!("consuming: {}", value));
            consumed += 1;
        }

        producer.await??;
        Ok(DemoReport::new(self.name(), consumed, started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::MemorySink;

    #[tokio::test]
    async fn test_consumer_sees_every_value_in_order() {
        let sink = MemorySink::new();
        let demo = ProducerConsumerDemo::new(5, 2, 1);
        let report = demo.run(Arc::new(sink.clone())).await.unwrap();

        assert_eq!(report.items, 5);
        let consumed: Vec<String> = sink
            .lines()
            .into_iter()
            .filter(|l| l.contains("consuming"))
            .collect();
        assert_eq!(consumed.len(), 5);
        for (i, line) in consumed.iter().enumerate() {
            assert!(line.ends_with(&format!("consuming: {}", i + 1)));
        }
    }
}
