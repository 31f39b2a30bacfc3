use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Contrasts bounded and unbounded channel behavior, then shows the
/// send-only / receive-only halves as function boundaries.
///
/// There is no rendezvous (capacity zero) channel here; the closest
/// contrast available is capacity-limited vs unlimited.
pub struct ChannelsDemo {
    capacity: usize,
}

impl ChannelsDemo {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    fn bounded_section(&self, sink: &dyn EventSink) -> usize {
        let (tx, mut rx) = mpsc::channel::<u32>(self.capacity);

        let mut sent = 0usize;
        while tx.try_send(sent as u32 + 1).is_ok() {
            sent += 1;
        }
        sink.emit(
            "channels",
            &format!("bounded channel accepted {} values, then reported full", sent),
        );

        let mut drained = 0usize;
        while rx.try_recv().is_ok() {
            drained += 1;
        }
        sink.emit(
            "channels",
            &format!("drained {} values from bounded channel", drained),
        );
        drained
    }

    fn unbounded_section(&self, sink: &dyn EventSink) -> usize {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();

        let count = self.capacity as u32 * 3;
        for value in 1..=count {
            // Never blocks: only fails if the receiver is gone.
            let _ = tx.send(value);
        }
        sink.emit(
            "channels",
            &format!("unbounded channel took {} values without blocking", count),
        );

        let mut drained = 0usize;
        while rx.try_recv().is_ok() {
            drained += 1;
        }
        drained
    }
}

/// Send-only side: the signature alone guarantees this function can
/// never receive.
async fn pump(tx: mpsc::Sender<u32>, count: u32) -> Result<()> {
    for value in 1..=count {
        tx.send(value).await.map_err(|_| DemoError::ChannelClosed {
            context: "pumping values".to_string(),
        })?;
    }
    Ok(())
}

/// Receive-only side; returns how many values arrived before close.
async fn drain(mut rx: mpsc::Receiver<u32>, sink: &dyn EventSink) -> usize {
    let mut received = 0usize;
    while let Some(value) = rx.recv().await {
        sink.emit("channels", &format!("received: {}", value));
        received += 1;
    }
    received
}

#[async_trait]
impl Demo for ChannelsDemo {
    fn name(&self) -> &'static str {
        "channels"
    }

    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport> {
        let started_at = chrono::Utc::now();

        let mut items = self.bounded_section(sink.as_ref());
        items += self.unbounded_section(sink.as_ref());

        let (tx, rx) = mpsc::channel::<u32>(self.capacity);
        let pumper = tokio::spawn(pump(tx, 3));
        items += drain(rx, sink.as_ref()).await;
        pumper.await??;

        Ok(DemoReport::new(self.name(), items, started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::MemorySink;

    #[tokio::test]
    async fn test_bounded_fills_to_capacity() {
        let sink = MemorySink::new();
        let demo = ChannelsDemo::new(3);
        demo.run(Arc::new(sink.clone())).await.unwrap();

        assert!(sink
            .lines()
            .iter()
            .any(|l| l.contains("accepted 3 values, then reported full")));
    }

    #[tokio::test]
    async fn test_directional_halves_move_every_value() {
        let sink = MemorySink::new();
        let demo = ChannelsDemo::new(2);
        demo.run(Arc::new(sink.clone())).await.unwrap();

        let received = sink
            .lines()
            .iter()
            .filter(|l| l.contains("received:"))
            .count();
        assert_eq!(received, 3);
    }
}
