use crate::domain::model::{DemoReport, Person};
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::Result;
use crate::utils::text::greet;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

/// Two greeter tasks running concurrently, each emitting a fixed number
/// of paced greetings. Both are joined before the demo returns.
pub struct HelloDemo {
    rounds: u32,
    pace_ms: u64,
}

impl HelloDemo {
    pub fn new(rounds: u32, pace_ms: u64) -> Self {
        Self { rounds, pace_ms }
    }

    fn spawn_greeter(
        &self,
        person: Person,
        sink: Arc<dyn EventSink>,
    ) -> tokio::task::JoinHandle<()> {
        let rounds = self.rounds;
        let pace = Duration::from_millis(self.pace_ms);
        tokio::spawn(async move {
            for i in 1..=rounds {
                sink.emit("hello", &format!("{} (iteration {})", greet(&person.name), i));
                sleep(pace).await;
            }
        })
    }
}

#[async_trait]
impl Demo for HelloDemo {
    fn name(&self) -> &'static str {
        "hello"
    }

    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport> {
        let started_at = chrono::Utc::now();

        let alice = self.spawn_greeter(Person::new("Alice", 30), Arc::clone(&sink));
        // Empty name on purpose: Person defaults it to "Unknown".
        let unknown = self.spawn_greeter(Person::new("", 25), Arc::clone(&sink));

        alice.await?;
        unknown.await?;

        Ok(DemoReport::new(
            self.name(),
            self.rounds as usize * 2,
            started_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::MemorySink;

    #[tokio::test]
    async fn test_both_greeters_finish() {
        let sink = MemorySink::new();
        let demo = HelloDemo::new(3, 1);
        let report = demo.run(Arc::new(sink.clone())).await.unwrap();

        assert_eq!(report.items, 6);
        let lines = sink.lines();
        assert_eq!(lines.iter().filter(|l| l.contains("Alice")).count(), 3);
        assert_eq!(lines.iter().filter(|l| l.contains("Unknown")).count(), 3);
    }
}
