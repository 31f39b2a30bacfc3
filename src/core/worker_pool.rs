use crate::domain::model::{DemoReport, Job, JobOutcome};
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio::time::{sleep, Duration};

/// Knobs for one pool run.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub workers: usize,
    pub jobs: u32,
    /// Capacity of the job queue; results are buffered to `jobs` so that
    /// draining can safely happen after the workers are joined.
    pub capacity: usize,
    pub work_ms: u64,
}

/// Simulated per-job latency. Derived from the job id so runs are
/// reproducible and tests can bound total runtime.
fn work_jitter(job_id: u32, work_ms: u64) -> Duration {
    Duration::from_millis((job_id as u64 * 37) % work_ms.max(1))
}

/// Runs a fixed pool of workers over a bounded job queue.
///
/// Shutdown protocol: the producer side closes the job queue by dropping
/// its sender; each worker exits when `recv` reports the queue closed;
/// all workers are joined before the result queue closes, so draining it
/// afterwards yields exactly one outcome per submitted job.
pub async fn run_pool(settings: PoolSettings, sink: Arc<dyn EventSink>) -> Result<Vec<JobOutcome>> {
    let (job_tx, job_rx) = mpsc::channel::<Job>(settings.capacity);
    let job_rx = Arc::new(Mutex::new(job_rx));
    let (out_tx, mut out_rx) = mpsc::channel::<JobOutcome>(settings.jobs.max(1) as usize);

    let mut workers = JoinSet::new();
    for worker_id in 1..=settings.workers {
        let job_rx = Arc::clone(&job_rx);
        let out_tx = out_tx.clone();
        let sink = Arc::clone(&sink);
        let work_ms = settings.work_ms;
        workers.spawn(async move {
            loop {
                // Hold the lock only while receiving, not while working.
                let job = { job_rx.lock().await.recv().await };
                let Some(job) = job else { break };

                sink.emit(
                    "worker-pool",
                    &format!("worker {} processing job {}", worker_id, job.id),
                );
                sleep(work_jitter(job.id, work_ms)).await;

                let outcome = JobOutcome {
                    job_id: job.id,
                    sum: job.work + job.work,
                };
                if out_tx.send(outcome).await.is_err() {
                    break;
                }
            }
        });
    }
    drop(out_tx);

    for id in 1..=settings.jobs {
        let job = Job {
            id,
            work: id as i64 * 10,
        };
        if job_tx.send(job).await.is_err() {
            break;
        }
    }
    drop(job_tx);

    while let Some(joined) = workers.join_next().await {
        joined?;
    }

    let mut outcomes = Vec::with_capacity(settings.jobs as usize);
    while let Some(outcome) = out_rx.recv().await {
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

pub struct WorkerPoolDemo {
    settings: PoolSettings,
}

impl WorkerPoolDemo {
    pub fn new(settings: PoolSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Demo for WorkerPoolDemo {
    fn name(&self) -> &'static str {
        "worker-pool"
    }

    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport> {
        let started_at = chrono::Utc::now();
        tracing::debug!(
            workers = self.settings.workers,
            jobs = self.settings.jobs,
            capacity = self.settings.capacity,
            "starting worker pool"
        );

        let outcomes = run_pool(self.settings, Arc::clone(&sink)).await?;

        sink.emit(self.name(), "results:");
        for outcome in &outcomes {
            sink.emit(
                self.name(),
                &format!("job {}: sum = {}", outcome.job_id, outcome.sum),
            );
        }
        Ok(DemoReport::new(self.name(), outcomes.len(), started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::MemorySink;

    #[tokio::test]
    async fn test_pool_produces_one_outcome_per_job() {
        let sink = Arc::new(MemorySink::new());
        let settings = PoolSettings {
            workers: 3,
            jobs: 10,
            capacity: 4,
            work_ms: 1,
        };
        let outcomes = run_pool(settings, sink).await.unwrap();

        assert_eq!(outcomes.len(), 10);
        let mut ids: Vec<u32> = outcomes.iter().map(|o| o.job_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
        for outcome in &outcomes {
            assert_eq!(outcome.sum, outcome.job_id as i64 * 20);
        }
    }

    #[tokio::test]
    async fn test_pool_with_more_workers_than_jobs() {
        let sink = Arc::new(MemorySink::new());
        let settings = PoolSettings {
            workers: 8,
            jobs: 2,
            capacity: 1,
            work_ms: 1,
        };
        let outcomes = run_pool(settings, sink).await.unwrap();
        assert_eq!(outcomes.len(), 2);
    }
}
