use crate::config::DemoConfig;
use crate::core::channels::ChannelsDemo;
use crate::core::hello::HelloDemo;
use crate::core::multiplex::MultiplexDemo;
use crate::core::producer_consumer::ProducerConsumerDemo;
use crate::core::worker_pool::{PoolSettings, WorkerPoolDemo};
use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, EventSink};
use crate::utils::error::{DemoError, Result};
use std::sync::Arc;

/// Registry order; also the execution order for `--demos all`.
pub const DEMO_NAMES: &[&str] = &[
    "hello",
    "producer-consumer",
    "select",
    "worker-pool",
    "channels",
];

fn build_demo(name: &str, config: &DemoConfig) -> Result<Box<dyn Demo>> {
    match name {
        "hello" => Ok(Box::new(HelloDemo::new(5, config.work_ms))),
        "producer-consumer" => Ok(Box::new(ProducerConsumerDemo::new(
            5,
            config.queue_capacity,
            config.work_ms,
        ))),
        "select" => Ok(Box::new(MultiplexDemo::new(
            config.work_ms,
            config.work_ms * 2,
            config.timeout_ms,
        ))),
        "worker-pool" => Ok(Box::new(WorkerPoolDemo::new(PoolSettings {
            workers: config.workers,
            jobs: config.jobs,
            capacity: config.queue_capacity,
            work_ms: config.work_ms,
        }))),
        "channels" => Ok(Box::new(ChannelsDemo::new(config.queue_capacity))),
        other => Err(DemoError::UnknownDemo {
            name: other.to_string(),
        }),
    }
}

/// Resolves the CLI selection into demo instances, expanding "all".
pub fn build_demos(config: &DemoConfig) -> Result<Vec<Box<dyn Demo>>> {
    let mut demos = Vec::new();
    for name in &config.demos {
        if name == "all" {
            for known in DEMO_NAMES {
                demos.push(build_demo(known, config)?);
            }
        } else {
            demos.push(build_demo(name, config)?);
        }
    }
    Ok(demos)
}

pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
    sink: Arc<dyn EventSink>,
}

impl DemoRunner {
    pub fn new(demos: Vec<Box<dyn Demo>>, sink: Arc<dyn EventSink>) -> Self {
        Self { demos, sink }
    }

    /// Runs every selected demo in order and collects its report.
    /// The first failing demo aborts the run.
    pub async fn run(&self) -> Result<Vec<DemoReport>> {
        let mut reports = Vec::with_capacity(self.demos.len());

        for demo in &self.demos {
            tracing::info!("▶ running demo: {}", demo.name());
            let report = demo.run(Arc::clone(&self.sink)).await?;
            tracing::info!(
                "✔ {} finished: {} items in {}ms",
                report.demo,
                report.items,
                report.elapsed_ms
            );
            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_demos(demos: &[&str]) -> DemoConfig {
        DemoConfig {
            demos: demos.iter().map(|s| s.to_string()).collect(),
            workers: 2,
            jobs: 4,
            queue_capacity: 2,
            timeout_ms: 3000,
            work_ms: 1,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_all_expands_to_registry_order() {
        let demos = build_demos(&config_with_demos(&["all"])).unwrap();
        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, DEMO_NAMES);
    }

    #[test]
    fn test_unknown_demo_is_rejected() {
        let err = build_demos(&config_with_demos(&["bogus"])).unwrap_err();
        assert!(matches!(err, DemoError::UnknownDemo { .. }));
    }
}
