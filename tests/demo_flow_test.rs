use anyhow::Result;
use conlab::{build_demos, DemoConfig, DemoRunner, MemorySink};
use std::sync::Arc;

fn fast_config(demos: &[&str]) -> DemoConfig {
    DemoConfig {
        demos: demos.iter().map(|s| s.to_string()).collect(),
        workers: 2,
        jobs: 4,
        queue_capacity: 3,
        timeout_ms: 5000,
        work_ms: 1,
        json: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_all_demos_run_and_report() -> Result<()> {
    let sink = MemorySink::new();
    let config = fast_config(&["all"]);

    let runner = DemoRunner::new(build_demos(&config)?, Arc::new(sink.clone()));
    let reports = runner.run().await?;

    let names: Vec<&str> = reports.iter().map(|r| r.demo.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "hello",
            "producer-consumer",
            "select",
            "worker-pool",
            "channels"
        ]
    );
    for report in &reports {
        assert!(report.items > 0, "{} reported no items", report.demo);
    }
    assert!(!sink.lines().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_selection_runs_only_requested_demos() -> Result<()> {
    let sink = MemorySink::new();
    let config = fast_config(&["worker-pool", "hello"]);

    let runner = DemoRunner::new(build_demos(&config)?, Arc::new(sink.clone()));
    let reports = runner.run().await?;

    let names: Vec<&str> = reports.iter().map(|r| r.demo.as_str()).collect();
    assert_eq!(names, vec!["worker-pool", "hello"]);
    Ok(())
}

#[tokio::test]
async fn test_reports_serialize_to_json() -> Result<()> {
    let config = fast_config(&["hello"]);
    let runner = DemoRunner::new(build_demos(&config)?, Arc::new(MemorySink::new()));
    let reports = runner.run().await?;

    let json = serde_json::to_string_pretty(&reports)?;
    assert!(json.contains("\"demo\": \"hello\""));
    assert!(json.contains("\"items\""));
    Ok(())
}
