pub mod cli;

use crate::core::runner::DEMO_NAMES;
use crate::utils::validation::{
    validate_one_of, validate_positive_number, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "conlab")]
#[command(about = "Runnable demonstrations of concurrency patterns")]
pub struct DemoConfig {
    /// Which demos to run, comma separated, or "all"
    #[arg(long, default_value = "all", value_delimiter = ',')]
    pub demos: Vec<String>,

    #[arg(long, default_value = "3")]
    pub workers: usize,

    #[arg(long, default_value = "10")]
    pub jobs: u32,

    #[arg(long, default_value = "8")]
    pub queue_capacity: usize,

    /// Timeout for the multiplexed-wait demo
    #[arg(long, default_value = "3000")]
    pub timeout_ms: u64,

    /// Base pacing / simulated-work duration
    #[arg(long, default_value = "100")]
    pub work_ms: u64,

    #[arg(long, help = "Print the collected demo reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for DemoConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_positive_number("workers", self.workers, 1)?;
        validate_positive_number("jobs", self.jobs as usize, 1)?;
        validate_positive_number("queue_capacity", self.queue_capacity, 1)?;
        validate_range("timeout_ms", self.timeout_ms, 1, 600_000)?;
        validate_range("work_ms", self.work_ms, 1, 60_000)?;

        let mut allowed: Vec<&str> = vec!["all"];
        allowed.extend_from_slice(DEMO_NAMES);
        for name in &self.demos {
            validate_one_of("demos", name, &allowed)?;
        }
        Ok(())
    }
}
