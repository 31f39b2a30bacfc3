pub mod channels;
pub mod hello;
pub mod multiplex;
pub mod producer_consumer;
pub mod runner;
pub mod worker_pool;

pub use crate::domain::model::{DemoReport, Job, JobOutcome};
pub use crate::domain::ports::{Demo, EventSink};
pub use crate::utils::error::Result;
