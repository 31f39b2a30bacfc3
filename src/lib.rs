pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{ConsoleSink, MemorySink};
pub use config::DemoConfig;
pub use core::runner::{build_demos, DemoRunner};
pub use utils::error::{DemoError, Result};
