use crate::domain::model::DemoReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Where demo output lines go. The binary wires a console sink,
/// tests capture lines in memory.
pub trait EventSink: Send + Sync {
    fn emit(&self, demo: &str, line: &str);
}

#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, sink: Arc<dyn EventSink>) -> Result<DemoReport>;
}

impl std::fmt::Debug for dyn Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo").field("name", &self.name()).finish()
    }
}
