use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("division by zero")]
    DivideByZero,

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("unknown demo: '{name}'")]
    UnknownDemo { name: String },

    #[error("channel closed unexpectedly while {context}")]
    ChannelClosed { context: String },

    #[error("task failed to complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl DemoError {
    /// Short hint printed next to the error message.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::DivideByZero => "use a non-zero divisor",
            DemoError::InvalidConfigValue { .. } => "check the flag values and run with --help",
            DemoError::UnknownDemo { .. } => {
                "valid demos: hello, producer-consumer, select, worker-pool, channels, all"
            }
            DemoError::ChannelClosed { .. } => "this is a bug in the demo wiring, please report it",
            DemoError::Join(_) => "a spawned task panicked, run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
