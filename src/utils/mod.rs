pub mod calc;
pub mod error;
pub mod logger;
pub mod text;
pub mod validation;
