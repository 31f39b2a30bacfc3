use crate::utils::error::{DemoError, Result};

pub const VERSION: &str = "1.0.0";

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Integer division; the one validated failure case in the crate.
pub fn divide(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(DemoError::DivideByZero);
    }
    Ok(a / b)
}

/// Arithmetic operation selected up front instead of dispatched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
}

impl Op {
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Op::Add => add(a, b),
            Op::Subtract => subtract(a, b),
            Op::Multiply => multiply(a, b),
        }
    }
}
