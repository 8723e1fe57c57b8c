use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// Month outside 0–11, or a year chrono cannot represent
    #[error("Invalid period: month {month} of {year}")]
    InvalidPeriod { month: u32, year: i32 },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
