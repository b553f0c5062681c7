use thiserror::Error;

/// Errors returned by the pattern engine for invalid caller input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Light index is outside of the allocated strip
    #[error("light index {index} is out of range for {size} lights")]
    IndexOutOfRange { index: usize, size: u8 },
    /// Engine can't be created with this many lights
    #[error("invalid light count: {0}")]
    InvalidSize(u8),
    /// Active range must be within `1..=size`
    #[error("invalid limit {limit} for {size} lights")]
    InvalidLimit { limit: u8, size: u8 },
}

pub type PatternResult<T> = Result<T, PatternError>;
