//! Errors raised by the sequence, step primitives and playback controller.

/// Errors that can occur while configuring or running a sort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Invalid array size {size} (allowed: {min}..={max})")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("Invalid speed {0} (allowed: 1..=10)")]
    InvalidSpeed(u8),

    #[error("Invalid value range {min}..={max} (values must be positive and min <= max)")]
    InvalidValueRange { min: u32, max: u32 },

    #[error("A sort is already running")]
    Busy,

    #[error("Nothing to sort: the sequence is empty")]
    EmptySequence,

    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Sort cancelled")]
    Cancelled,

    #[error("Sort worker panicked")]
    WorkerPanicked,
}

impl SortError {
    /// Whether this error is a rejected request that left all state untouched.
    ///
    /// Rejections are discardable: callers such as the TUI drop them silently.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Busy
                | Self::EmptySequence
                | Self::InvalidSize { .. }
                | Self::InvalidSpeed(_)
                | Self::InvalidValueRange { .. }
        )
    }
}

/// Convenience alias used across the library.
pub type Result<T, E = SortError> = std::result::Result<T, E>;
