use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index or slice bound is outside the occupied region
    #[error("Index out of range: index {index} is beyond array length {length}")]
    OutOfRange {
        /// Index or bound that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Slice range with begin greater than end
    #[error("Invalid slice range: begin {begin} is greater than end {end}")]
    InvalidRange {
        /// Requested begin index (inclusive)
        begin: usize,
        /// Requested end index (exclusive)
        end: usize,
    },
}
