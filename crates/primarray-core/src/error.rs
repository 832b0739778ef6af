use thiserror::Error;

/// All errors returned by `primarray-core`.
///
/// Every variant is raised before any element is written, so a failed call
/// leaves both the array and any caller-supplied buffer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A single index lies outside `[0, length)`.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: i32, length: usize },

    /// An `(offset, count)` pair does not fit inside `[0, length]`.
    #[error("range [{offset}, {offset} + {count}) out of bounds for length {length}")]
    RangeOutOfBounds {
        offset: i32,
        count: i32,
        length: usize,
    },

    /// A requested length or element count is negative.
    #[error("negative array length {length}")]
    NegativeLength { length: i32 },

    /// Multi-dimensional construction was requested with no dimensions.
    #[error("invalid rank {rank}: at least one dimension is required")]
    InvalidRank { rank: usize },

    /// The buffer for `length` elements of `width` bytes exceeds what the
    /// platform allocator can describe.
    #[error("capacity overflow: {length} elements of {width} bytes")]
    CapacityOverflow { length: usize, width: usize },

    /// A sub-array of the wrong rank was installed in a nested slot.
    #[error("rank mismatch: expected sub-array of rank {expected}, got {got}")]
    RankMismatch { expected: usize, got: usize },

    /// Mutable access was requested to a sub-array that is shared with
    /// another holder.
    #[error("sub-array at index {index} is aliased and cannot be borrowed mutably")]
    AliasedSubArray { index: i32 },
}

/// Convenience alias used throughout `primarray-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
