//! Index and range validation.
//!
//! Indices, offsets and counts arrive as `i32` (the host's `int`), so a
//! negative value is a caller error rather than something the type system
//! rules out. Lengths are already-validated `usize` values. Each check hands
//! back the `usize` form of what it validated so callers never cast twice.

use core::ops::Range;

use crate::error::{CoreError, Result};

/// Validate a requested array length, returning it as `usize`.
#[inline]
pub fn check_length(length: i32) -> Result<usize> {
    usize::try_from(length).map_err(|_| CoreError::NegativeLength { length })
}

/// Validate a single index against `length`.
///
/// Fails with [`CoreError::IndexOutOfBounds`] iff `index < 0` or
/// `index >= length`.
///
/// ```
/// # use primarray_core::bounds::check_index;
/// assert_eq!(check_index(3, 2).unwrap(), 2);
/// assert!(check_index(3, 3).is_err());
/// assert!(check_index(3, -1).is_err());
/// ```
#[inline]
pub fn check_index(length: usize, index: i32) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < length => Ok(i),
        _ => Err(CoreError::IndexOutOfBounds { index, length }),
    }
}

/// Validate an `(offset, count)` pair against `length`.
///
/// Fails with [`CoreError::RangeOutOfBounds`] iff `offset < 0`, `count < 0`
/// or `offset + count > length`. The comparison is done as
/// `offset > length - count`, so no sum is ever formed and nothing can wrap.
/// An empty range at the end (`offset == length`, `count == 0`) is valid.
///
/// ```
/// # use primarray_core::bounds::check_range;
/// assert_eq!(check_range(5, 5, 0).unwrap(), 5..5);
/// assert!(check_range(5, 3, 3).is_err());
/// ```
#[inline]
pub fn check_range(length: usize, offset: i32, count: i32) -> Result<Range<usize>> {
    let err = || CoreError::RangeOutOfBounds {
        offset,
        count,
        length,
    };
    let start = usize::try_from(offset).map_err(|_| err())?;
    let n = usize::try_from(count).map_err(|_| err())?;
    if n > length || start > length - n {
        return Err(err());
    }
    Ok(start..start + n)
}
