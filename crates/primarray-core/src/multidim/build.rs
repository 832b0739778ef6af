//! Construction of multi-dimensional arrays from dimension lengths.

use std::sync::Arc;

use log::debug;

use crate::array::PrimitiveArray;
use crate::bounds::check_length;
use crate::error::{CoreError, Result};
use crate::kind::Element;

use super::{MultiArray, NestedArray};

/// Deepest rank [`MultiArray::with_dimensions`] accepts.
pub const MAX_RANK: usize = 255;

impl<T: Element> MultiArray<T> {
    /// Build a rectangular array with the given dimension lengths, every
    /// primitive slot set to [`Element::ZERO`].
    ///
    /// The outermost dimension comes first. A zero-length dimension ends the
    /// tree at that depth: `[0, 5]` gives an empty outer array and `[5, 0]`
    /// gives five empty inner arrays.
    ///
    /// Fails with [`CoreError::InvalidRank`] if `dimension_lengths` is empty
    /// or longer than [`MAX_RANK`], and with [`CoreError::NegativeLength`] if
    /// any length is negative. All lengths are checked before anything is
    /// allocated.
    ///
    /// ```
    /// # use primarray_core::multidim::MultiArray;
    /// let a = MultiArray::<f32>::with_dimensions(&[2, 3]).unwrap();
    /// assert_eq!(a.rank(), 2);
    /// assert_eq!(a.element_count(), 6);
    /// ```
    pub fn with_dimensions(dimension_lengths: &[i32]) -> Result<Self> {
        let rank = dimension_lengths.len();
        if rank == 0 || rank > MAX_RANK {
            return Err(CoreError::InvalidRank { rank });
        }
        let dims = dimension_lengths
            .iter()
            .map(|&d| check_length(d))
            .collect::<Result<Vec<usize>>>()?;
        debug!(
            "building rank-{} {} array with dimensions {:?}",
            dims.len(),
            T::KIND,
            dims
        );
        Self::build(&dims)
    }

    fn build(dims: &[usize]) -> Result<Self> {
        match dims {
            [] => Err(CoreError::InvalidRank { rank: 0 }),
            [len] => Ok(Self::Primitive(PrimitiveArray::zeroed(*len)?)),
            [len, inner @ ..] => {
                let slots = (0..*len)
                    .map(|_| Self::build(inner).map(Arc::new))
                    .collect::<Result<Box<[_]>>>()?;
                Ok(Self::Nested(NestedArray {
                    rank: dims.len(),
                    slots,
                }))
            }
        }
    }
}
