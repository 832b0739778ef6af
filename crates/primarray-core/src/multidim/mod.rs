//! Rectangular multi-dimensional arrays.
//!
//! A rank-`R` array is a tree: a [`NestedArray`] of references to rank
//! `R - 1` sub-arrays, bottoming out in a [`PrimitiveArray`] at rank 1.
//! Sub-arrays are held through [`Arc`] so that a caller can alias one into
//! several slots with [`NestedArray::share`]; arrays built by
//! [`MultiArray::with_dimensions`] own each sub-array exclusively.

mod build;

pub use build::MAX_RANK;

use core::fmt;
use std::sync::Arc;

use crate::array::PrimitiveArray;
use crate::bounds::check_index;
use crate::error::{CoreError, Result};
use crate::kind::Element;

/// One node of a multi-dimensional array tree.
#[derive(Debug, PartialEq)]
pub enum MultiArray<T: Element> {
    /// A rank-1 array of primitive elements.
    Primitive(PrimitiveArray<T>),
    /// An array of references to sub-arrays one rank lower.
    Nested(NestedArray<T>),
}

/// A fixed-size array of references to sub-arrays of rank `rank - 1`.
#[derive(Debug, PartialEq)]
pub struct NestedArray<T: Element> {
    rank: usize,
    slots: Box<[Arc<MultiArray<T>>]>,
}

impl<T: Element> MultiArray<T> {
    /// Number of dimensions below and including this node.
    pub fn rank(&self) -> usize {
        match self {
            Self::Primitive(_) => 1,
            Self::Nested(n) => n.rank,
        }
    }

    /// Length of this node's own dimension.
    pub fn length(&self) -> i32 {
        match self {
            Self::Primitive(p) => p.length(),
            Self::Nested(n) => n.length(),
        }
    }

    /// Total number of primitive slots reachable from this node. A shared
    /// sub-array is counted once per slot that refers to it.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Primitive(p) => p.len(),
            Self::Nested(n) => n.iter().map(MultiArray::element_count).sum(),
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveArray<T>> {
        match self {
            Self::Primitive(p) => Some(p),
            Self::Nested(_) => None,
        }
    }

    pub fn as_primitive_mut(&mut self) -> Option<&mut PrimitiveArray<T>> {
        match self {
            Self::Primitive(p) => Some(p),
            Self::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&NestedArray<T>> {
        match self {
            Self::Nested(n) => Some(n),
            Self::Primitive(_) => None,
        }
    }

    pub fn as_nested_mut(&mut self) -> Option<&mut NestedArray<T>> {
        match self {
            Self::Nested(n) => Some(n),
            Self::Primitive(_) => None,
        }
    }

    /// Read the primitive element at a full multi-dimensional index.
    ///
    /// `index` must have exactly [`rank`](Self::rank) components.
    ///
    /// ```
    /// # use primarray_core::multidim::MultiArray;
    /// let a = MultiArray::<i32>::with_dimensions(&[2, 3]).unwrap();
    /// assert_eq!(a.get(&[1, 2]).unwrap(), 0);
    /// assert!(a.get(&[2, 0]).is_err());
    /// ```
    pub fn get(&self, index: &[i32]) -> Result<T> {
        self.check_index_rank(index)?;
        let mut node = self;
        let mut rest = index;
        loop {
            match (node, rest) {
                (Self::Primitive(p), [i]) => return p.get(*i),
                (Self::Nested(n), [i, tail @ ..]) => {
                    node = n.get(*i)?;
                    rest = tail;
                }
                _ => return Err(self.rank_mismatch(index)),
            }
        }
    }

    /// Write the primitive element at a full multi-dimensional index,
    /// returning the value written.
    ///
    /// Fails with [`CoreError::AliasedSubArray`] if the path passes through a
    /// shared sub-array.
    pub fn set(&mut self, index: &[i32], value: T) -> Result<T> {
        self.check_index_rank(index)?;
        let mismatch = self.rank_mismatch(index);
        let mut node = self;
        let mut rest = index;
        loop {
            match (node, rest) {
                (Self::Primitive(p), [i]) => return p.set(*i, value),
                (Self::Nested(n), [i, tail @ ..]) => {
                    node = n.get_mut(*i)?;
                    rest = tail;
                }
                _ => return Err(mismatch),
            }
        }
    }

    fn check_index_rank(&self, index: &[i32]) -> Result<()> {
        if index.len() == self.rank() {
            Ok(())
        } else {
            Err(self.rank_mismatch(index))
        }
    }

    fn rank_mismatch(&self, index: &[i32]) -> CoreError {
        CoreError::RankMismatch {
            expected: self.rank(),
            got: index.len(),
        }
    }
}

impl<T: Element> NestedArray<T> {
    /// The fixed number of slots.
    pub fn length(&self) -> i32 {
        // Slot counts come from validated `i32` dimension lengths.
        self.slots.len() as i32
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of dimensions, counting this one.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The sub-array at `index`.
    pub fn get(&self, index: i32) -> Result<&MultiArray<T>> {
        let i = check_index(self.len(), index)?;
        Ok(&self.slots[i])
    }

    /// Mutable access to the sub-array at `index`.
    ///
    /// Fails with [`CoreError::AliasedSubArray`] while the sub-array is
    /// shared with another holder.
    pub fn get_mut(&mut self, index: i32) -> Result<&mut MultiArray<T>> {
        let i = check_index(self.len(), index)?;
        Arc::get_mut(&mut self.slots[i]).ok_or(CoreError::AliasedSubArray { index })
    }

    /// Another handle to the sub-array at `index`, for installing it in more
    /// than one slot. The sub-array lives as long as its longest holder.
    pub fn share(&self, index: i32) -> Result<Arc<MultiArray<T>>> {
        let i = check_index(self.len(), index)?;
        Ok(Arc::clone(&self.slots[i]))
    }

    /// Install `sub` at `index`, returning the sub-array it replaces.
    ///
    /// `sub` must have rank `self.rank() - 1`.
    pub fn replace(
        &mut self,
        index: i32,
        sub: Arc<MultiArray<T>>,
    ) -> Result<Arc<MultiArray<T>>> {
        let i = check_index(self.len(), index)?;
        let expected = self.rank - 1;
        if sub.rank() != expected {
            return Err(CoreError::RankMismatch {
                expected,
                got: sub.rank(),
            });
        }
        Ok(core::mem::replace(&mut self.slots[i], sub))
    }

    /// Iterate over the sub-arrays in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &MultiArray<T>> {
        self.slots.iter().map(Arc::as_ref)
    }
}

impl<T: Element> fmt::Display for MultiArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Nested(n) => {
                write!(f, "[")?;
                for (i, sub) in n.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{sub}")?;
                }
                write!(f, "]")
            }
        }
    }
}
