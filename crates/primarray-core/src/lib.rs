//! `primarray-core` — fixed-size primitive arrays for the `primarray` crate.
//!
//! Provides Java-style primitive arrays: a length chosen once at
//! construction, mutable elements, and a bounds check on every access.
//! Arrays nest into rectangular multi-dimensional trees.
//!
//! # Design
//!
//! - One generic [`PrimitiveArray`] serves all eight primitive kinds via the
//!   sealed [`Element`] trait and its per-kind constants.
//! - Every index and range is validated before memory is touched; failures
//!   are returned as [`CoreError`], never clamped.
//! - `int` and `long` buffers are aligned for their atomic counterparts.
//! - `unsafe` is confined to the buffer allocation in `array::raw`.

pub mod array;
pub mod bounds;
pub mod error;
pub mod kind;
pub mod multidim;

// Re-export key types at crate root for convenience.
pub use array::{
    BooleanArray, ByteArray, CharArray, DoubleArray, FloatArray, IntArray, LongArray,
    PrimitiveArray, ShortArray,
};
pub use error::{CoreError, Result};
pub use kind::{Element, ElementKind};
pub use multidim::{MAX_RANK, MultiArray, NestedArray};

/// Items intended for glob-import: `use primarray_core::prelude::*;`
pub mod prelude {
    pub use crate::array::{
        BooleanArray, ByteArray, CharArray, DoubleArray, FloatArray, IntArray, LongArray,
        PrimitiveArray, ShortArray,
    };
    pub use crate::error::{CoreError, Result};
    pub use crate::kind::{Element, ElementKind};
    pub use crate::multidim::{MultiArray, NestedArray};
}
