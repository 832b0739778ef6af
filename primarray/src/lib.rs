//! # primarray
//!
//! Fixed-size, bounds-checked primitive arrays with Java semantics, and
//! rectangular multi-dimensional arrays built from them.
//!
//! One `use primarray::prelude::*;` gives you the eight array types, the
//! multi-dimensional builder, and the error type.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Primitive arrays, bounds checks, multi-dimensional arrays |
//!
//! ```
//! use primarray::prelude::*;
//!
//! let mut a = IntArray::new(3).unwrap();
//! a.set(2, 7).unwrap();
//! assert_eq!(a.get(2).unwrap(), 7);
//! assert!(a.get(3).is_err());
//! ```

#[cfg(feature = "core")]
pub use primarray_core as core;

/// Glob-import convenience: `use primarray::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use primarray_core::prelude::*;
}
