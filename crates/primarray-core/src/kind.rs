//! Element kinds and their per-kind policy.
//!
//! The eight primitive kinds are:
//! ```text
//! ElementKind   Rust   width  atomic alignment
//! Boolean       bool   1      -
//! Char          u16    2      -
//! Byte          i8     1      -
//! Short         i16    2      -
//! Int           i32    4      AtomicI32
//! Long          i64    8      AtomicI64
//! Float         f32    4      -
//! Double        f64    8      -
//! ```
//!
//! [`PrimitiveArray`](crate::array::PrimitiveArray) is generic over
//! [`Element`], so one implementation serves every row of the table.

use core::fmt;
use core::mem::{align_of, size_of};

/// Runtime tag for the kind of element an array stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 8] = [
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// Size of one element in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Boolean | Self::Byte => 1,
            Self::Char | Self::Short => 2,
            Self::Int | Self::Float => 4,
            Self::Long | Self::Double => 8,
        }
    }

    /// Whether arrays of this kind may back atomic counter arrays and must
    /// therefore be aligned for the matching atomic type.
    pub const fn atomic_alignment_required(self) -> bool {
        matches!(self, Self::Int | Self::Long)
    }

    /// The host-language keyword for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive type that can be stored in a
/// [`PrimitiveArray`](crate::array::PrimitiveArray).
///
/// This trait is sealed. Every implementor is valid when all of its bytes
/// are zero and that bit pattern is its [`ZERO`](Element::ZERO), which lets
/// array buffers be allocated pre-zeroed.
pub trait Element:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// The kind tag for this type.
    const KIND: ElementKind;

    /// The value every freshly created slot holds.
    const ZERO: Self;

    /// Alignment of an array buffer holding this type, in bytes.
    ///
    /// Equal to `align_of::<Self>()` unless the kind requires atomic
    /// alignment, in which case it is also at least the alignment of the
    /// same-width atomic type.
    const ALIGN: usize;
}

const fn max_align(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

#[cfg(target_has_atomic = "32")]
const ATOMIC_I32_ALIGN: usize = align_of::<core::sync::atomic::AtomicI32>();
#[cfg(not(target_has_atomic = "32"))]
const ATOMIC_I32_ALIGN: usize = size_of::<i32>();

#[cfg(target_has_atomic = "64")]
const ATOMIC_I64_ALIGN: usize = align_of::<core::sync::atomic::AtomicI64>();
#[cfg(not(target_has_atomic = "64"))]
const ATOMIC_I64_ALIGN: usize = size_of::<i64>();

macro_rules! impl_element {
    ($ty:ty, $kind:ident, $zero:expr) => {
        impl_element!($ty, $kind, $zero, align_of::<$ty>());
    };
    ($ty:ty, $kind:ident, $zero:expr, $align:expr) => {
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = $zero;
            const ALIGN: usize = $align;
        }

        const _: () = assert!(size_of::<$ty>() == ElementKind::$kind.width());
    };
}

impl_element!(bool, Boolean, false);
impl_element!(u16, Char, 0);
impl_element!(i8, Byte, 0);
impl_element!(i16, Short, 0);
impl_element!(i32, Int, 0, max_align(align_of::<i32>(), ATOMIC_I32_ALIGN));
impl_element!(i64, Long, 0, max_align(align_of::<i64>(), ATOMIC_I64_ALIGN));
impl_element!(f32, Float, 0.0);
impl_element!(f64, Double, 0.0);
