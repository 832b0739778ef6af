//! Fixed-size primitive arrays.
//!
//! [`PrimitiveArray`] behaves like a Java primitive array: its length is
//! chosen once at construction, its elements are mutable, and every access
//! is bounds-checked. Indices, offsets and counts are `i32` so that negative
//! values are reported as errors instead of being unrepresentable.
//!
//! The type is generic over [`Element`]; the aliases [`BooleanArray`],
//! [`CharArray`], [`ByteArray`], [`ShortArray`], [`IntArray`],
//! [`LongArray`], [`FloatArray`] and [`DoubleArray`] name the eight
//! instantiations.

mod display;
mod raw;

use log::trace;

use crate::bounds::{check_index, check_length, check_range};
use crate::error::{CoreError, Result};
use crate::kind::{Element, ElementKind};

use raw::RawBuffer;

/// A fixed-size, bounds-checked array of primitive elements.
///
/// The buffer is a single allocation of exactly `length` elements, aligned
/// to [`Element::ALIGN`]. There is no way to grow or shrink it. Cloning
/// performs a deep copy.
pub struct PrimitiveArray<T: Element> {
    buf: RawBuffer<T>,
}

pub type BooleanArray = PrimitiveArray<bool>;
/// Array of UTF-16 code units.
pub type CharArray = PrimitiveArray<u16>;
pub type ByteArray = PrimitiveArray<i8>;
pub type ShortArray = PrimitiveArray<i16>;
pub type IntArray = PrimitiveArray<i32>;
pub type LongArray = PrimitiveArray<i64>;
pub type FloatArray = PrimitiveArray<f32>;
pub type DoubleArray = PrimitiveArray<f64>;

impl<T: Element> PrimitiveArray<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an array of `length` elements, all set to [`Element::ZERO`].
    ///
    /// ```
    /// # use primarray_core::array::IntArray;
    /// let a = IntArray::new(4).unwrap();
    /// assert_eq!(a.length(), 4);
    /// assert!(a.iter().all(|&x| x == 0));
    /// assert!(IntArray::new(-1).is_err());
    /// ```
    pub fn new(length: i32) -> Result<Self> {
        Self::zeroed(check_length(length)?)
    }

    /// Zero-filled array from an already validated length.
    pub(crate) fn zeroed(len: usize) -> Result<Self> {
        Ok(Self {
            buf: RawBuffer::zeroed(len)?,
        })
    }

    /// Create an array of `count` elements copied from the front of `source`.
    ///
    /// Fails with [`CoreError::NegativeLength`] if `count < 0` and with
    /// [`CoreError::RangeOutOfBounds`] if `source` holds fewer than `count`
    /// elements.
    ///
    /// ```
    /// # use primarray_core::array::DoubleArray;
    /// let a = DoubleArray::from_buffer(&[1.0, 2.0, 3.0], 2).unwrap();
    /// assert_eq!(a.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn from_buffer(source: &[T], count: i32) -> Result<Self> {
        check_length(count)?;
        let range = check_range(source.len(), 0, count)?;
        Ok(Self {
            buf: RawBuffer::copied(&source[range])?,
        })
    }

    /// Create an array holding a copy of all of `source`.
    pub fn from_slice(source: &[T]) -> Result<Self> {
        let count = i32::try_from(source.len()).map_err(|_| CoreError::CapacityOverflow {
            length: source.len(),
            width: T::KIND.width(),
        })?;
        Self::from_buffer(source, count)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The fixed number of elements.
    #[inline]
    pub fn length(&self) -> i32 {
        // Construction only accepts lengths that came from an `i32`.
        self.buf.len() as i32
    }

    /// The number of elements as a `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// The kind of element this array stores.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// A flat slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// A mutable flat slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Raw pointer to the first element.
    ///
    /// For [`IntArray`] and [`LongArray`] the pointer is aligned for the
    /// same-width atomic type, so a slot may be viewed as one by code that
    /// layers atomic operations on top of this array.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Copy all elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Read the element at `index`.
    #[inline]
    pub fn get(&self, index: i32) -> Result<T> {
        let i = check_index(self.len(), index)?;
        Ok(self.as_slice()[i])
    }

    /// A mutable reference to the slot at `index`.
    #[inline]
    pub fn get_ref(&mut self, index: i32) -> Result<&mut T> {
        let i = check_index(self.len(), index)?;
        Ok(&mut self.as_mut_slice()[i])
    }

    /// Replace the element at `index`, returning the value written.
    #[inline]
    pub fn set(&mut self, index: i32, value: T) -> Result<T> {
        *self.get_ref(index)? = value;
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Range access
    // ------------------------------------------------------------------

    /// Copy `count` elements starting at `offset` into the front of `dest`.
    ///
    /// Both the array range and `dest` are validated before anything is
    /// copied; on error `dest` is untouched.
    ///
    /// ```
    /// # use primarray_core::array::ShortArray;
    /// let a = ShortArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// let mut out = [0_i16; 3];
    /// a.get_range(&mut out, 1, 3).unwrap();
    /// assert_eq!(out, [2, 3, 4]);
    /// ```
    pub fn get_range(&self, dest: &mut [T], offset: i32, count: i32) -> Result<()> {
        let src = check_range(self.len(), offset, count)?;
        let dst = check_range(dest.len(), 0, count)?;
        dest[dst].copy_from_slice(&self.as_slice()[src]);
        Ok(())
    }

    /// Overwrite `count` elements starting at `offset` with the front of
    /// `src`.
    ///
    /// Validation happens before any element is written.
    pub fn set_range(&mut self, src: &[T], offset: i32, count: i32) -> Result<()> {
        let dst = check_range(self.len(), offset, count)?;
        let from = check_range(src.len(), 0, count)?;
        self.as_mut_slice()[dst].copy_from_slice(&src[from]);
        Ok(())
    }

    /// Copy the first `count` elements into `dest`.
    pub fn copy_to(&self, dest: &mut [T], count: i32) -> Result<()> {
        self.get_range(dest, 0, count)
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Element> Clone for PrimitiveArray<T> {
    fn clone(&self) -> Self {
        trace!("cloning {} array of {} elements", T::KIND, self.len());
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T: Element> PartialEq for PrimitiveArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> AsRef<[T]> for PrimitiveArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T: Element> IntoIterator for &'a PrimitiveArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut PrimitiveArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn zero_filled<T: Element>(len: i32) {
        let a = PrimitiveArray::<T>::new(len).unwrap();
        assert_eq!(a.length(), len);
        assert_eq!(a.kind(), T::KIND);
        assert!(a.iter().all(|&x| x == T::ZERO));
    }

    #[test]
    fn test_new_every_kind_zeroed() {
        for len in [0, 1, 17] {
            zero_filled::<bool>(len);
            zero_filled::<u16>(len);
            zero_filled::<i8>(len);
            zero_filled::<i16>(len);
            zero_filled::<i32>(len);
            zero_filled::<i64>(len);
            zero_filled::<f32>(len);
            zero_filled::<f64>(len);
        }
    }

    #[test]
    fn test_new_negative() {
        assert_matches!(
            LongArray::new(-1),
            Err(CoreError::NegativeLength { length: -1 })
        );
    }

    #[test]
    fn test_get_set() {
        let mut a = IntArray::new(3).unwrap();
        assert_eq!(a.set(1, 42).unwrap(), 42);
        assert_eq!(a.get(1).unwrap(), 42);
        assert_eq!(a.get(0).unwrap(), 0);
        assert_eq!(a.as_slice(), &[0, 42, 0]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut a = BooleanArray::new(2).unwrap();
        assert_matches!(
            a.get(2),
            Err(CoreError::IndexOutOfBounds {
                index: 2,
                length: 2
            })
        );
        assert_matches!(a.get(-1), Err(CoreError::IndexOutOfBounds { .. }));
        assert_matches!(a.set(5, true), Err(CoreError::IndexOutOfBounds { .. }));
        assert!(a.get_ref(2).is_err());
        assert_eq!(a.as_slice(), &[false, false]);
    }

    #[test]
    fn test_get_ref_writes_through() {
        let mut a = CharArray::new(2).unwrap();
        *a.get_ref(0).unwrap() = u16::from(b'x');
        assert_eq!(a.get(0).unwrap(), 0x78);
    }

    #[test]
    fn test_from_buffer_round_trip() {
        let src = [3_i8, -1, 7, 9];
        let a = ByteArray::from_buffer(&src, 3).unwrap();
        assert_eq!(a.length(), 3);
        let mut out = [0_i8; 3];
        a.get_range(&mut out, 0, 3).unwrap();
        assert_eq!(out, src[..3]);
    }

    #[test]
    fn test_from_buffer_errors() {
        assert_matches!(
            FloatArray::from_buffer(&[1.0], -2),
            Err(CoreError::NegativeLength { length: -2 })
        );
        assert_matches!(
            FloatArray::from_buffer(&[1.0], 2),
            Err(CoreError::RangeOutOfBounds { .. })
        );
    }

    #[test]
    fn test_from_slice_empty() {
        let a = DoubleArray::from_slice(&[]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.length(), 0);
    }

    #[test]
    fn test_get_range_failure_leaves_dest() {
        let a = IntArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        let mut out = [9; 3];
        assert_matches!(
            a.get_range(&mut out, 3, 3),
            Err(CoreError::RangeOutOfBounds { .. })
        );
        assert_eq!(out, [9, 9, 9]);
    }

    #[test]
    fn test_get_range_short_dest() {
        let a = IntArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        let mut out = [0; 2];
        assert!(a.get_range(&mut out, 0, 3).is_err());
        assert_eq!(out, [0, 0]);
    }

    #[test]
    fn test_get_range_empty_at_end() {
        let a = IntArray::from_slice(&[1, 2]).unwrap();
        let mut out: [i32; 0] = [];
        a.get_range(&mut out, 2, 0).unwrap();
    }

    #[test]
    fn test_set_range() {
        let mut a = LongArray::new(5).unwrap();
        a.set_range(&[7, 8, 9], 2, 3).unwrap();
        assert_eq!(a.as_slice(), &[0, 0, 7, 8, 9]);
    }

    #[test]
    fn test_set_range_failure_leaves_array() {
        let mut a = LongArray::from_slice(&[1, 2, 3]).unwrap();
        assert!(a.set_range(&[7, 8], 2, 2).is_err());
        assert!(a.set_range(&[7], 0, 2).is_err());
        assert!(a.set_range(&[7, 8], i32::MAX, i32::MAX).is_err());
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_copy_to() {
        let a = ShortArray::from_slice(&[4, 5, 6]).unwrap();
        let mut out = [0_i16; 4];
        a.copy_to(&mut out, 2).unwrap();
        assert_eq!(out, [4, 5, 0, 0]);
    }

    #[test]
    fn test_atomic_kinds_aligned() {
        for len in [1, 5, 64] {
            let ints = IntArray::new(len).unwrap();
            let longs = LongArray::new(len).unwrap();
            assert_eq!(ints.as_ptr() as usize % i32::ALIGN, 0);
            assert_eq!(longs.as_ptr() as usize % i64::ALIGN, 0);
        }
    }

    #[cfg(target_has_atomic = "64")]
    #[test]
    fn test_long_slot_usable_as_atomic() {
        use core::sync::atomic::{AtomicI64, Ordering};

        let mut a = LongArray::new(4).unwrap();
        let slot: *mut i64 = a.get_ref(2).unwrap();
        // SAFETY: the slot is aligned for `AtomicI64` and exclusively borrowed.
        let counter = unsafe { AtomicI64::from_ptr(slot) };
        counter.fetch_add(5, Ordering::SeqCst);
        assert_eq!(a.get(2).unwrap(), 5);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = IntArray::from_slice(&[1, 2, 3]).unwrap();
        let mut b = a.clone();
        b.set(0, 100).unwrap();
        assert_eq!(a.get(0).unwrap(), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_iter_mut() {
        let mut a = FloatArray::from_slice(&[1.0, 2.0]).unwrap();
        for x in &mut a {
            *x *= 2.0;
        }
        assert_eq!(a.to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<DoubleArray>();
        assert_send_sync::<BooleanArray>();
    }
}
