//! Exact-size, kind-aligned element storage.
//!
//! A `Vec<T>` only guarantees `align_of::<T>()`, which on some 32-bit
//! targets is smaller than the alignment of the same-width atomic. The
//! buffer here is allocated with [`Element::ALIGN`] instead, and its size is
//! always exactly `len * size_of::<T>()`.

use core::marker::PhantomData;
use core::mem::size_of;
use core::ptr::{self, NonNull};
use core::slice;
use std::alloc::{self, Layout};

use log::trace;

use crate::error::{CoreError, Result};
use crate::kind::Element;

pub(crate) struct RawBuffer<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuffer` uniquely owns its allocation and `Element` types are
// plain `Send + Sync` values.
unsafe impl<T: Element> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Element> Sync for RawBuffer<T> {}

impl<T: Element> RawBuffer<T> {
    fn layout(len: usize) -> Result<Layout> {
        Layout::array::<T>(len)
            .and_then(|l| l.align_to(T::ALIGN))
            .map_err(|_| CoreError::CapacityOverflow {
                length: len,
                width: size_of::<T>(),
            })
    }

    /// Allocate `len` elements. The memory is zeroed when `zeroed` is set and
    /// must otherwise be fully written by the caller before it is read.
    fn allocate(len: usize, zeroed: bool) -> Result<Self> {
        Ok(Self::allocate_with(Self::layout(len)?, len, zeroed))
    }

    fn allocate_with(layout: Layout, len: usize, zeroed: bool) -> Self {
        trace!(
            "allocating {} array: {} elements, {} bytes, align {}",
            T::KIND,
            len,
            layout.size(),
            layout.align()
        );
        if layout.size() == 0 {
            let dangling = ptr::without_provenance_mut::<T>(T::ALIGN);
            return Self {
                ptr: NonNull::new(dangling).unwrap_or(NonNull::dangling()),
                len,
                layout,
                _owns: PhantomData,
            };
        }
        // SAFETY: `layout` has non-zero size.
        let raw = unsafe {
            if zeroed {
                alloc::alloc_zeroed(layout)
            } else {
                alloc::alloc(layout)
            }
        };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout);
        };
        Self {
            ptr,
            len,
            layout,
            _owns: PhantomData,
        }
    }

    /// A buffer of `len` elements, every one equal to [`Element::ZERO`].
    pub(crate) fn zeroed(len: usize) -> Result<Self> {
        // All-zero bytes are `Element::ZERO` for every implementor.
        Self::allocate(len, true)
    }

    /// A buffer holding a copy of `src`.
    pub(crate) fn copied(src: &[T]) -> Result<Self> {
        let mut buf = Self::allocate(src.len(), false)?;
        buf.fill_from(src);
        Ok(buf)
    }

    /// Write all of `src` into a buffer of the same length that has not been
    /// read yet.
    fn fill_from(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.len);
        // SAFETY: `self` has room for exactly `src.len()` elements and owns
        // its allocation, so the regions cannot overlap.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.ptr.as_ptr(), src.len());
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid and initialized for `len` elements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::allocate_with(self.layout, self.len, false);
        buf.fill_from(self.as_slice());
        buf
    }
}

impl<T: Element> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            trace!("releasing {} array of {} elements", T::KIND, self.len);
            // SAFETY: allocated in `allocate_with` with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) };
        }
    }
}
