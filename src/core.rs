use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::error::DynArrayError;

/// An owning, resizable array with a logical length tracked separately
/// from its allocated capacity.
///
/// The capacity is the size of the boxed slice; slots in `[len, capacity)`
/// are allocated but their contents are meaningless to every operation.
pub struct DynArray<T> {
    buf: Box<[T]>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with no allocation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }

    /// Current number of occupied elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the underlying allocation. Always at least `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Validates an index under the checked-accessor bounds rule.
    ///
    /// Indices up to and including `len` are accepted as long as the slot
    /// physically exists, so the one-past-end probe succeeds exactly when
    /// spare capacity backs it. Anything further is out of range.
    fn check_index(&self, index: usize) -> Result<(), DynArrayError> {
        if index > self.len || index >= self.buf.len() {
            return Err(DynArrayError::OutOfRange {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index` is beyond the occupied
    /// region (see [`DynArray`] for the exact boundary rule).
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.check_index(index)?;
        Ok(&self.buf[index])
    }

    /// Writes `value` at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` under the same bounds rule as
    /// [`get`](Self::get).
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        self.check_index(index)?;
        self.buf[index] = value;
        Ok(())
    }

    /// Returns the index of the first element equal to `target`, or `None`
    /// if no occupied element matches.
    #[must_use]
    pub fn find(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buf[..self.len].iter().position(|el| el == target)
    }

    /// Reverses the occupied elements in place. Spare capacity is untouched.
    pub fn reverse(&mut self) {
        self.buf[..self.len].reverse();
    }

    /// Overwrites every occupied element with `value`. Length and capacity
    /// are unchanged.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.buf[..self.len].fill(value);
    }
}

impl<T: Default> DynArray<T> {
    /// Creates an array of `length` slots, all occupied.
    ///
    /// Slot contents are unspecified; this implementation default-initializes
    /// them, but callers must not rely on that.
    #[must_use]
    pub fn with_len(length: usize) -> Self {
        let mut buf = Vec::with_capacity(length);
        buf.resize_with(length, T::default);
        Self {
            buf: buf.into_boxed_slice(),
            len: length,
        }
    }

    /// Sets a new length for the array.
    ///
    /// If `new_len` exceeds the capacity, the storage is reallocated to
    /// exactly `new_len` slots and the occupied elements are moved over.
    /// Otherwise only the length changes: shrinking truncates without
    /// freeing memory, and growing within the existing capacity exposes
    /// spare slots whose contents are unspecified.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.buf.len() {
            self.reallocate(new_len);
        } else {
            self.len = new_len;
        }
    }

    /// Reallocates to exactly `len()` slots, reclaiming spare capacity.
    pub fn shrink(&mut self) {
        self.reallocate(self.len);
    }

    /// Replaces the storage with a fresh allocation of `new_capacity` slots,
    /// moving the first `min(len, new_capacity)` occupied elements and
    /// default-filling the rest. The old buffer is released here, once.
    fn reallocate(&mut self, new_capacity: usize) {
        let keep = self.len.min(new_capacity);
        let mut buf = mem::take(&mut self.buf).into_vec();
        buf.truncate(keep);
        buf.reserve_exact(new_capacity - keep);
        buf.resize_with(new_capacity, T::default);
        self.buf = buf.into_boxed_slice();
        self.len = new_capacity;
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates an array of `length` slots, every one initialized to `fill`.
    #[must_use]
    pub fn filled(length: usize, fill: T) -> Self {
        let mut buf = Vec::with_capacity(length);
        buf.resize(length, fill);
        Self {
            buf: buf.into_boxed_slice(),
            len: length,
        }
    }

    /// Returns a new, independently owned array holding a copy of the
    /// elements in `[begin, end)`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if either bound is beyond the
    /// occupied region, and `DynArrayError::InvalidRange` if `begin > end`.
    pub fn slice(&self, begin: usize, end: usize) -> Result<Self, DynArrayError> {
        if begin > self.len {
            return Err(DynArrayError::OutOfRange {
                index: begin,
                length: self.len,
            });
        }
        if end > self.len {
            return Err(DynArrayError::OutOfRange {
                index: end,
                length: self.len,
            });
        }
        if begin > end {
            return Err(DynArrayError::InvalidRange { begin, end });
        }

        let buf: Box<[T]> = self.buf[begin..end].to_vec().into_boxed_slice();
        let len = buf.len();
        Ok(Self { buf, len })
    }

    /// Returns a copy of the elements from `begin` to the end of the array.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `begin` is beyond the occupied
    /// region.
    pub fn slice_from(&self, begin: usize) -> Result<Self, DynArrayError> {
        self.slice(begin, self.len)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy owns a fresh buffer sized to the occupied region,
/// so its capacity equals its length regardless of the source's capacity.
impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let buf: Box<[T]> = self.buf[..self.len].to_vec().into_boxed_slice();
        Self { buf, len: self.len }
    }
}

/// Unchecked element access: addresses the whole allocation with no length
/// check. Indexing outside the allocation panics. Use [`DynArray::get`] for
/// a recoverable error instead.
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

/// Arrays are equal iff they are the same instance, or have the same length
/// and pairwise-equal occupied elements. Capacity does not participate.
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
            || (self.len == other.len && self.buf[..self.len] == other.buf[..other.len])
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// Renders the occupied elements only.
impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf[..self.len].iter()).finish()
    }
}
