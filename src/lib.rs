#![no_std]

//! `DynArray`: an owning, resizable array with bounds-checked accessors.
//!
//! `DynArray<T>` is a single generic container: a heap-allocated, exclusively
//! owned buffer with a logical length tracked separately from its capacity.
//! It offers checked element access (`get`/`set` returning `Result`),
//! unchecked indexing (`[]`), explicit resizing with exact-size reallocation,
//! linear search, in-place reversal, bulk fill, and slicing into new
//! independently owned arrays. Copies are always deep; no two instances ever
//! share storage.
//!
//! The crate is `no_std` compatible and requires only `alloc`.
//!
//! # Checked vs. unchecked access
//!
//! `get` and `set` validate the index against the occupied region and return
//! [`DynArrayError::OutOfRange`] on misuse. The indexing operators perform no
//! length check at all: they address the whole allocation, and indexing past
//! it panics. Callers needing a recoverable error must use the checked pair.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr = DynArray::filled(5, 0i32);
//! arr.set(2, 9).unwrap();
//!
//! assert_eq!(arr.find(&9), Some(2));
//! arr.reverse();
//! // index 2 is the middle of an odd-length array, reversal leaves it in place
//! assert_eq!(*arr.get(2).unwrap(), 9);
//!
//! let tail = arr.slice_from(3).unwrap();
//! assert_eq!(tail.len(), 2);
//! ```
//!
//! # Spare capacity
//!
//! Truncating via `resize` keeps the allocation, so `len()` can be smaller
//! than `capacity()`. The slots in `[len, capacity)` are allocated and
//! initialized (freshly allocated slots hold `T::default()`, truncated slots
//! keep their old values) but their contents carry no meaning to any
//! operation: search, equality, fill and reverse all stop at `len()`.

extern crate alloc;

mod core;
mod error;

pub use crate::core::DynArray;
pub use crate::error::DynArrayError;
