//! Storage primitives for the Tessel geometry codec.
//!
//! Two independent hierarchies, each an abstract contract with exactly two
//! concrete forms:
//!
//! - [`Buffer`]: a contiguous byte region with whole-replace and
//!   offset-write mutation, a monotonic update counter, and a framing-free
//!   dump to a [`ByteSink`](tessel_core::ByteSink). [`OwnedBuffer`] grows on
//!   demand; [`FixedBuffer`] wraps borrowed memory and rejects growth.
//! - [`IndexStore`]: a dynamic array addressed only through a
//!   [`DomainIndex`](tessel_core::DomainIndex) type, never a bare integer.
//!   [`IndexVec`] owns and grows its backing storage; [`IndexSlice`] wraps
//!   borrowed fixed-length storage and rejects every structural mutation.
//!
//! Neither hierarchy depends on the other; the encoding layers above
//! consume both through the shared contracts.
//!
//! All operations are synchronous and single-threaded. Fallible operations
//! return explicit errors ([`BufferError`], [`IndexVecError`]) — nothing
//! here truncates, clamps, or partially applies a write before detecting
//! failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod index_vec;

pub use buffer::{Buffer, FixedBuffer, OwnedBuffer};
pub use error::{BufferError, IndexVecError};
pub use index_vec::{IndexSlice, IndexStore, IndexVec};
