//! Tessel: storage core for a binary geometry codec.
//!
//! This facade crate re-exports the public API of the Tessel sub-crates.
//! For most users, adding `tessel` as a single dependency is sufficient.
//!
//! Two storage hierarchies make up the core:
//!
//! - byte buffers ([`OwnedBuffer`], [`FixedBuffer`]) behind the [`Buffer`]
//!   contract, with a framing-free dump to any [`ByteSink`];
//! - typed-index containers ([`IndexVec`], [`IndexSlice`]) behind the
//!   [`IndexStore`] contract, addressed only through domain index types
//!   such as [`VertexIndex`] or [`FaceIndex`].
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // Scratch bytes for an encoder, dumped to a sink when done.
//! let mut scratch = OwnedBuffer::new();
//! scratch.update(&[0x10, 0x20])?;
//! scratch.update_at(4, &[0x30])?;
//! assert_eq!(scratch.as_bytes(), &[0x10, 0x20, 0x00, 0x00, 0x30]);
//!
//! let mut encoded = Vec::new();
//! scratch.write_to(&mut encoded);
//! assert_eq!(encoded.len(), scratch.len());
//!
//! // A per-vertex table that only vertex indices can address.
//! let mut valences: IndexVec<VertexIndex, u32> = IndexVec::new();
//! let v0 = valences.push(3)?;
//! assert_eq!(valences[v0], 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tessel_core::{
    AttributeValueIndex, BufferId, ByteSink, CornerIndex, DomainIndex, FaceIndex, PointIndex,
    VertexIndex,
};
pub use tessel_store::{
    Buffer, BufferError, FixedBuffer, IndexSlice, IndexStore, IndexVec, IndexVecError, OwnedBuffer,
};

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use tessel_core::{
        AttributeValueIndex, BufferId, ByteSink, CornerIndex, DomainIndex, FaceIndex, PointIndex,
        VertexIndex,
    };
    pub use tessel_store::{
        Buffer, BufferError, FixedBuffer, IndexSlice, IndexStore, IndexVec, IndexVecError,
        OwnedBuffer,
    };
}
