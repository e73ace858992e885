//! Core types for the Tessel geometry codec.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! strongly-typed index domains used to address codec storage, the
//! [`DomainIndex`] trait they implement, the [`BufferId`] scratch-buffer
//! identifier, and the [`ByteSink`] output seam that serialization writes
//! through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod index;
pub mod sink;

pub use index::{
    AttributeValueIndex, BufferId, CornerIndex, DomainIndex, FaceIndex, PointIndex, VertexIndex,
};
pub use sink::ByteSink;
