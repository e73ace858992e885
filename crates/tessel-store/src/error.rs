//! Error types for the storage hierarchies.

use std::error::Error;
use std::fmt;

/// Errors from [`Buffer`](crate::Buffer) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// A requested byte extent overflows the address space.
    InvalidSize {
        /// Byte offset of the write.
        offset: usize,
        /// Length of the write in bytes.
        len: usize,
    },
    /// A growth-requiring operation was issued against a fixed buffer.
    GrowthUnsupported {
        /// Total size the operation required, in bytes.
        requested: usize,
        /// Fixed capacity of the wrapped region, in bytes.
        capacity: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { offset, len } => {
                write!(f, "byte extent overflows: offset {offset} + len {len}")
            }
            Self::GrowthUnsupported {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "fixed buffer cannot grow: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
        }
    }
}

impl Error for BufferError {}

/// Errors from [`IndexStore`](crate::IndexStore) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexVecError {
    /// A structural mutator was issued against a borrowed fixed-length
    /// container.
    UnsupportedOperation {
        /// Name of the rejected operation.
        op: &'static str,
    },
    /// An indexed access used an index outside `[0, len)`.
    OutOfRange {
        /// The integer value of the offending index.
        index: usize,
        /// Element count of the container at the time of access.
        len: usize,
    },
}

impl fmt::Display for IndexVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation { op } => {
                write!(f, "'{op}' is not supported on a fixed-length container")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for container of {len} elements")
            }
        }
    }
}

impl Error for IndexVecError {}
