//! Strongly-typed index domains and the [`BufferId`] identifier.
//!
//! Each entity kind in the codec (points, vertices, corners, faces,
//! attribute values) gets its own zero-cost newtype over `u32`. Storage
//! containers accept only the index type of their declared domain, so a
//! vertex index can never be used where a face index is expected — the
//! mix-up is a compile error, not a runtime bug.

use std::fmt;

/// Conversion contract shared by every index domain.
///
/// Implemented by the domain newtypes in this module; downstream crates
/// implement it on their own newtypes to add domains. The backing integer
/// is `u32` — large enough for any mesh the codec targets while keeping
/// index-heavy tables compact.
pub trait DomainIndex: Copy {
    /// Wrap a container position as an index of this domain.
    fn from_usize(value: usize) -> Self;

    /// The container position this index addresses.
    fn as_usize(self) -> usize;
}

/// Index of a point in the original attribute order.
///
/// Points are the pre-deduplication entries of an attribute stream;
/// `PointIndex(n)` is the n-th point as it appeared in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointIndex(pub u32);

impl fmt::Display for PointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PointIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl DomainIndex for PointIndex {
    fn from_usize(value: usize) -> Self {
        Self(value as u32)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a vertex in the connectivity graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(pub u32);

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl DomainIndex for VertexIndex {
    fn from_usize(value: usize) -> Self {
        Self(value as u32)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a face corner.
///
/// Triangular connectivity stores three corners per face;
/// `CornerIndex(3 * f + c)` is corner `c` of face `f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CornerIndex(pub u32);

impl fmt::Display for CornerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CornerIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl DomainIndex for CornerIndex {
    fn from_usize(value: usize) -> Self {
        Self(value as u32)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceIndex(pub u32);

impl fmt::Display for FaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FaceIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl DomainIndex for FaceIndex {
    fn from_usize(value: usize) -> Self {
        Self(value as u32)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a unique attribute value after deduplication.
///
/// Multiple points can map to the same attribute value; this domain
/// addresses the deduplicated value table, not the point stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeValueIndex(pub u32);

impl fmt::Display for AttributeValueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AttributeValueIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl DomainIndex for AttributeValueIndex {
    fn from_usize(value: usize) -> Self {
        Self(value as u32)
    }

    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Identifier a higher layer assigns to a scratch buffer.
///
/// Attribute descriptors refer to their backing buffer by id rather than by
/// reference, so the id lives here with the other identifier types. A
/// freshly created buffer has no id until the owning layer assigns one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BufferId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_usize() {
        let i = FaceIndex::from_usize(42);
        assert_eq!(i, FaceIndex(42));
        assert_eq!(i.as_usize(), 42);
    }

    #[test]
    fn domains_order_by_value() {
        assert!(PointIndex(1) < PointIndex(2));
        assert!(CornerIndex(5) > CornerIndex(0));
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(VertexIndex(7).to_string(), "7");
        assert_eq!(BufferId(9).to_string(), "9");
    }
}
