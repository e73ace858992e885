//! The byte output seam consumed by buffer serialization.
//!
//! [`ByteSink`] decouples "dump these bytes" from where the bytes go. The
//! storage crate writes through `&mut dyn ByteSink`, so encoders can target
//! an in-memory vector, a file writer, or a hashing sink without the
//! storage layer knowing.

/// An ordered, append-only byte destination.
///
/// Implementations receive bytes in order and must not reorder or drop
/// them. No length prefix or framing is added by the caller; a sink that
/// needs framing applies it itself.
pub trait ByteSink {
    /// Append `bytes` to the sink.
    fn put(&mut self, bytes: &[u8]);
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_appends_in_order() {
        let mut sink = Vec::new();
        sink.put(&[1, 2]);
        sink.put(&[]);
        sink.put(&[3]);
        assert_eq!(sink, vec![1, 2, 3]);
    }
}
