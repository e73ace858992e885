//! Growable and fixed byte buffers behind a shared contract.
//!
//! [`Buffer`] is the scratch-byte-region contract the encoding layers write
//! through. [`OwnedBuffer`] backs the contract with a `Vec<u8>` and grows on
//! demand; [`FixedBuffer`] wraps externally owned memory whose size was
//! decided by someone else and can never change here.
//!
//! Every successful content-changing operation bumps a monotonic update
//! counter, which consumers use to detect that a cached derivation of the
//! bytes has gone stale. Failed operations leave both content and counter
//! untouched: growth is checked before a single byte is copied, so a fixed
//! buffer can never be partially overwritten by an update it rejects.

use tessel_core::{BufferId, ByteSink};

use crate::error::BufferError;

/// A contiguous byte region with replace/offset-write mutation.
///
/// Object-safe so the encoding layers can hold `&mut dyn Buffer` without
/// caring which concrete form backs it. The two forms differ only in
/// growth: [`OwnedBuffer`] reallocates as needed, [`FixedBuffer`] rejects
/// any operation that would require a size it does not already have.
pub trait Buffer {
    /// Current logical size in bytes.
    fn len(&self) -> usize;

    /// Whether the buffer holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current content.
    ///
    /// The view borrows from the buffer, so it cannot be held across a
    /// mutating call — growth may relocate the backing memory, and the
    /// borrow checker makes a stale view unrepresentable.
    fn as_bytes(&self) -> &[u8];

    /// Number of successful content-changing operations so far.
    ///
    /// Starts at 0, increments by exactly 1 per successful `update`,
    /// `resize`, `update_at`, or `reserve_to`. Reads and failed operations
    /// never change it.
    fn update_count(&self) -> u64;

    /// The identifier assigned by the owning layer, if any.
    fn id(&self) -> Option<BufferId>;

    /// Assign an identifier. Does not count as a content change.
    fn set_id(&mut self, id: BufferId);

    /// Replace the entire logical content with `data`.
    ///
    /// An owned buffer adopts `data.len()` as its new size. A fixed buffer
    /// fails with [`BufferError::GrowthUnsupported`] when `data` is longer
    /// than the wrapped region; shorter data overwrites the prefix and the
    /// fixed size stays as constructed.
    fn update(&mut self, data: &[u8]) -> Result<(), BufferError>;

    /// Establish a region of exactly `len` bytes without caller content.
    ///
    /// The pre-sizing path for scratch space: newly established bytes are
    /// zeroed. An owned buffer may grow or shrink; a fixed buffer accepts
    /// only its own length (a counted no-op) and fails with
    /// [`BufferError::GrowthUnsupported`] for any other.
    fn resize(&mut self, len: usize) -> Result<(), BufferError>;

    /// Write `data` at byte `offset`, growing only when `offset + data.len()`
    /// exceeds the current size. Never shrinks.
    ///
    /// Bytes outside the targeted range are untouched; a gap opened between
    /// the old end and `offset` is zeroed. Fails with
    /// [`BufferError::InvalidSize`] when the extent overflows, and with
    /// [`BufferError::GrowthUnsupported`] when growth is required but the
    /// buffer is fixed — in which case nothing has been copied.
    fn update_at(&mut self, offset: usize, data: &[u8]) -> Result<(), BufferError>;

    /// Ensure the region spans at least `min_len` bytes without touching
    /// existing content. Never shrinks.
    fn reserve_to(&mut self, min_len: usize) -> Result<(), BufferError>;

    /// Append the full current content to `sink`, in byte order.
    ///
    /// Writes zero bytes when empty. Adds no length prefix or framing —
    /// framing is the caller's concern. Never mutates the buffer or its
    /// counter.
    fn write_to(&self, sink: &mut dyn ByteSink);
}

/// A growable buffer that owns its backing memory.
///
/// All operations succeed: growth reallocates through the backing `Vec`.
/// The backing memory is freed when the buffer is dropped.
#[derive(Debug, Default)]
pub struct OwnedBuffer {
    data: Vec<u8>,
    id: Option<BufferId>,
    update_count: u64,
}

impl OwnedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            id: None,
            update_count: 0,
        }
    }
}

impl Buffer for OwnedBuffer {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn update_count(&self) -> u64 {
        self.update_count
    }

    fn id(&self) -> Option<BufferId> {
        self.id
    }

    fn set_id(&mut self, id: BufferId) {
        self.id = Some(id);
    }

    fn update(&mut self, data: &[u8]) -> Result<(), BufferError> {
        self.data.clear();
        self.data.extend_from_slice(data);
        self.update_count += 1;
        Ok(())
    }

    fn resize(&mut self, len: usize) -> Result<(), BufferError> {
        self.data.resize(len, 0);
        self.update_count += 1;
        Ok(())
    }

    fn update_at(&mut self, offset: usize, data: &[u8]) -> Result<(), BufferError> {
        let end = offset.checked_add(data.len()).ok_or(BufferError::InvalidSize {
            offset,
            len: data.len(),
        })?;
        if end > self.data.len() {
            // Zero-fills any gap between the old end and `offset`.
            self.data.resize(end, 0);
        }
        self.data[offset..end].copy_from_slice(data);
        self.update_count += 1;
        Ok(())
    }

    fn reserve_to(&mut self, min_len: usize) -> Result<(), BufferError> {
        if min_len > self.data.len() {
            self.data.resize(min_len, 0);
        }
        self.update_count += 1;
        Ok(())
    }

    fn write_to(&self, sink: &mut dyn ByteSink) {
        if self.data.is_empty() {
            return;
        }
        sink.put(&self.data);
    }
}

/// A fixed-size buffer over externally owned memory.
///
/// The wrapped region's length is the buffer's size for its whole lifetime;
/// any operation that would need a different size fails with
/// [`BufferError::GrowthUnsupported`]. Writes within the existing range are
/// permitted. The external owner keeps the memory alive — the borrow makes
/// that a compile-time guarantee rather than a documentation rule.
#[derive(Debug)]
pub struct FixedBuffer<'a> {
    data: &'a mut [u8],
    id: Option<BufferId>,
    update_count: u64,
}

impl<'a> FixedBuffer<'a> {
    /// Wrap an externally owned region. Its length becomes the buffer's
    /// size, permanently.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data,
            id: None,
            update_count: 0,
        }
    }
}

impl Buffer for FixedBuffer<'_> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_bytes(&self) -> &[u8] {
        self.data
    }

    fn update_count(&self) -> u64 {
        self.update_count
    }

    fn id(&self) -> Option<BufferId> {
        self.id
    }

    fn set_id(&mut self, id: BufferId) {
        self.id = Some(id);
    }

    fn update(&mut self, data: &[u8]) -> Result<(), BufferError> {
        // Capacity check strictly before any copy.
        if data.len() > self.data.len() {
            return Err(BufferError::GrowthUnsupported {
                requested: data.len(),
                capacity: self.data.len(),
            });
        }
        self.data[..data.len()].copy_from_slice(data);
        self.update_count += 1;
        Ok(())
    }

    fn resize(&mut self, len: usize) -> Result<(), BufferError> {
        if len != self.data.len() {
            return Err(BufferError::GrowthUnsupported {
                requested: len,
                capacity: self.data.len(),
            });
        }
        // Resizing to the current size is a successful no-op.
        self.update_count += 1;
        Ok(())
    }

    fn update_at(&mut self, offset: usize, data: &[u8]) -> Result<(), BufferError> {
        let end = offset.checked_add(data.len()).ok_or(BufferError::InvalidSize {
            offset,
            len: data.len(),
        })?;
        // Capacity check strictly before any copy.
        if end > self.data.len() {
            return Err(BufferError::GrowthUnsupported {
                requested: end,
                capacity: self.data.len(),
            });
        }
        self.data[offset..end].copy_from_slice(data);
        self.update_count += 1;
        Ok(())
    }

    fn reserve_to(&mut self, min_len: usize) -> Result<(), BufferError> {
        if min_len > self.data.len() {
            return Err(BufferError::GrowthUnsupported {
                requested: min_len,
                capacity: self.data.len(),
            });
        }
        self.update_count += 1;
        Ok(())
    }

    fn write_to(&self, sink: &mut dyn ByteSink) {
        if self.data.is_empty() {
            return;
        }
        sink.put(self.data);
    }
}
