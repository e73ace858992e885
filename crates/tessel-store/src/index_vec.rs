//! Typed-index containers: dynamic arrays addressed by domain indices.
//!
//! [`IndexStore`] is the contract; [`IndexVec`] owns and grows its backing
//! storage, [`IndexSlice`] wraps borrowed fixed-length storage and rejects
//! every structural mutation. Both accept only the index type of their
//! declared domain, so cross-domain index mix-ups are compile errors.
//!
//! The raw view ([`IndexStore::as_slice`]) is always derived from the
//! current backing storage. Growth may relocate that storage, but because
//! the view borrows the container, the borrow checker forbids holding one
//! across a mutating call — there is no stale-view failure mode to check
//! for at runtime.
//!
//! No iteration contract is defined here; consumers that need traversal
//! build it on `len()` plus indexed access, or serialize via `as_slice()`.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use tessel_core::DomainIndex;

use crate::error::IndexVecError;

/// A dynamic array whose elements are addressed by a [`DomainIndex`] type.
///
/// Structural mutators return `Result` so the borrowed fixed-length form
/// can reject them; the owned form never fails. Checked element access
/// reports [`IndexVecError::OutOfRange`] rather than clamping or resizing.
pub trait IndexStore<I: DomainIndex> {
    /// Element type stored in the container.
    type Elem;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the backing memory, derived on demand.
    fn as_slice(&self) -> &[Self::Elem];

    /// The element at `index`, or [`IndexVecError::OutOfRange`] when the
    /// index's integer is not below `len()`.
    fn get(&self, index: I) -> Result<&Self::Elem, IndexVecError>;

    /// Mutable access to the element at `index`, with the same range
    /// contract as [`IndexStore::get`].
    fn get_mut(&mut self, index: I) -> Result<&mut Self::Elem, IndexVecError>;

    /// Remove every element.
    fn clear(&mut self) -> Result<(), IndexVecError>;

    /// Reserve capacity for at least `additional` more elements.
    fn reserve(&mut self, additional: usize) -> Result<(), IndexVecError>;

    /// Resize to `new_len` elements, filling new slots with the default
    /// value.
    fn resize(&mut self, new_len: usize) -> Result<(), IndexVecError>
    where
        Self::Elem: Default + Clone;

    /// Resize to `new_len` elements, filling new slots with clones of
    /// `fill`.
    fn resize_fill(&mut self, new_len: usize, fill: Self::Elem) -> Result<(), IndexVecError>
    where
        Self::Elem: Clone;

    /// Replace the entire content with `new_len` clones of `fill`.
    fn assign(&mut self, new_len: usize, fill: Self::Elem) -> Result<(), IndexVecError>
    where
        Self::Elem: Clone;

    /// Append `value`, returning the index it landed at — the prior
    /// `len()` wrapped in the container's domain.
    fn push(&mut self, value: Self::Elem) -> Result<I, IndexVecError>;
}

/// An owned, growable typed-index container.
///
/// Backed by a `Vec<T>` with the usual amortized growth; every structural
/// mutation succeeds. The domain type parameter is phantom — it costs
/// nothing at runtime and exists purely to make the access operations
/// domain-checked.
#[derive(Clone, Debug)]
pub struct IndexVec<I, T> {
    items: Vec<T>,
    _domain: PhantomData<I>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _domain: PhantomData,
        }
    }

    /// Create an empty container with room for `capacity` elements before
    /// the first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            _domain: PhantomData,
        }
    }

    /// Create a container of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: vec![value; len],
            _domain: PhantomData,
        }
    }
}

impl<I, T> Default for IndexVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: DomainIndex, T> IndexStore<I> for IndexVec<I, T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn get(&self, index: I) -> Result<&T, IndexVecError> {
        let i = index.as_usize();
        self.items.get(i).ok_or(IndexVecError::OutOfRange {
            index: i,
            len: self.items.len(),
        })
    }

    fn get_mut(&mut self, index: I) -> Result<&mut T, IndexVecError> {
        let i = index.as_usize();
        let len = self.items.len();
        self.items
            .get_mut(i)
            .ok_or(IndexVecError::OutOfRange { index: i, len })
    }

    fn clear(&mut self) -> Result<(), IndexVecError> {
        self.items.clear();
        Ok(())
    }

    fn reserve(&mut self, additional: usize) -> Result<(), IndexVecError> {
        self.items.reserve(additional);
        Ok(())
    }

    fn resize(&mut self, new_len: usize) -> Result<(), IndexVecError>
    where
        T: Default + Clone,
    {
        self.items.resize(new_len, T::default());
        Ok(())
    }

    fn resize_fill(&mut self, new_len: usize, fill: T) -> Result<(), IndexVecError>
    where
        T: Clone,
    {
        self.items.resize(new_len, fill);
        Ok(())
    }

    fn assign(&mut self, new_len: usize, fill: T) -> Result<(), IndexVecError>
    where
        T: Clone,
    {
        self.items.clear();
        self.items.resize(new_len, fill);
        Ok(())
    }

    fn push(&mut self, value: T) -> Result<I, IndexVecError> {
        let index = I::from_usize(self.items.len());
        self.items.push(value);
        Ok(index)
    }
}

impl<I: DomainIndex, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        &self.items[index.as_usize()]
    }
}

impl<I: DomainIndex, T> IndexMut<I> for IndexVec<I, T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.items[index.as_usize()]
    }
}

/// A typed-index view over externally owned, fixed-length storage.
///
/// Exists solely to give domain-checked element access into memory the
/// container neither owns nor resizes. Every structural mutator fails with
/// [`IndexVecError::UnsupportedOperation`] and changes nothing; indexed
/// read/write into the existing range works as on [`IndexVec`].
#[derive(Debug)]
pub struct IndexSlice<'a, I, T> {
    items: &'a mut [T],
    _domain: PhantomData<I>,
}

impl<'a, I, T> IndexSlice<'a, I, T> {
    /// Wrap externally owned storage. Its length is the container's length
    /// for the lifetime of the wrapper.
    pub fn new(items: &'a mut [T]) -> Self {
        Self {
            items,
            _domain: PhantomData,
        }
    }
}

impl<I: DomainIndex, T> IndexStore<I> for IndexSlice<'_, I, T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn as_slice(&self) -> &[T] {
        self.items
    }

    fn get(&self, index: I) -> Result<&T, IndexVecError> {
        let i = index.as_usize();
        self.items.get(i).ok_or(IndexVecError::OutOfRange {
            index: i,
            len: self.items.len(),
        })
    }

    fn get_mut(&mut self, index: I) -> Result<&mut T, IndexVecError> {
        let i = index.as_usize();
        let len = self.items.len();
        self.items
            .get_mut(i)
            .ok_or(IndexVecError::OutOfRange { index: i, len })
    }

    fn clear(&mut self) -> Result<(), IndexVecError> {
        Err(IndexVecError::UnsupportedOperation { op: "clear" })
    }

    fn reserve(&mut self, _additional: usize) -> Result<(), IndexVecError> {
        Err(IndexVecError::UnsupportedOperation { op: "reserve" })
    }

    fn resize(&mut self, _new_len: usize) -> Result<(), IndexVecError>
    where
        T: Default + Clone,
    {
        Err(IndexVecError::UnsupportedOperation { op: "resize" })
    }

    fn resize_fill(&mut self, _new_len: usize, _fill: T) -> Result<(), IndexVecError>
    where
        T: Clone,
    {
        Err(IndexVecError::UnsupportedOperation { op: "resize_fill" })
    }

    fn assign(&mut self, _new_len: usize, _fill: T) -> Result<(), IndexVecError>
    where
        T: Clone,
    {
        Err(IndexVecError::UnsupportedOperation { op: "assign" })
    }

    fn push(&mut self, _value: T) -> Result<I, IndexVecError> {
        Err(IndexVecError::UnsupportedOperation { op: "push" })
    }
}

impl<I: DomainIndex, T> Index<I> for IndexSlice<'_, I, T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        &self.items[index.as_usize()]
    }
}

impl<I: DomainIndex, T> IndexMut<I> for IndexSlice<'_, I, T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.items[index.as_usize()]
    }
}
