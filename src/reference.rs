//  Reference
//
//  A handle designating at most one cell of an `Arena`.

use core::{
    fmt,
    hash,
    marker::PhantomData,
};

use crate::error::NullReferenceError;

/// A nullable reference to a cell of an `Arena<'brand, T>`.
///
/// A `Reference` is a plain index tagged with the brand of the arena which issued it: it is `Copy`, and copying it
/// creates an alias rather than copying the value of the cell.
///
/// Equality is identity: two references are equal if they designate the same cell, or are both null.
pub struct Reference<'brand> {
    index: Option<usize>,
    _marker: InvariantLifetime<'brand>,
}

impl<'brand> Reference<'brand> {
    /// Creates a null reference, designating no cell.
    pub const fn null() -> Self { Self { index: None, _marker: PhantomData } }

    /// Returns whether the reference designates no cell.
    pub fn is_null(&self) -> bool { self.index.is_none() }

    /// Returns a new reference designating the same cell as `self`.
    ///
    /// #   Errors
    ///
    /// Returns `NullReferenceError` if `self` is null.
    pub fn copy_ref(&self) -> Result<Self, NullReferenceError> {
        self.index()?;

        Ok(*self)
    }

    /// Rebinds `self` to designate the same cell as `other`, or nothing if `other` is null.
    ///
    /// Neither the previously designated cell, nor the newly designated one, is modified. A `Reference` is a local
    /// value: snapshots taken by `Arena::address_of` do not observe this rebinding, see `Arena::declare`.
    pub fn rebind(&mut self, other: &Self) { self.index = other.index; }

    /// Rebinds `self` to null, returning the previous reference.
    pub fn clear(&mut self) -> Self { Self { index: self.index.take(), _marker: PhantomData } }

    /// Returns true if the two references designate the same cell, or are both null.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool { this.index == other.index }

    /// Returns the pseudo-address of the designated cell; 0 for null.
    pub fn addr(&self) -> usize { self.index.map_or(0, |index| index + 1) }

    pub(crate) fn from_index(index: usize) -> Self { Self { index: Some(index), _marker: PhantomData } }

    pub(crate) fn index(&self) -> Result<usize, NullReferenceError> {
        self.index.ok_or_else(|| {
            trace_event!(debug, "null reference dereferenced");
            NullReferenceError
        })
    }
}

impl<'brand> Clone for Reference<'brand> {
    fn clone(&self) -> Self { *self }
}

impl<'brand> Copy for Reference<'brand> {}

impl<'brand> Default for Reference<'brand> {
    fn default() -> Self { Self::null() }
}

impl<'brand> PartialEq for Reference<'brand> {
    fn eq(&self, other: &Self) -> bool { Self::ptr_eq(self, other) }
}

impl<'brand> Eq for Reference<'brand> {}

impl<'brand> hash::Hash for Reference<'brand> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { self.index.hash(state); }
}

impl<'brand> fmt::Debug for Reference<'brand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({:#x})", self.addr())
    }
}

impl<'brand> fmt::Pointer for Reference<'brand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.addr())
    }
}

//
//  Implementation
//

pub(crate) type InvariantLifetime<'brand> = PhantomData<fn(&'brand ()) -> &'brand ()>;

// mod tests
