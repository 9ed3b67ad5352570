//  RefToRef
//
//  A handle designating an addressable `Reference` binding of an `Arena`.

use core::{
    fmt,
    hash,
    marker::PhantomData,
};

use crate::error::NullReferenceError;
use crate::reference::InvariantLifetime;

/// A nullable reference to a `Reference` binding of an `Arena<'brand, T>`; that is, a pointer to a pointer.
///
/// Bindings are created by `Arena::address_of`. Dereferencing a `RefToRef` once yields the `Reference` currently
/// stored in the binding, twice yields the value of the cell that `Reference` designates.
pub struct RefToRef<'brand> {
    index: Option<usize>,
    _marker: InvariantLifetime<'brand>,
}

impl<'brand> RefToRef<'brand> {
    /// Creates a null reference, designating no binding.
    pub const fn null() -> Self { Self { index: None, _marker: PhantomData } }

    /// Returns whether the reference designates no binding.
    pub fn is_null(&self) -> bool { self.index.is_none() }

    /// Returns a new reference designating the same binding as `self`.
    pub fn copy_ref(&self) -> Result<Self, NullReferenceError> {
        self.index()?;

        Ok(*self)
    }

    /// Rebinds `self` to designate the same binding as `other`.
    pub fn rebind(&mut self, other: &Self) { self.index = other.index; }

    /// Rebinds `self` to null, returning the previous reference.
    pub fn clear(&mut self) -> Self { Self { index: self.index.take(), _marker: PhantomData } }

    /// Returns true if the two references designate the same binding, or are both null.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool { this.index == other.index }

    /// Returns the pseudo-address of the designated binding; 0 for null.
    ///
    /// Bindings and cells are numbered independently, hence their addresses may coincide.
    pub fn addr(&self) -> usize { self.index.map_or(0, |index| index + 1) }

    pub(crate) fn from_index(index: usize) -> Self { Self { index: Some(index), _marker: PhantomData } }

    pub(crate) fn index(&self) -> Result<usize, NullReferenceError> {
        self.index.ok_or_else(|| {
            trace_event!(debug, "null reference-to-reference dereferenced");
            NullReferenceError
        })
    }
}

impl<'brand> Clone for RefToRef<'brand> {
    fn clone(&self) -> Self { *self }
}

impl<'brand> Copy for RefToRef<'brand> {}

impl<'brand> Default for RefToRef<'brand> {
    fn default() -> Self { Self::null() }
}

impl<'brand> PartialEq for RefToRef<'brand> {
    fn eq(&self, other: &Self) -> bool { Self::ptr_eq(self, other) }
}

impl<'brand> Eq for RefToRef<'brand> {}

impl<'brand> hash::Hash for RefToRef<'brand> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { self.index.hash(state); }
}

impl<'brand> fmt::Debug for RefToRef<'brand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefToRef({:#x})", self.addr())
    }
}

impl<'brand> fmt::Pointer for RefToRef<'brand> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.addr())
    }
}

// mod tests
