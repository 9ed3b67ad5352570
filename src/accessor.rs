//! The `ValueAccessor` trait: copying the value designated by a reference, or the reference itself.

use crate::arena::Arena;
use crate::error::NullReferenceError;
use crate::reference::Reference;

/// A trait for reading through references, distinguishing between copying a value and aliasing a cell.
pub trait ValueAccessor<'brand> {
    /// The type of the value held by each cell.
    type Value;

    /// Returns a copy of the value of the cell designated by `reference`.
    ///
    /// The copy is independent: mutating it does not affect the cell, and mutating the cell does not affect it.
    ///
    /// #   Example
    ///
    /// ```rust
    /// use alias_cell::{Arena, ValueAccessor};
    ///
    /// Arena::scope(|mut arena| {
    ///     let p1 = arena.alloc(42);
    ///     let copy = arena.copy_value(&p1).unwrap();
    ///
    ///     arena.set(&p1, 100).unwrap();
    ///
    ///     assert_eq!(42, copy);
    /// });
    /// ```
    ///
    /// #   Errors
    ///
    /// Returns `NullReferenceError` if `reference` is null.
    fn copy_value(&self, reference: &Reference<'brand>) -> Result<Self::Value, NullReferenceError>;

    /// Returns a new reference designating the same cell as `reference`.
    ///
    /// #   Example
    ///
    /// ```rust
    /// use alias_cell::{Arena, ValueAccessor};
    ///
    /// Arena::scope(|mut arena| {
    ///     let p1 = arena.alloc(38);
    ///     let p2 = arena.copy_ref(&p1).unwrap();
    ///
    ///     arena.set(&p1, 99).unwrap();
    ///
    ///     assert_eq!(Ok(99), arena.copy_value(&p2));
    /// });
    /// ```
    ///
    /// #   Errors
    ///
    /// Returns `NullReferenceError` if `reference` is null.
    fn copy_ref(&self, reference: &Reference<'brand>) -> Result<Reference<'brand>, NullReferenceError>;
}

impl<'brand, T: Clone> ValueAccessor<'brand> for Arena<'brand, T> {
    type Value = T;

    fn copy_value(&self, reference: &Reference<'brand>) -> Result<T, NullReferenceError> {
        self.get(reference).map(T::clone)
    }

    fn copy_ref(&self, reference: &Reference<'brand>) -> Result<Reference<'brand>, NullReferenceError> {
        reference.copy_ref()
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn copy_value_is_independent() {
    Arena::scope(|mut arena| {
        let reference = arena.alloc(42);

        let mut copy = arena.copy_value(&reference).unwrap();
        copy += 1;

        assert_eq!(43, copy);
        assert_eq!(Ok(42), arena.copy_value(&reference));
    });
}

#[test]
fn copy_ref_aliases() {
    Arena::scope(|mut arena| {
        let first = arena.alloc(38);
        let second = arena.copy_ref(&first).unwrap();

        *arena.get_mut(&first).unwrap() = 99;

        assert_eq!(Ok(99), arena.copy_value(&second));
        assert!(Reference::ptr_eq(&first, &second));
    });
}

#[test]
fn null_is_rejected() {
    Arena::scope(|arena: Arena<'_, i32>| {
        let null = Reference::null();

        assert_eq!(Err(NullReferenceError), arena.copy_value(&null));
        assert_eq!(Err(NullReferenceError), arena.copy_ref(&null));
    });
}

} // mod tests
