//! The `Arena` owns the cells, and the addressable reference bindings, of a single branded scope.
//!
//! The brand is a fresh invariant lifetime, introduced by `Arena::scope` in the same way `GhostToken::new` introduces
//! one in the original GhostCell paper. Every handle issued by an arena carries its brand, hence:
//!
//! -   A handle cannot be used with any other arena.
//! -   A handle cannot escape the scope of its arena.
//!
//! Since cells are never removed from an arena before the end of its scope, every non-null handle is always valid.
//!
//! ```compile_fail
//! use alias_cell::Arena;
//!
//! //  The reference would outlive its arena.
//! let escaped = Arena::scope(|mut arena: Arena<'_, i32>| arena.alloc(42));
//! ```
//!
//! ```compile_fail
//! use alias_cell::Arena;
//!
//! Arena::scope(|mut first: Arena<'_, i32>| {
//!     Arena::scope(|second: Arena<'_, i32>| {
//!         let reference = first.alloc(42);
//!
//!         //  The reference belongs to `first`, not `second`.
//!         second.get(&reference).copied()
//!     })
//! });
//! ```

use core::{fmt, marker::PhantomData, mem};

use alloc::vec::Vec;

use crate::error::NullReferenceError;
use crate::indirect::RefToRef;
use crate::reference::{InvariantLifetime, Reference};

/// The storage of all cells, and all addressable references, of a branded scope.
pub struct Arena<'brand, T> {
    cells: Vec<T>,
    bindings: Vec<Reference<'brand>>,
    _marker: InvariantLifetime<'brand>,
}

impl<'brand, T> Arena<'brand, T> {
    /// Creates a fresh, empty, arena and runs `fun` with it.
    ///
    /// #   Example
    ///
    /// ```rust
    /// use alias_cell::Arena;
    ///
    /// let value = Arena::scope(|mut arena| {
    ///     let p1 = arena.alloc(42);
    ///     let p2 = p1;
    ///
    ///     arena.set(&p1, 99).unwrap();
    ///
    ///     *arena.get(&p2).unwrap()
    /// });
    ///
    /// assert_eq!(99, value);
    /// ```
    pub fn scope<R, F>(fun: F) -> R
    where
        for <'new_id> F: FnOnce(Arena<'new_id, T>) -> R
    {
        let arena = Arena { cells: Vec::new(), bindings: Vec::new(), _marker: PhantomData };
        fun(arena)
    }

    /// Returns the number of cells allocated so far.
    pub fn cells(&self) -> usize { self.cells.len() }

    /// Returns the number of addressable bindings created so far.
    pub fn bindings(&self) -> usize { self.bindings.len() }

    /// Allocates a new cell holding `value`, returning a reference to it.
    pub fn alloc(&mut self, value: T) -> Reference<'brand> {
        let index = self.cells.len();
        self.cells.push(value);

        trace_event!(trace, index, "cell allocated");

        Reference::from_index(index)
    }

    /// Allocates a new cell holding the default value, returning a reference to it.
    ///
    /// There is no uninitialized memory: a fresh integer cell holds 0.
    pub fn alloc_default(&mut self) -> Reference<'brand>
    where
        T: Default,
    {
        self.alloc(T::default())
    }

    /// Dereferences `reference`.
    pub fn get(&self, reference: &Reference<'brand>) -> Result<&T, NullReferenceError> {
        let index = reference.index()?;

        Ok(&self.cells[index])
    }

    /// Dereferences `reference`, mutably.
    ///
    /// The mutation is observable through every alias of `reference`.
    pub fn get_mut(&mut self, reference: &Reference<'brand>) -> Result<&mut T, NullReferenceError> {
        let index = reference.index()?;

        Ok(&mut self.cells[index])
    }

    /// Assigns `value` to the cell designated by `reference`.
    pub fn set(&mut self, reference: &Reference<'brand>, value: T) -> Result<(), NullReferenceError> {
        *self.get_mut(reference)? = value;

        Ok(())
    }

    /// Returns the value of the designated cell, replacing it by the supplied one.
    pub fn replace(&mut self, reference: &Reference<'brand>, value: T) -> Result<T, NullReferenceError> {
        Ok(mem::replace(self.get_mut(reference)?, value))
    }

    /// Returns the value of the designated cell, replacing it by the default value.
    pub fn take(&mut self, reference: &Reference<'brand>) -> Result<T, NullReferenceError>
    where
        T: Default,
    {
        self.replace(reference, T::default())
    }

    /// Copies the value of the cell designated by `source` into the cell designated by `destination`.
    ///
    /// The two cells remain distinct: further mutations of either are not observable through the other.
    pub fn assign(&mut self, destination: &Reference<'brand>, source: &Reference<'brand>) -> Result<(), NullReferenceError>
    where
        T: Clone,
    {
        let value = self.get(source)?.clone();

        self.set(destination, value)
    }

    /// Declares an addressable reference variable holding `reference`, returning its address.
    ///
    /// The variable lives in the arena: it is rebound with `rebind_through`, read with `deref_ref`, and every copy of
    /// the returned address observes its rebindings, hence `p5 = &p1; p1 = p2` is written:
    ///
    /// ```rust
    /// use alias_cell::Arena;
    ///
    /// Arena::scope(|mut arena| {
    ///     let first = arena.alloc(42);
    ///     let p1 = arena.declare(first);
    ///     let p2 = arena.alloc(38);
    ///
    ///     let p5 = p1.copy_ref().unwrap();
    ///     arena.rebind_through(&p1, p2).unwrap();
    ///
    ///     assert_eq!(Ok(&38), arena.deref_value(&p5));
    /// });
    /// ```
    pub fn declare(&mut self, reference: Reference<'brand>) -> RefToRef<'brand> {
        let index = self.bindings.len();
        self.bindings.push(reference);

        trace_event!(trace, index, "binding created");

        RefToRef::from_index(index)
    }

    /// Takes the address of a snapshot of `reference`, by moving a copy of it into a new variable.
    ///
    /// The local `reference` is detached from the variable: rebinding it afterwards, with `Reference::rebind`, is not
    /// observable through the returned address. Use `declare` and `rebind_through` for a variable whose rebindings
    /// are observable.
    pub fn address_of(&mut self, reference: Reference<'brand>) -> RefToRef<'brand> { self.declare(reference) }

    /// Dereferences `reference` once, returning the reference currently stored in the designated binding.
    ///
    /// The returned reference may itself be null.
    pub fn deref_ref(&self, reference: &RefToRef<'brand>) -> Result<Reference<'brand>, NullReferenceError> {
        let index = reference.index()?;

        Ok(self.bindings[index])
    }

    /// Dereferences `reference` twice, returning the value of the cell designated by the stored reference.
    ///
    /// #   Errors
    ///
    /// Returns `NullReferenceError` if either `reference`, or the reference stored in its binding, is null.
    pub fn deref_value(&self, reference: &RefToRef<'brand>) -> Result<&T, NullReferenceError> {
        let target = self.deref_ref(reference)?;

        self.get(&target)
    }

    /// Stores `target` in the binding designated by `reference`, returning the previously stored reference.
    ///
    /// The rebinding is observable through every alias of `reference`.
    pub fn rebind_through(&mut self, reference: &RefToRef<'brand>, target: Reference<'brand>)
        -> Result<Reference<'brand>, NullReferenceError>
    {
        let index = reference.index()?;

        trace_event!(trace, index, target = target.addr(), "binding rebound");

        Ok(mem::replace(&mut self.bindings[index], target))
    }
}

impl<'brand, T: fmt::Debug> fmt::Debug for Arena<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("cells", &self.cells)
            .field("bindings", &self.bindings)
            .finish()
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn alloc_get_set() {
    Arena::scope(|mut arena| {
        let reference = arena.alloc(42);

        assert_eq!(Ok(&42), arena.get(&reference));

        arena.set(&reference, 33).unwrap();

        assert_eq!(Ok(&33), arena.get(&reference));
        assert_eq!(1, arena.cells());
    });
}

#[test]
fn alloc_default_is_zero() {
    Arena::scope(|mut arena| {
        let reference = arena.alloc_default();

        assert_eq!(Ok(&0u64), arena.get(&reference));
    });
}

#[test]
fn null_access() {
    Arena::scope(|mut arena: Arena<'_, i32>| {
        let null = Reference::null();

        assert_eq!(Err(NullReferenceError), arena.get(&null));
        assert_eq!(Err(NullReferenceError), arena.get_mut(&null).map(|value| *value));
        assert_eq!(Err(NullReferenceError), arena.set(&null, 1));
        assert_eq!(Err(NullReferenceError), arena.replace(&null, 1));
        assert_eq!(Err(NullReferenceError), arena.take(&null));
        assert_eq!(0, arena.cells());
    });
}

#[test]
fn replace_take() {
    Arena::scope(|mut arena| {
        let reference = arena.alloc(7);

        assert_eq!(Ok(7), arena.replace(&reference, 8));
        assert_eq!(Ok(8), arena.take(&reference));
        assert_eq!(Ok(&0), arena.get(&reference));
    });
}

#[test]
fn assign_copies_value() {
    Arena::scope(|mut arena| {
        let source = arena.alloc(67);
        let destination = arena.alloc_default();

        arena.assign(&destination, &source).unwrap();
        assert_eq!(Ok(&67), arena.get(&destination));

        arena.set(&source, 42).unwrap();
        assert_eq!(Ok(&67), arena.get(&destination));

        assert_eq!(Err(NullReferenceError), arena.assign(&destination, &Reference::null()));
        assert_eq!(Err(NullReferenceError), arena.assign(&Reference::null(), &source));
    });
}

#[test]
fn address_of_and_rebind_through() {
    Arena::scope(|mut arena| {
        let first = arena.alloc(42);
        let second = arena.alloc(38);

        let pointer = arena.address_of(first);
        let alias = pointer;

        assert_eq!(Ok(first), arena.deref_ref(&pointer));
        assert_eq!(Ok(&42), arena.deref_value(&pointer));

        assert_eq!(Ok(first), arena.rebind_through(&pointer, second));
        assert_eq!(Ok(&38), arena.deref_value(&alias));
        assert_eq!(1, arena.bindings());
    });
}

#[test]
fn address_of_detaches_local() {
    Arena::scope(|mut arena| {
        let mut p1 = arena.alloc(42);
        let p2 = arena.alloc(38);

        let p5 = arena.address_of(p1);
        p1.rebind(&p2);

        assert_eq!(Ok(&42), arena.deref_value(&p5));
        assert_eq!(Ok(&38), arena.get(&p1));
    });
}

#[test]
fn declared_variable_rebinding_is_observable() {
    Arena::scope(|mut arena| {
        let first = arena.alloc(42);
        let p1 = arena.declare(first);
        let p2 = arena.alloc(38);

        let p5 = p1.copy_ref().unwrap();
        assert_eq!(Ok(&42), arena.deref_value(&p5));

        assert_eq!(Ok(first), arena.rebind_through(&p1, p2));

        assert_eq!(Ok(p2), arena.deref_ref(&p5));
        assert_eq!(Ok(&38), arena.deref_value(&p5));
    });
}

#[test]
fn double_deref_of_null() {
    Arena::scope(|mut arena: Arena<'_, i32>| {
        let pointer = arena.address_of(Reference::null());

        assert_eq!(Ok(Reference::null()), arena.deref_ref(&pointer));
        assert_eq!(Err(NullReferenceError), arena.deref_value(&pointer));
        assert_eq!(Err(NullReferenceError), arena.deref_value(&RefToRef::null()));
        assert_eq!(Err(NullReferenceError), arena.rebind_through(&RefToRef::null(), Reference::null()));
    });
}

#[test]
fn debug() {
    Arena::scope(|mut arena| {
        let reference = arena.alloc(1);
        arena.address_of(reference);

        assert_eq!("Arena { cells: [1], bindings: [Reference(0x1)] }", format!("{:?}", arena));
    });
}

} // mod tests
