//! `Arena`, `Reference` and `RefToRef` model pointers explicitly: declaration, dereference, address-of, aliasing,
//! rebinding, and pointer-to-pointer.
//!
//! Cells live in a branded `Arena`, and references are indices tagged with the arena's brand rather than addresses,
//! hence the crate contains no `unsafe` code at all, and null is an explicit state checked on every dereference.
//!
//! #   Example of usage.
//!
//! ```
//! use alias_cell::{Arena, NullReferenceError, Reference, ValueAccessor};
//!
//! Arena::scope(|mut arena: Arena<'_, i32>| {
//!     //  A freshly declared reference is null.
//!     let mut p1 = Reference::null();
//!
//!     assert_eq!(Err(NullReferenceError), arena.copy_value(&p1));
//!
//!     //  Allocation zero-initializes.
//!     p1 = arena.alloc_default();
//!
//!     assert_eq!(Ok(0), arena.copy_value(&p1));
//!
//!     //  Copying a reference aliases the cell: mutations are visible through both.
//!     let p2 = arena.copy_ref(&p1).unwrap();
//!     arena.set(&p1, 42).unwrap();
//!
//!     assert_eq!(Ok(42), arena.copy_value(&p2));
//!
//!     //  A reference to a reference sees rebindings of its binding.
//!     let p3 = arena.alloc(38);
//!     let pp = arena.address_of(p1);
//!
//!     assert_eq!(Ok(&42), arena.deref_value(&pp));
//!
//!     arena.rebind_through(&pp, p3).unwrap();
//!
//!     assert_eq!(Ok(&38), arena.deref_value(&pp));
//! });
//! ```
//!
//! #   Options
//!
//! The crate is defined for `no_std` environment and only relies on `core` and `alloc` by default.
//!
//! -   `std`: implements `std::error::Error` for `NullReferenceError`.
//! -   `tracing`: emits `tracing` events on allocation, rebinding, and null dereferences.

//  Regular features
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//  Lints
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod utils;

mod accessor;
mod arena;
mod error;
mod indirect;
mod reference;

pub use self::accessor::ValueAccessor;
pub use self::arena::Arena;
pub use self::error::NullReferenceError;
pub use self::indirect::RefToRef;
pub use self::reference::Reference;
