//! The single error of the crate.

use core::fmt;

/// An error signifying that a `Reference`, or a `RefToRef`, was dereferenced while designating nothing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NullReferenceError;

impl fmt::Display for NullReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null reference dereferenced")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NullReferenceError {}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn display() {
    assert_eq!("null reference dereferenced", NullReferenceError.to_string());
}

} // mod tests
