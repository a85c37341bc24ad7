//! The collaborating module that owns the high-five function.
//!
//! Kept apart from `helper` so that the helper only ever reaches it through
//! the `HighFive` capability, the same way it reaches a host-supplied one.

use crate::helper::HighFive;

/// Adds 5 to the input, wrapping on overflow.
#[inline]
pub fn high_five(p: i32) -> i32 {
    p.wrapping_add(5)
}

/// The built-in partner for `CrossCaller`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddFive;

impl HighFive for AddFive {
    fn high_five(&self, p: i32) -> i32 {
        high_five(p)
    }
}
