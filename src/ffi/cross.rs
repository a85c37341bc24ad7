//! CrossCaller over the C ABI.

use crate::helper::{CrossCaller, HighFive};
use crate::partner::AddFive;

/// High-five function supplied by the host.
pub type HighFiveFn = extern "C" fn(i32) -> i32;

/// Adapts a host function pointer to the `HighFive` capability.
#[derive(Debug, Clone, Copy)]
pub struct ForeignHighFive(pub HighFiveFn);

impl HighFive for ForeignHighFive {
    #[inline]
    fn high_five(&self, p: i32) -> i32 {
        (self.0)(p)
    }
}

/// Forwards `p` to the partner's high-five function and returns its result.
///
/// A null `partner` selects the library's own high-five function.
#[no_mangle]
pub extern "C" fn amc_calling_partner(p: i32, partner: Option<HighFiveFn>) -> i32 {
    match partner {
        Some(f) => CrossCaller::new(ForeignHighFive(f)).call(p),
        None => CrossCaller::new(AddFive).call(p),
    }
}
