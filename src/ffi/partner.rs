//! The partner module's high-five function, callable by the host.

use crate::partner;

/// Adds 5 to `p`.
#[no_mangle]
pub extern "C" fn amc_high_five(p: i32) -> i32 {
    partner::high_five(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amc_high_five() {
        assert_eq!(amc_high_five(37), 42);
        assert_eq!(amc_high_five(-37), -32);
        assert_eq!(amc_high_five(-5), 0);
    }

    #[test]
    fn test_usable_as_partner_callback() {
        assert_eq!(crate::ffi::cross::amc_calling_partner(2, Some(amc_high_five)), 7);
    }
}
