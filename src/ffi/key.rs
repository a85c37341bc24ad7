//! KeyProvider over the C ABI.

use std::ffi::{c_char, CStr};

static PUBLIC_KEY_C: &CStr = c"Public key served by SomeJavaClass.getPublicKey";

/// Returns the public key as a static NUL-terminated string.
///
/// The pointer stays valid for the life of the process and must not be freed.
#[no_mangle]
pub extern "C" fn amc_public_key() -> *const c_char {
    PUBLIC_KEY_C.as_ptr()
}

/// Length of the public key in bytes, excluding the terminator.
#[no_mangle]
pub extern "C" fn amc_public_key_len() -> usize {
    PUBLIC_KEY_C.to_bytes().len()
}
