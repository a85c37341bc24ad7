//! LengthAdder over the C ABI.

use std::ffi::c_char;

use super::strings::{read_c_str, read_c_str_lossy};
use crate::error::{HelperError, Result};
use crate::helper;

/// Returns `p1` plus the character length of `p2`.
///
/// # Safety
/// - `p2` must be null or a valid NUL-terminated string
///
/// A null `p2` counts as zero length. Invalid UTF-8 is decoded lossily.
#[no_mangle]
pub unsafe extern "C" fn amc_length_add(p1: i32, p2: *const c_char) -> i32 {
    let text = match read_c_str(p2) {
        Ok(text) => text.map(std::borrow::Cow::Borrowed),
        Err(e) => {
            tracing::warn!(error = %e, "amc_length_add decoding invalid UTF-8 lossily");
            read_c_str_lossy(p2)
        }
    };
    helper::length_add(p1, text.as_deref())
}

/// Strict variant of `amc_length_add` that rejects invalid UTF-8.
///
/// # Safety
/// - `p2` must be null or a valid NUL-terminated string
/// - `out` must be null or a valid pointer to an `i32`
///
/// # Returns
/// 0 on success, 1 if `out` is null, 2 if `p2` is not valid UTF-8.
/// `*out` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn amc_length_add_checked(
    p1: i32,
    p2: *const c_char,
    out: *mut i32,
) -> i32 {
    match length_add_checked(p1, p2, out) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!("amc_length_add_checked failed: {e}");
            e.code()
        }
    }
}

unsafe fn length_add_checked(p1: i32, p2: *const c_char, out: *mut i32) -> Result<()> {
    if out.is_null() {
        return Err(HelperError::NullPointer { arg: "out" });
    }

    let text = read_c_str(p2)?;
    *out = helper::length_add(p1, text);
    Ok(())
}
