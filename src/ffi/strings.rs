//! C string conversion helpers.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};

use crate::error::Result;

/// Borrows a C string as `&str`. Null maps to `None`.
///
/// # Safety
/// - `ptr` must be null or point to a NUL-terminated string that outlives `'a`
pub unsafe fn read_c_str<'a>(ptr: *const c_char) -> Result<Option<&'a str>> {
    if ptr.is_null() {
        return Ok(None);
    }

    let s = CStr::from_ptr(ptr).to_str()?;
    Ok(Some(s))
}

/// Like `read_c_str`, but replaces invalid UTF-8 sequences with U+FFFD.
///
/// # Safety
/// - `ptr` must be null or point to a NUL-terminated string that outlives `'a`
pub unsafe fn read_c_str_lossy<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        return None;
    }

    Some(CStr::from_ptr(ptr).to_string_lossy())
}
