//! Integer plus optional string length.

/// Length of `text` in UTF-16 code units, or 0 when absent.
///
/// Characters outside the Basic Multilingual Plane count as two, matching
/// the string length a JVM host reports.
#[inline]
pub fn char_len(text: Option<&str>) -> i32 {
    text.map_or(0, |s| s.encode_utf16().count() as i32)
}

/// Adds the character length of `p2` to `p1`.
///
/// An absent string counts as zero length. The sum wraps on overflow, the
/// same as a 32-bit host integer would.
pub fn length_add(p1: i32, p2: Option<&str>) -> i32 {
    let ret = p1.wrapping_add(char_len(p2));
    tracing::info!(p1, p2 = ?p2, ret, "length_add");
    ret
}
