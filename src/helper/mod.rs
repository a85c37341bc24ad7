//! Core helper operations.
//!
//! Everything here is plain safe Rust. The FFI layer in `ffi/` converts C
//! arguments and calls into these functions.

pub mod cross;
pub mod key;
pub mod length;

pub use cross::{CrossCaller, HighFive};
pub use key::{public_key, PUBLIC_KEY};
pub use length::{char_len, length_add};
