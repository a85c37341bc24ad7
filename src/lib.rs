//! amc-helper - a small helper library exposed over a C ABI.
//!
//! The helper adds a string's length to an integer, forwards integers to a
//! partner module's high-five function, and serves a fixed public key.
//! The partner is injected, so a host can supply its own through `ffi`.

pub mod error;
pub mod ffi;
pub mod helper;
pub mod logging;
pub mod partner;

#[cfg(test)]
mod test_support;

pub use error::{HelperError, Result};
pub use helper::{length_add, public_key, CrossCaller, HighFive, PUBLIC_KEY};
pub use partner::{high_five, AddFive};
