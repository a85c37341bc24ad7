//! The `amc_*` symbols a host process links against.
//!
//! Each wrapper turns raw pointers and nullable callbacks into the safe
//! arguments `helper` and `partner` expect, then maps failures onto integer
//! status codes. No logic lives here beyond that translation.

pub mod cross;
pub mod key;
pub mod length;
pub mod partner;
pub mod runtime;
pub mod strings;

pub use cross::{amc_calling_partner, ForeignHighFive, HighFiveFn};
pub use key::{amc_public_key, amc_public_key_len};
pub use length::{amc_length_add, amc_length_add_checked};
pub use partner::amc_high_five;
pub use runtime::{amc_abi_version, amc_init_logging, ABI_VERSION};
