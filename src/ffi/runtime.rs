//! ABI version and logging setup.

use crate::logging;

/// C ABI version. Bumped on any incompatible signature change.
pub const ABI_VERSION: u32 = 1;

#[no_mangle]
pub extern "C" fn amc_abi_version() -> u32 {
    ABI_VERSION
}

/// Installs the log subscriber. Non-zero `verbose` enables debug output.
///
/// # Returns
/// 0 on success, 1 if a subscriber was already installed.
#[no_mangle]
pub extern "C" fn amc_init_logging(verbose: u8) -> i32 {
    match logging::init(verbose != 0) {
        Ok(()) => {
            tracing::debug!("amc_helper ABI v{ABI_VERSION} logging ready");
            0
        }
        Err(e) => e.code(),
    }
}
