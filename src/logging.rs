//! Log subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{HelperError, Result};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "amc_helper=debug,info"
    } else {
        "amc_helper=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber, failing if one is already set.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| HelperError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Another test may have won the race; either way the second call fails.
        let _ = init(false);
        let err = init(true).unwrap_err();
        assert_eq!(err.code(), 1);
    }
}
