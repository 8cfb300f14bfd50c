//! Logging setup for the `log` facade

use log::{LevelFilter, SetLoggerError};

/// Install `env_logger` on stderr: `Info` by default, `Debug` when `verbose`
///
/// `RUST_LOG` still overrides the level, per module if needed.
///
/// # Errors
///
/// Returns an error if a logger is already installed.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
}

const fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(false), LevelFilter::Info);
        assert_eq!(level_for(true), LevelFilter::Debug);
    }

    #[test]
    fn second_init_is_an_error() {
        let _ = init(false);
        assert!(init(true).is_err());
    }
}
