//! Logger setup.
//!
//! Log records go to stderr as `LEVEL: message` so they never mix with the
//! report on stdout.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Level used when neither `--debug` nor `RUST_LOG` asks for more.
pub fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. `RUST_LOG` overrides the level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool) {
    let _ = Builder::new()
        .filter_level(default_level(debug))
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), LevelFilter::Warn);
        assert_eq!(default_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
