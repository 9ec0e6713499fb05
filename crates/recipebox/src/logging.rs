//! Diagnostics for recipebox.
//!
//! Recipe listings, details and JSON go to stdout; everything emitted through
//! `tracing` goes to stderr, so piping `recipebox list -f json` never mixes
//! the two. The default level is `warn`: a table file that cannot be created
//! is reported and the command carries on with an empty store, and that
//! report must be visible without `-v`. Row counts and file paths for every
//! load and save are logged at `debug`.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much recipebox reports on stderr, chosen with `-q` and `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only. Table-creation warnings are hidden.
    Quiet,
    /// No flag: warnings and errors.
    #[default]
    Normal,
    /// `-v`: also table loads and saves.
    Verbose,
    /// `-vv` and more.
    Trace,
}

impl Verbosity {
    /// The most detailed level shown at this verbosity.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    ///
    /// Only the `recipebox` target is enabled; dependency events stay off
    /// unless `RUST_LOG` asks for them.
    #[must_use]
    pub fn directive(&self) -> String {
        format!("recipebox={}", self.to_level_filter())
    }
}

/// Install the stderr subscriber for the `recipebox` binary.
///
/// `RUST_LOG`, when set and parseable, replaces the `-q`/`-v` choice
/// entirely. Calling this twice is harmless: the second call leaves the first
/// subscriber in place.
///
/// # Examples
///
/// ```no_run
/// use recipebox::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Capture warnings in test output, for tests that exercise warn paths.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recipebox=warn")
        .with_test_writer()
        .try_init();
}
