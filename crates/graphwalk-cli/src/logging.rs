//! Stderr logging setup for the `graphwalk` binary.
//!
//! `graphwalk-core` emits `tracing` events; this module installs the
//! subscriber that prints them. The level comes from the global flags
//! (`warn` by default, `debug` with `--verbose`, `error` with `--quiet`)
//! unless [`LOG_ENV`] holds an explicit filter directive.
use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `GRAPHWALK_LOG=graphwalk_core=trace`.
pub const LOG_ENV: &str = "GRAPHWALK_LOG";

/// Returns the default filter directive for the given flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Returns `true` if ANSI colors should be used on stderr.
///
/// Colors are off when `--no-color` is set, when `NO_COLOR` is present, or
/// when stderr is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Installs the global stderr subscriber.
pub fn init(verbose: bool, quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(colors_enabled(no_color))
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        eprintln!("warning: could not install logger: {e}");
    }
}
