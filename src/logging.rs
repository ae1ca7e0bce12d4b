//! Diagnostic logging setup for the command-line binary.

use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;

/// Maps `-q` / `-v` flags to a maximum log level.
///
/// Warnings are shown by default so plausibility hints reach the user.
pub fn level_from_flags(quiet: bool, verbose: u8) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr `fmt` subscriber as the global default.
///
/// Stdout is reserved for the report so it can be piped.
///
/// # Errors
///
/// Fails if a global subscriber has already been set.
pub fn init(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
