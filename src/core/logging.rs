//! Logging setup shared by both binaries.
//!
//! Output goes to stderr so the MCP STDIO transport keeps stdout to itself.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a configured level name onto a tracing level. Unknown names fall
/// back to `INFO`.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured; the configured level is added on top.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
