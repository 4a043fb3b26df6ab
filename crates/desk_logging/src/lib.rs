#![deny(missing_docs)]
//! Shared logging utilities for the report desk workspace.
//!
//! Every crate logs through the `desk_*` macros below so the backend chosen by
//! the binary (file, terminal or both) sees one consistent stream. Library crates
//! never install a logger themselves; tests call [`initialize_for_tests`].

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! desk_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! desk_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! desk_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! desk_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! desk_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Log targets that belong to this workspace. Dependencies such as reqwest and
/// hyper log under their own targets and are filtered out.
pub const DESK_TARGETS: [&str; 2] = ["desk_", "report_desk"];

/// Level for a run: `verbose` adds the debug-level workflow transitions.
pub fn level_for(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Logger configuration shared by the binary and the tests: RFC 3339 stamps,
/// targets shown only on errors, and only [`DESK_TARGETS`] let through.
pub fn desk_config() -> simplelog::Config {
    let mut builder = simplelog::ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error);
    for target in DESK_TARGETS {
        builder.add_filter_allow_str(target);
    }
    builder.build()
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test: it no-ops once a logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        level_for(cfg!(debug_assertions)),
        desk_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
