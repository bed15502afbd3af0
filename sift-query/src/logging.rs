//! Diagnostic logging for sift.
//!
//! Sift emits `tracing` events while building condition sets and predicates.
//! They are silent unless `SIFT_DEBUG` is set, and only reach an output when a
//! subscriber is installed, either by the host application or by [`init`]
//! (requires the `tracing-subscriber` feature).
//!
//! # Environment Variables
//!
//! - `SIFT_DEBUG=true|1|yes` - Enable diagnostic events
//! - `SIFT_LOG_LEVEL=trace|debug|info|warn|error` - Set the subscriber level
//! - `SIFT_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! ```rust,no_run
//! use sift_query::logging;
//!
//! logging::init_with_level("trace");
//! ```

use std::env;
use std::sync::Once;

/// Enables diagnostic events.
pub const DEBUG_VAR: &str = "SIFT_DEBUG";
/// Overrides the subscriber level.
pub const LOG_LEVEL_VAR: &str = "SIFT_LOG_LEVEL";
/// Selects the subscriber output format.
pub const LOG_FORMAT_VAR: &str = "SIFT_LOG_FORMAT";

static INIT: Once = Once::new();

/// Whether `SIFT_DEBUG` is set to a truthy value.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(DEBUG_VAR).is_ok_and(|v| parse_flag(&v))
}

/// The level from `SIFT_LOG_LEVEL`, or `debug`/`warn` depending on `SIFT_DEBUG`.
pub fn get_log_level() -> &'static str {
    parse_level(env::var(LOG_LEVEL_VAR).ok().as_deref(), is_debug_enabled())
}

/// The format from `SIFT_LOG_FORMAT`, defaulting to `json`.
pub fn get_log_format() -> &'static str {
    parse_format(env::var(LOG_FORMAT_VAR).ok().as_deref())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_level(requested: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match requested.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

fn parse_format(requested: Option<&str>) -> &'static str {
    match requested.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Install a global subscriber for sift's events.
///
/// Only the first call has any effect, and nothing is installed unless
/// `SIFT_DEBUG` or `SIFT_LOG_LEVEL` is set. Without the `tracing-subscriber`
/// feature this is a no-op and the host's subscriber receives the events.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var(LOG_LEVEL_VAR).is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("sift={level},sift_query={level}"))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let installed = match get_log_format() {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level = level, format = get_log_format(), "sift logging initialized");
            }
        }
    });
}

/// Set `SIFT_LOG_LEVEL` and call [`init`].
///
/// Also enables `SIFT_DEBUG`, since sift's events are gated on it.
///
/// # Safety
///
/// This modifies environment variables. Call it at startup, before
/// spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: documented as a startup-only call.
    unsafe {
        env::set_var(LOG_LEVEL_VAR, level);
        env::set_var(DEBUG_VAR, "true");
    }
    init();
}

/// Set `SIFT_DEBUG=true` and call [`init`].
///
/// # Safety
///
/// Same constraints as [`init_with_level`].
pub fn init_debug() {
    // SAFETY: documented as a startup-only call.
    unsafe {
        env::set_var(DEBUG_VAR, "true");
    }
    init();
}

/// Debug-level event, emitted only when `SIFT_DEBUG` is enabled.
#[macro_export]
macro_rules! sift_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            $crate::tracing::debug!($($arg)*);
        }
    };
}

/// Trace-level event, emitted only when `SIFT_DEBUG` is enabled.
#[macro_export]
macro_rules! sift_trace {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            $crate::tracing::trace!($($arg)*);
        }
    };
}
