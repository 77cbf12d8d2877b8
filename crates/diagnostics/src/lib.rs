//! Lightweight structured logging for the sitetree workspace.
//!
//! Usage:
//! - Set SITETREE_LOG=off (default) - no logs
//! - Set SITETREE_LOG=info - basic operation logs
//! - Set SITETREE_LOG=debug - detailed diagnostic logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on the SITETREE_LOG environment variable.
///
/// Call once at startup. Safe to call multiple times; subsequent calls
/// are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let level = std::env::var("SITETREE_LOG").unwrap_or_default();

        let min_level = match level.as_str() {
            "" | "off" => return,
            "debug" => emit::Level::Debug,
            "info" => emit::Level::Info,
            "warn" => emit::Level::Warn,
            "error" => emit::Level::Error,
            other => {
                eprintln!("Warning: Unknown SITETREE_LOG value '{other}', using 'info'");
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min_level))
            .init();

        // The runtime must outlive every emit call site.
        std::mem::forget(rt);
    });
}

/// Log basic operations (tree assembly, lookups, etc.)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (traversal steps, match counts, internal state)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}
