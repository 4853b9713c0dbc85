//! Console logging for Plugwire

use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug flag, set from `--debug` or `PLUGWIRE_DEBUG`
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable debug logging
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

/// Enable debug logging when `PLUGWIRE_DEBUG` is set to anything but `0`
pub fn enable_debug_from_env() {
    if std::env::var("PLUGWIRE_DEBUG").is_ok_and(|v| v != "0" && !v.is_empty()) {
        enable_debug();
    }
}

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Debug print macro - only prints if debug is enabled
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            println!("🔍 Debug: {}", format_args!($($arg)*));
        }
    };
}

/// Warning print - always shown to users
#[macro_export]
macro_rules! warn_println {
    ($($arg:tt)*) => {
        eprintln!("⚠️  {}", format_args!($($arg)*));
    };
}

/// Error print - always shown to users
#[macro_export]
macro_rules! error_println {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format_args!($($arg)*));
    };
}
