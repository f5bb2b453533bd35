//! Logging macros shared by every crate in the workspace.
//!
//! Library crates never install a subscriber. They emit plain `tracing` events
//! through these macros and the binary decides how they are rendered.

/// Target used for events that mark a successful milestone.
pub const SUCCESS_TARGET: &str = "subscout::success";

/// Target used for raw lines that are printed without a prefix.
pub const PRINT_TARGET: &str = "subscout::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "subscout::success", $($arg)*)
    };
}
