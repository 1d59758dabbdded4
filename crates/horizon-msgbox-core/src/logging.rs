//! Logging facilities for Horizon MsgBox.
//!
//! The library is instrumented with the `tracing` crate. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The library itself never installs a subscriber.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_msgbox_core::signal=trace`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_msgbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_msgbox_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "horizon_msgbox_core::object";
}
