//! Logging facilities for tapnode.
//!
//! tapnode uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tapnode=trace,tapnode_core=trace")
//!         .init();
//!
//!     // Build the scene...
//! }
//! ```
//!
//! Every event emitted by the node and action code uses one of the
//! [`targets`] below, so a filter directive can enable a single subsystem.
//! Texture loading logs under `tapnode_render::texture`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Action slot binding and dispatch.
    pub const ACTION: &str = "tapnode_core::action";
    /// Button state changes and touch handling.
    pub const BUTTON: &str = "tapnode::button";
    /// Scene membership and touch routing.
    pub const SCENE: &str = "tapnode::scene";
    /// Configuration loading.
    pub const CONFIG: &str = "tapnode::config";
}
