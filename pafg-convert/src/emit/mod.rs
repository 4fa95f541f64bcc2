//! Render extracted configuration as FortiGate CLI text.

pub mod interfaces;
pub mod routing;
pub mod script;

pub use interfaces::{render_interfaces, InterfaceOutput};
pub use routing::{render_routing, RoutingOutput};
pub use script::CliScript;
