//! Read the pieces of a PAN-OS export the FortiGate output is built from.
//!
//! Extractors borrow from the parsed tree and never modify it. Fields that
//! the output cannot do without are checked here and reported as
//! [`ConvertError`](crate::error::ConvertError); everything else stays
//! optional and is defaulted by the emitters.

pub mod bgp;
pub mod dhcp_relay;
pub mod interfaces;
pub mod static_routes;

use config_tree::ConfigNode;

/// Whether the export carries an OSPF section anywhere.
pub fn has_ospf(tree: &ConfigNode) -> bool {
    tree.find(&["ospf"]).is_some()
}
