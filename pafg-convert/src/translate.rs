//! Whole-document translation.
//!
//! [`translate`] runs the extractors and emitters over one parsed export and
//! returns the complete script in memory. Nothing is written to disk here,
//! so a fault anywhere in the translation leaves no partial output behind.

use config_tree::ConfigNode;

use crate::conversion_summary::ConversionSummary;
use crate::defaults::TargetDefaults;
use crate::emit::{render_interfaces, render_routing};
use crate::error::ConvertError;
use crate::extract::bgp::extract_bgp;
use crate::extract::dhcp_relay::DhcpRelayIndex;
use crate::extract::has_ospf;
use crate::extract::interfaces::select_interfaces;
use crate::extract::static_routes::extract_static_routes;

/// Result of translating one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Device hostname, used to name the output file.
    pub hostname: String,
    /// Interface section followed by the routing sections.
    pub script: String,
    pub summary: ConversionSummary,
}

impl Translation {
    /// Name of the file the script is written to.
    pub fn output_file_name(&self) -> String {
        output_file_name(&self.hostname)
    }
}

/// `<hostname>.txt`, with the hostname taken verbatim.
pub fn output_file_name(hostname: &str) -> String {
    format!("{hostname}.txt")
}

/// Translate a parsed export into a FortiGate script.
///
/// # Errors
///
/// Returns [`ConvertError::MissingField`] when a required value is absent:
/// the BGP router id or local AS, a peer group's remote AS or local
/// interface, a peer address, a routed static route's interface, or the
/// device hostname.
pub fn translate(tree: &ConfigNode, defaults: &TargetDefaults) -> Result<Translation, ConvertError> {
    let relays = DhcpRelayIndex::build(tree);
    let selected = select_interfaces(tree);
    let interfaces = render_interfaces(&selected, &relays, defaults);

    let bgp = extract_bgp(tree)?;
    let ospf = has_ospf(tree);
    let routes = extract_static_routes(tree)?;
    let routing = render_routing(bgp.as_ref(), ospf, &routes, defaults);

    let hostname = tree
        .find_all(&["hostname"])
        .into_iter()
        .find_map(ConfigNode::text)
        .ok_or_else(|| ConvertError::missing("hostname", "device configuration"))?;

    let summary = ConversionSummary {
        interfaces: interfaces.emitted,
        candidates_without_ip: interfaces.skipped,
        dhcp_relays: interfaces.with_relay,
        bgp_peer_groups: bgp.as_ref().map_or(0, |bgp| bgp.peer_groups.len()),
        bgp_peers: bgp.as_ref().map_or(0, |bgp| bgp.peer_count()),
        ospf,
        static_routes: routing.static_routes,
        static_routes_skipped: routes.skipped,
    };
    tracing::info!(%hostname, "{summary}");

    Ok(Translation {
        hostname: hostname.to_string(),
        script: interfaces.text + &routing.text,
        summary,
    })
}
