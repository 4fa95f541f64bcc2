use std::fmt::{self, Display, Formatter};

/// Counts describing what one conversion run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub interfaces: usize,
    /// Name-matched `entry` elements with no IP configuration. Includes
    /// non-interface entries that share the naming, such as DHCP bindings.
    pub candidates_without_ip: usize,
    pub dhcp_relays: usize,
    pub bgp_peer_groups: usize,
    pub bgp_peers: usize,
    pub ospf: bool,
    pub static_routes: usize,
    pub static_routes_skipped: usize,
}

impl Display for ConversionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "convert_summary interfaces={} candidates_without_ip={} dhcp_relays={} bgp_peer_groups={} bgp_peers={} ospf={} static_routes={} static_routes_skipped={}",
            self.interfaces,
            self.candidates_without_ip,
            self.dhcp_relays,
            self.bgp_peer_groups,
            self.bgp_peers,
            self.ospf,
            self.static_routes,
            self.static_routes_skipped
        )
    }
}
