use std::collections::BTreeMap;

use config_tree::ConfigNode;

/// Relay server addresses keyed by the interface they are bound to.
///
/// Built in one pass over every `dhcp/interface/entry` in the export. When
/// the same interface appears in several DHCP sections its servers are
/// appended in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpRelayIndex {
    servers: BTreeMap<String, Vec<String>>,
}

impl DhcpRelayIndex {
    pub fn build(tree: &ConfigNode) -> Self {
        let mut servers: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for entry in tree.find_all(&["dhcp", "interface", "entry"]) {
            let Some(name) = entry.name() else {
                continue;
            };
            let members = entry
                .children_at(&["relay", "ip", "server", "member"])
                .into_iter()
                .filter_map(ConfigNode::text)
                .map(ToOwned::to_owned);
            servers.entry(name.to_string()).or_default().extend(members);
        }

        servers.retain(|_, list| !list.is_empty());
        Self { servers }
    }

    /// Relay servers for `interface`, empty when it has no binding.
    pub fn servers_for(&self, interface: &str) -> &[String] {
        self.servers
            .get(interface)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of interfaces with at least one relay server.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
