use config_tree::ConfigNode;

use crate::error::ConvertError;

/// Router-level BGP settings read from the first `bgp` section of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgpConfig<'a> {
    pub router_id: &'a str,
    pub local_as: &'a str,
    pub peer_groups: Vec<BgpPeerGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgpPeerGroup<'a> {
    pub name: &'a str,
    pub remote_as: &'a str,
    /// Raw PAN-OS interface name the group's sessions are sourced from.
    pub local_interface: &'a str,
    pub peers: Vec<BgpPeer<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgpPeer<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

impl BgpConfig<'_> {
    pub fn peer_count(&self) -> usize {
        self.peer_groups.iter().map(|group| group.peers.len()).sum()
    }
}

/// Read the BGP section, if the export has one.
///
/// `router-id` and `local-as` must be direct children of the section. Each
/// peer group needs a name, a `peer-as` somewhere below it, and a
/// `peer/entry/local-address/interface` (the first peer that has one); each
/// peer needs a name and a `peer-address/ip`.
pub fn extract_bgp(tree: &ConfigNode) -> Result<Option<BgpConfig<'_>>, ConvertError> {
    let Some(bgp) = tree.find(&["bgp"]) else {
        return Ok(None);
    };

    let router_id = bgp
        .text_at(&["router-id"])
        .ok_or_else(|| ConvertError::missing("router-id", "bgp"))?;
    let local_as = bgp
        .text_at(&["local-as"])
        .ok_or_else(|| ConvertError::missing("local-as", "bgp"))?;

    let peer_groups = bgp
        .find_all(&["peer-group", "entry"])
        .into_iter()
        .map(peer_group)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(BgpConfig {
        router_id,
        local_as,
        peer_groups,
    }))
}

fn peer_group(entry: &ConfigNode) -> Result<BgpPeerGroup<'_>, ConvertError> {
    let name = entry
        .name()
        .ok_or_else(|| ConvertError::missing("name", "bgp peer-group entry"))?;
    let context = || format!("bgp peer-group {name}");

    let remote_as = entry
        .find_text(&["peer-as"])
        .ok_or_else(|| ConvertError::missing("peer-as", context()))?;
    let local_interface = entry
        .children_at(&["peer", "entry", "local-address", "interface"])
        .into_iter()
        .next()
        .and_then(ConfigNode::text)
        .ok_or_else(|| ConvertError::missing("local-address/interface", context()))?;

    let peers = entry
        .find_all(&["peer", "entry"])
        .into_iter()
        .map(|peer| peer_of(peer, name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BgpPeerGroup {
        name,
        remote_as,
        local_interface,
        peers,
    })
}

fn peer_of<'a>(entry: &'a ConfigNode, group: &str) -> Result<BgpPeer<'a>, ConvertError> {
    let name = entry
        .name()
        .ok_or_else(|| ConvertError::missing("name", format!("bgp peer-group {group}")))?;
    let address = entry
        .find_text(&["peer-address", "ip"])
        .ok_or_else(|| ConvertError::missing("peer-address/ip", format!("bgp peer {name}")))?;

    Ok(BgpPeer { name, address })
}
