use config_tree::ConfigNode;

/// A PAN-OS `entry` selected for translation into a FortiGate interface.
///
/// Field lookups search the whole entry subtree, so a parent entry such as
/// `ae1` reports the values of its first unit.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceEntry<'a> {
    name: &'a str,
    node: &'a ConfigNode,
}

impl<'a> InterfaceEntry<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Address/mask from the first `ip/entry` below the interface. An
    /// `ip/entry` without a `name` counts as no address.
    pub fn ip(&self) -> Option<&'a str> {
        self.node.find(&["ip", "entry"])?.name()
    }

    pub fn vlan_tag(&self) -> Option<&'a str> {
        self.node.find_text(&["tag"])
    }

    pub fn comment(&self) -> Option<&'a str> {
        self.node.find_text(&["comment"])
    }
}

/// Name filter for translatable interfaces: aggregates (`ae...`) and tagged
/// ethernet units (`eth...` containing a dot).
pub fn is_candidate_name(name: &str) -> bool {
    name.starts_with("ae") || (name.starts_with("eth") && name.contains('.'))
}

/// Every `entry` in the document whose name passes [`is_candidate_name`],
/// in document order.
pub fn select_interfaces(tree: &ConfigNode) -> Vec<InterfaceEntry<'_>> {
    tree.descendants()
        .filter(|node| node.tag == "entry")
        .filter_map(|node| {
            let name = node.name()?;
            is_candidate_name(name).then_some(InterfaceEntry { name, node })
        })
        .collect()
}
