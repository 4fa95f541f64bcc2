use config_tree::ConfigNode;

use crate::error::ConvertError;

/// A static route that has a next-hop address and can be translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoute<'a> {
    pub name: Option<&'a str>,
    pub destination: Option<&'a str>,
    pub next_hop: &'a str,
    /// Raw PAN-OS egress interface name.
    pub interface: &'a str,
}

/// Static routes found in the export, split into translatable routes and the
/// number dropped for lack of a next-hop address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRoutes<'a> {
    pub routes: Vec<StaticRoute<'a>>,
    pub skipped: usize,
}

impl StaticRoutes<'_> {
    /// Whether the export had any `static-route` entries at all.
    pub fn any_in_source(&self) -> bool {
        !self.routes.is_empty() || self.skipped > 0
    }
}

/// Read every `static-route/entry` in the export.
///
/// Routes without `nexthop/ip-address` (discard, next-vr, ...) are counted in
/// [`StaticRoutes::skipped`] before anything else is checked. Kept routes must
/// name an egress `interface`.
pub fn extract_static_routes(tree: &ConfigNode) -> Result<StaticRoutes<'_>, ConvertError> {
    let mut found = StaticRoutes::default();

    for entry in tree.find_all(&["static-route", "entry"]) {
        let name = entry.name();
        let Some(next_hop) = entry.find_text(&["nexthop", "ip-address"]) else {
            tracing::debug!(
                route = name.unwrap_or("(unnamed)"),
                "static route has no next-hop address; skipped"
            );
            found.skipped += 1;
            continue;
        };
        let interface = entry.find_text(&["interface"]).ok_or_else(|| {
            ConvertError::missing(
                "interface",
                format!("static route {}", name.unwrap_or("(unnamed)")),
            )
        })?;

        found.routes.push(StaticRoute {
            name,
            destination: entry.text_at(&["destination"]),
            next_hop,
            interface,
        });
    }

    Ok(found)
}
