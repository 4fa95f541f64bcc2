use crate::defaults::TargetDefaults;
use crate::extract::bgp::BgpConfig;
use crate::extract::static_routes::StaticRoutes;
use crate::naming::normalize_ifname;

use super::script::CliScript;

/// Rendered router-level sections: BGP, then OSPF, then static routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingOutput {
    pub text: String,
    pub static_routes: usize,
}

/// Render the routing sections present in the export.
///
/// Each section is written only when its source section exists. OSPF is not
/// translated; its presence is marked by a single empty line. The static
/// route section is opened only if the export had at least one route, even
/// if every route was dropped.
pub fn render_routing(
    bgp: Option<&BgpConfig<'_>>,
    ospf: bool,
    routes: &StaticRoutes<'_>,
    defaults: &TargetDefaults,
) -> RoutingOutput {
    let mut script = CliScript::new();

    if let Some(bgp) = bgp {
        render_bgp(&mut script, bgp, &defaults.naming.prefix);
    }
    if ospf {
        script.blank();
    }
    if routes.any_in_source() {
        render_static_routes(&mut script, routes, defaults);
    }

    RoutingOutput {
        text: script.finish(),
        static_routes: routes.routes.len(),
    }
}

/// `config router bgp` with one neighbor-group per peer group and one
/// neighbor per peer, each neighbor bound to the group it was declared in.
fn render_bgp(script: &mut CliScript, bgp: &BgpConfig<'_>, prefix: &str) {
    script.config("router bgp", |s| {
        s.set("router-id", bgp.router_id);
        s.set("as", bgp.local_as);

        s.config("neighbor-group", |s| {
            for group in &bgp.peer_groups {
                s.edit_quoted(group.name, |s| {
                    s.set("interface", normalize_ifname(group.local_interface, prefix));
                    s.set("remote-as", group.remote_as);
                    s.set("soft-reconfiguration", "enable");
                });
            }
        });

        s.config("neighbor", |s| {
            for group in &bgp.peer_groups {
                for peer in &group.peers {
                    s.edit_quoted(peer.address, |s| {
                        s.set("description", peer.name);
                        s.set_quoted("neighbor-group", group.name);
                    });
                }
            }
        });
    });
}

fn render_static_routes(
    script: &mut CliScript,
    routes: &StaticRoutes<'_>,
    defaults: &TargetDefaults,
) {
    script.config("router static", |s| {
        for route in &routes.routes {
            // Sequence 0 lets the FortiGate allocate the next free route id.
            s.edit(0, |s| {
                s.set(
                    "dst",
                    route
                        .destination
                        .unwrap_or(&defaults.static_route.destination),
                );
                s.set("gateway", route.next_hop);
                s.set("device", normalize_ifname(route.interface, &defaults.naming.prefix));
            });
        }
    });
}
