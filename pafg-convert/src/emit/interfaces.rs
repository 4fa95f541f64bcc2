use crate::defaults::TargetDefaults;
use crate::extract::dhcp_relay::DhcpRelayIndex;
use crate::extract::interfaces::InterfaceEntry;
use crate::naming::normalize_ifname;

use super::script::CliScript;

/// Rendered `config system interface` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceOutput {
    pub text: String,
    pub emitted: usize,
    /// Name-matched entries dropped because they carry no IP configuration.
    pub skipped: usize,
    /// Emitted entries that got DHCP relay settings.
    pub with_relay: usize,
}

/// Render one `edit` block per selected interface that has an IP address.
///
/// The section header and `end` are written even when nothing qualifies.
pub fn render_interfaces(
    entries: &[InterfaceEntry<'_>],
    relays: &DhcpRelayIndex,
    defaults: &TargetDefaults,
) -> InterfaceOutput {
    let iface = &defaults.interface;
    let mut emitted = 0;
    let mut skipped = 0;
    let mut with_relay = 0;
    let mut script = CliScript::new();

    script.config("system interface", |s| {
        for entry in entries {
            let Some(ip) = entry.ip() else {
                tracing::debug!(interface = entry.name(), "no IP configuration; skipped");
                skipped += 1;
                continue;
            };
            let servers = relays.servers_for(entry.name());
            let name = normalize_ifname(entry.name(), &defaults.naming.prefix);

            s.edit(&name, |s| {
                s.set("vdom", &iface.vdom);
                s.set("ip", ip);
                s.set_quoted("interface", &iface.parent);
                s.set("vlanid", entry.vlan_tag().unwrap_or(&iface.vlanid));
                s.set_quoted("alias", entry.comment().unwrap_or(&iface.comment));
                s.set("allowaccess", &iface.allowaccess);
                if !servers.is_empty() {
                    s.set("dhcp-relay-service", "enable");
                    s.set("dhcp-relay-ip", servers.join(" "));
                }
            });

            emitted += 1;
            if !servers.is_empty() {
                with_relay += 1;
            }
        }
    });

    InterfaceOutput {
        text: script.finish(),
        emitted,
        skipped,
        with_relay,
    }
}
