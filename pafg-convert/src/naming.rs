/// Rewrite a PAN-OS unit name into a FortiGate VLAN interface name.
///
/// A leading `aeN.` (aggregate unit) is replaced by `prefix`. Otherwise a
/// leading `eth` plus everything up to and including the last `.` (tagged
/// ethernet unit) is replaced. Any other name is returned unchanged, which
/// also makes the rewrite idempotent for prefixes that match neither form.
///
/// ```
/// use pafg_convert::naming::normalize_ifname;
///
/// assert_eq!(normalize_ifname("ae1.100", "VLan-"), "VLan-100");
/// assert_eq!(normalize_ifname("ethernet1/1.20", "VLan-"), "VLan-20");
/// assert_eq!(normalize_ifname("tunnel.1", "VLan-"), "tunnel.1");
/// ```
pub fn normalize_ifname(raw: &str, prefix: &str) -> String {
    match strip_aggregate_parent(raw).or_else(|| strip_ethernet_parent(raw)) {
        Some(unit) => format!("{prefix}{unit}"),
        None => raw.to_string(),
    }
}

/// `ae<digits>.<unit>` -> `<unit>`
fn strip_aggregate_parent(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("ae")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix('.')
}

/// `eth<anything>.<unit>` -> `<unit>`, splitting on the last dot.
fn strip_ethernet_parent(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("eth")?;
    let dot = rest.rfind('.')?;
    Some(&rest[dot + 1..])
}
