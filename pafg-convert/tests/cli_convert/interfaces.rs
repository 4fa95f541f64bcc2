use super::*;

fn run_with(dir: &Path, xml: &str) -> String {
    let input = dir.join("running-config.xml");
    fs::write(&input, xml).expect("input write");

    convert_cmd(dir).arg(path_as_str(&input)).assert().success();
    fs::read_to_string(dir.join("fw-lab.txt")).expect("output file")
}

fn unit_config(dhcp: &str) -> String {
    format!(
        r#"<config><devices><entry name="localhost.localdomain">
<network>
  <interface><aggregate-ethernet><entry name="ae1"><layer3><units>
    <entry name="ae1.100"><ip><entry name="10.0.0.1/24"/></ip><tag>100</tag><comment>Uplink</comment></entry>
  </units></layer3></entry></aggregate-ethernet></interface>
  {dhcp}
</network>
<deviceconfig><system><hostname>fw-lab</hostname></system></deviceconfig>
</entry></devices></config>"#
    )
}

#[test]
fn aggregate_unit_without_relay() {
    let dir = tempdir().expect("tempdir");
    let script = run_with(dir.path(), &unit_config(""));

    assert!(script.contains(
        "    edit VLan-100
        set vdom root
        set ip 10.0.0.1/24
        set interface \"Inside-LAGG\"
        set vlanid 100
        set alias \"Uplink\"
        set allowaccess ping
    next
"
    ));
    assert!(!script.contains("dhcp-relay"));
}

#[test]
fn aggregate_unit_with_two_relay_servers() {
    let dir = tempdir().expect("tempdir");
    let dhcp = r#"<dhcp><interface><entry name="ae1.100"><relay><ip><enabled>yes</enabled>
<server><member>10.1.1.1</member><member>10.1.1.2</member></server></ip></relay></entry></interface></dhcp>"#;
    let script = run_with(dir.path(), &unit_config(dhcp));

    assert!(script.contains(
        "        set allowaccess ping
        set dhcp-relay-service enable
        set dhcp-relay-ip 10.1.1.1 10.1.1.2
    next
"
    ));
}

#[test]
fn relay_bound_to_another_interface_is_not_applied() {
    let dir = tempdir().expect("tempdir");
    let dhcp = r#"<dhcp><interface><entry name="ae1.200"><relay><ip>
<server><member>10.1.1.9</member></server></ip></relay></entry></interface></dhcp>"#;
    let script = run_with(dir.path(), &unit_config(dhcp));

    assert!(!script.contains("dhcp-relay"));
    assert!(!script.contains("10.1.1.9"));
}

#[test]
fn untagged_ethernet_port_is_not_translated() {
    let dir = tempdir().expect("tempdir");
    let script = run_with(
        dir.path(),
        r#"<config><network><interface><ethernet>
<entry name="ethernet1/2"><layer3><ip><entry name="192.168.1.1/24"/></ip></layer3></entry>
<entry name="ethernet1/3.77"><ip><entry name="10.77.0.1/24"/></ip><tag>77</tag></entry>
</ethernet></interface></network><hostname>fw-lab</hostname></config>"#,
    );

    assert!(!script.contains("192.168.1.1/24"));
    assert!(script.contains("    edit VLan-77\n"));
    assert!(script.contains("        set vlanid 77\n"));
}
