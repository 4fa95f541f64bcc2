use pretty_assertions::assert_eq;

use super::*;

const EDGE_SCRIPT: &str = r#"config system interface
    edit ae1
        set vdom root
        set ip 10.0.0.1/24
        set interface "Inside-LAGG"
        set vlanid 100
        set alias "Uplink"
        set allowaccess ping
    next
    edit VLan-100
        set vdom root
        set ip 10.0.0.1/24
        set interface "Inside-LAGG"
        set vlanid 100
        set alias "Uplink"
        set allowaccess ping
    next
    edit VLan-200
        set vdom root
        set ip 10.0.20.1/24
        set interface "Inside-LAGG"
        set vlanid 200
        set alias "Users & Printers"
        set allowaccess ping
        set dhcp-relay-service enable
        set dhcp-relay-ip 10.1.1.1 10.1.1.2
    next
    edit VLan-30
        set vdom root
        set ip 10.0.30.1/24
        set interface "Inside-LAGG"
        set vlanid no vlan
        set alias "No description"
        set allowaccess ping
    next
end
config router bgp
    set router-id 1.1.1.1
    set as 65000
    config neighbor-group
        edit "PEERS"
            set interface VLan-30
            set remote-as 65001
            set soft-reconfiguration enable
        next
    end
    config neighbor
        edit "192.0.2.1"
            set description peer1
            set neighbor-group "PEERS"
        next
    end
end

config router static
    edit 0
        set dst 0.0.0.0/0
        set gateway 203.0.113.1
        set device VLan-30
    next
end
"#;

#[test]
fn converts_device_export_to_hostname_file() {
    let dir = tempdir().expect("tempdir");

    convert_cmd(dir.path())
        .arg(fixture("fixtures/panos-edge.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "FortiGate configuration has been written to PA-EDGE-01.txt",
        ));

    let script = fs::read_to_string(dir.path().join("PA-EDGE-01.txt")).expect("output file");
    assert_eq!(script, EDGE_SCRIPT);
}

#[test]
fn overwrites_existing_output_file() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("PA-EDGE-01.txt");
    fs::write(&output, "stale contents\n").expect("seed output");

    convert_cmd(dir.path())
        .arg(fixture("fixtures/panos-edge.xml"))
        .assert()
        .success();

    let script = fs::read_to_string(&output).expect("output file");
    assert!(!script.contains("stale contents"));
    assert!(script.starts_with("config system interface\n"));
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let dir = tempdir().expect("tempdir");

    convert_cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: pafg-convert <path_to_palo_alto_config.xml>",
        ));
}

#[test]
fn extra_arguments_print_usage_and_exit_1() {
    let dir = tempdir().expect("tempdir");

    convert_cmd(dir.path())
        .arg("a.xml")
        .arg("b.xml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: pafg-convert"));
}

#[test]
fn dash_prefixed_argument_is_read_as_input_path() {
    let dir = tempdir().expect("tempdir");

    convert_cmd(dir.path())
        .arg("-running-config.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse -running-config.xml"))
        .stderr(predicate::str::contains("Usage:").not());
}

#[test]
fn missing_hostname_fails_without_output_file() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("nohost.xml");
    fs::write(
        &input,
        r#"<config><devices><entry name="localhost.localdomain"><network><interface><aggregate-ethernet>
<entry name="ae1"><layer3><units><entry name="ae1.100"><ip><entry name="10.0.0.1/24"/></ip><tag>100</tag></entry></units></layer3></entry>
</aggregate-ethernet></interface></network></entry></devices></config>"#,
    )
    .expect("input write");

    convert_cmd(dir.path())
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("hostname"));

    let written: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .collect();
    assert!(written.is_empty(), "unexpected output files: {written:?}");
}

#[test]
fn unreadable_input_fails_with_path_in_message() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("absent.xml");

    convert_cmd(dir.path())
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"))
        .stderr(predicate::str::contains("absent.xml"));
}

#[test]
fn malformed_xml_fails() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("broken.xml");
    fs::write(&input, "<config><hostname>fw</hostname>").expect("input write");

    convert_cmd(dir.path())
        .arg(path_as_str(&input))
        .assert()
        .failure();

    assert!(!dir.path().join("fw.txt").exists());
}
