// crates/cwmp-rs-xml/tests/parsing.rs

use cwmp_rs::tr181::Device;
use cwmp_rs::tr181::dhcpv4::{Pool, StaticAddress};
use cwmp_rs::{CwmpObject, HexBinary, IpAddress, MacAddress, ParameterType};
use cwmp_rs_xml::{XmlOptions, load_object_from_str, save_object_to_string, save_object_to_string_with};
use std::fs;
use std::path::PathBuf;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

#[test]
fn test_load_pool() {
    init_logger();
    let xml = load_test_file("dhcpv4_pool.xml");
    let pool: Pool = load_object_from_str(&xml).expect("Failed to parse pool");

    assert_eq!(pool.enable, Some(true));
    assert_eq!(pool.status.as_deref(), Some("Enabled"));
    assert_eq!(pool.order, Some(1));
    assert_eq!(pool.client_id, Some(HexBinary(vec![0x01, 0xAB])));
    assert_eq!(pool.subnet_mask, Some(IpAddress::from([255, 255, 255, 0])));
    assert_eq!(pool.dns_servers.as_deref(), Some("192.168.1.1,8.8.8.8"));
    assert_eq!(pool.lease_time, Some(86400));
    // Not present in the document.
    assert_eq!(pool.vendor_class_id, None);

    assert_eq!(pool.static_addresses.len(), 2);
    assert_eq!(
        pool.static_addresses[1].chaddr,
        Some(MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]))
    );
    assert_eq!(pool.options.len(), 1);
    assert_eq!(pool.options[0].tag, Some(42));
    assert_eq!(pool.clients.len(), 1);

    let lease = &pool.clients[0].ipv4_addresses[0];
    assert_eq!(
        lease.lease_time_remaining.map(|t| t.to_cwmp_string()),
        Some("2024-05-01T10:30:00Z".to_string())
    );
}

#[test]
fn test_load_device_tree() {
    init_logger();
    let xml = load_test_file("device.xml");
    let device: Device = load_object_from_str(&xml).expect("Failed to parse device");

    assert_eq!(device.root_data_model_version.as_deref(), Some("2.15"));
    let broker = &device.mqtt.as_ref().expect("MQTT").brokers[0];
    assert_eq!(broker.port, Some(1883));
    assert_eq!(broker.bridges[0].servers.len(), 2);
    assert_eq!(broker.bridges[0].subscriptions.len(), 1);
    assert!(device.ethernet.is_none());

    // Loaded trees are addressable by instance path.
    assert_eq!(
        device.parameter_value("Device.", "Device.MQTT.Broker.1.Bridge.1.Server.2.Address"),
        Some("b.example.com".to_string())
    );
    assert_eq!(
        device.parameter_value(
            "Device.",
            "Device.Services.VoiceService.1.VoiceProfile.1.Line.1.DirectoryNumber"
        ),
        Some("+15551234567".to_string())
    );
    assert_eq!(
        device.parameter_value(
            "Device.",
            "Device.Services.VoiceService.1.VoiceProfile.1.Line.1.SIP.AuthPassword"
        ),
        Some(String::new())
    );
    assert_eq!(
        device.parameter_value("Device.", "Device.DeviceInfo.FirstUseDate"),
        Some("2024-01-15T08:00:00Z".to_string())
    );
}

/// Load, save and load again must give the same object tree.
#[test]
fn test_round_trip_fixtures() {
    init_logger();
    let pool: Pool = load_object_from_str(&load_test_file("dhcpv4_pool.xml")).unwrap();
    let saved = save_object_to_string(&pool).expect("Failed to save pool");
    let reloaded: Pool = load_object_from_str(&saved).expect("Failed to reload pool");
    assert_eq!(pool, reloaded);

    let device: Device = load_object_from_str(&load_test_file("device.xml")).unwrap();
    let saved = save_object_to_string(&device).expect("Failed to save device");
    let reloaded: Device = load_object_from_str(&saved).expect("Failed to reload device");
    assert_eq!(device, reloaded);
}

#[test]
fn test_saved_document_layout() {
    let pool = Pool::default()
        .with_enable(true)
        .with_chaddr(MacAddress::new([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]))
        .with_static_address(StaticAddress::default().with_alias("printer"));
    let xml = save_object_to_string(&pool).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<Pool>"));
    assert!(xml.contains("  <Enable>true</Enable>"));
    assert!(xml.contains("<Chaddr>00:1A:2B:3C:4D:5E</Chaddr>"));
    assert!(xml.contains("<StaticAddress>"));
    assert!(xml.contains("<Alias>printer</Alias>"));
    // Unset parameters and empty tables are omitted.
    assert!(!xml.contains("<Status>"));
    assert!(!xml.contains("<Option>"));
    assert!(!xml.contains("<Client>"));
}

#[test]
fn test_options_control_output() {
    let address = StaticAddress::default()
        .with_enable(true)
        .with_yiaddr([10, 0, 0, 5]);

    let xml = save_object_to_string_with(&address, &XmlOptions::compact()).unwrap();
    assert_eq!(
        xml,
        "<StaticAddress><Enable>true</Enable><Yiaddr>10.0.0.5</Yiaddr></StaticAddress>"
    );

    let options = XmlOptions::compact().with_root("Reservation");
    let xml = save_object_to_string_with(&address, &options).unwrap();
    assert!(xml.starts_with("<Reservation>"));

    let reloaded: StaticAddress = load_object_from_str(&xml).unwrap();
    assert_eq!(reloaded, address);
}
