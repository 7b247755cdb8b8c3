// crates/cwmp-rs/tests/parameters.rs

//! Walking populated trees and addressing parameters by path.

use cwmp_rs::tr181::Device;
use cwmp_rs::tr181::dhcpv4::{Dhcpv4, Pool, Server, StaticAddress};
use cwmp_rs::tr181::management_server::ManagementServer;
use cwmp_rs::{
    CwmpError, CwmpObject, MacAddress, ObjectInfo, ObjectPath, ParameterInfo, ParameterKind,
    ParameterVisitor,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_device() -> Device {
    let pool = Pool::default()
        .with_enable(true)
        .with_alias("lan")
        .with_lease_time(3600)
        .with_static_address(
            StaticAddress::default()
                .with_chaddr(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55])),
        )
        .with_static_address(
            StaticAddress::default()
                .with_enable(false)
                .with_chaddr(MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]))
                .with_yiaddr([192, 168, 1, 50]),
        );

    Device::default()
        .with_root_data_model_version("2.15")
        .with_dhcpv4(Dhcpv4::default().with_server(Server::default().with_pool(pool)))
        .with_management_server(
            ManagementServer::default()
                .with_url("https://acs.example.com/cwmp")
                .with_password("secret"),
        )
}

#[test]
fn test_parameter_values_use_instance_paths() {
    init_logger();
    let device = sample_device();
    let values = device.parameter_values("Device.");

    let find = |name: &str| {
        values
            .iter()
            .find(|v| v.name == name)
            .unwrap_or_else(|| panic!("{} not reported", name))
    };

    let version = find("Device.RootDataModelVersion");
    assert_eq!(version.value, "2.15");
    assert_eq!(version.kind, ParameterKind::String);

    let enable = find("Device.DHCPv4.Server.Pool.1.Enable");
    assert_eq!(enable.value, "true");
    assert_eq!(enable.kind, ParameterKind::Boolean);

    assert_eq!(find("Device.DHCPv4.Server.Pool.1.LeaseTime").value, "3600");
    assert_eq!(
        find("Device.DHCPv4.Server.Pool.1.StaticAddress.2.Chaddr").value,
        "AA:BB:CC:DD:EE:FF"
    );
    assert_eq!(
        find("Device.DHCPv4.Server.Pool.1.StaticAddress.2.Yiaddr").value,
        "192.168.1.50"
    );

    // Unset parameters are not reported.
    assert!(
        values
            .iter()
            .all(|v| v.name != "Device.DHCPv4.Server.Pool.1.StaticAddress.1.Yiaddr")
    );
}

#[test]
fn test_hidden_parameter_reads_empty() {
    let device = sample_device();
    assert_eq!(
        device.parameter_value("Device.", "Device.ManagementServer.Password"),
        Some(String::new())
    );
    assert_eq!(
        device.parameter_value("Device.", "Device.ManagementServer.URL"),
        Some("https://acs.example.com/cwmp".to_string())
    );
    assert_eq!(
        device.parameter_value("Device.", "Device.ManagementServer.Username"),
        None
    );
}

#[test]
fn test_set_by_path() {
    init_logger();
    let mut device = sample_device();

    device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.1.Enable", "false")
        .expect("Enable is writable");
    device
        .set_parameter_value_at(
            "Device.",
            "Device.DHCPv4.Server.Pool.1.StaticAddress.1.Yiaddr",
            "192.168.1.10",
        )
        .expect("Yiaddr is writable");
    device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.1.LeaseTime", "-1")
        .expect("LeaseTime is writable");

    let pool = &device.dhcpv4.as_ref().unwrap().server.as_ref().unwrap().pools[0];
    assert_eq!(pool.enable, Some(false));
    assert_eq!(pool.lease_time, Some(-1));
    assert_eq!(
        pool.static_addresses[0].yiaddr.map(|a| a.to_string()),
        Some("192.168.1.10".to_string())
    );
}

#[test]
fn test_set_creates_missing_single_objects() {
    let mut device = Device::default();
    device
        .set_parameter_value_at("Device.", "Device.Time.NTPServer1", "ntp.example.com")
        .expect("NTPServer1 is writable");
    assert_eq!(
        device.time.as_ref().and_then(|t| t.ntp_server1.as_deref()),
        Some("ntp.example.com")
    );
}

#[test]
fn test_set_relative_to_sub_object() {
    let mut pool = Pool::default().with_static_address(StaticAddress::default());
    pool.set_parameter_value("StaticAddress.1.Chaddr", "00-11-22-33-44-55")
        .expect("Chaddr is writable");
    assert_eq!(
        pool.static_addresses[0].chaddr,
        Some(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]))
    );
}

#[test]
fn test_set_errors() {
    init_logger();
    let mut device = sample_device();

    let err = device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.1.Status", "Enabled")
        .unwrap_err();
    assert!(matches!(err, CwmpError::NotWritable(_)), "{:?}", err);

    let err = device
        .set_parameter_value_at(
            "Device.",
            "Device.DHCPv4.Server.Pool.1.StaticAddress.5.Enable",
            "true",
        )
        .unwrap_err();
    match err {
        CwmpError::NoSuchInstance { object, instance } => {
            assert_eq!(object, "StaticAddress");
            assert_eq!(instance, 5);
        }
        other => panic!("unexpected error {:?}", other),
    }

    let err = device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.1.Enable", "maybe")
        .unwrap_err();
    assert!(matches!(
        err,
        CwmpError::InvalidValue {
            kind: ParameterKind::Boolean,
            ..
        }
    ));

    let err = device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.1.LeaseTime", "forever")
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid xsd:int value: 'forever'");

    let err = device
        .set_parameter_value_at("Device.", "Device.Time.Bogus", "1")
        .unwrap_err();
    assert!(matches!(err, CwmpError::UnknownParameter(_)));
    assert!(device.time.is_none());

    let err = device
        .set_parameter_value_at("Device.", "Device.DeviceInfo.Manufacturer", "ACME")
        .unwrap_err();
    assert!(matches!(err, CwmpError::NotWritable(_)), "{:?}", err);
    assert!(device.device_info.is_none());

    let err = device
        .set_parameter_value_at("Device.", "Device.Bogus.Enable", "1")
        .unwrap_err();
    assert!(matches!(err, CwmpError::UnknownObject(ref name) if name == "Bogus"));

    let err = device
        .set_parameter_value_at("Device.", "Device.DHCPv4.Server.Pool.x.Enable", "1")
        .unwrap_err();
    assert!(matches!(err, CwmpError::InvalidPath { .. }));

    let err = device
        .set_parameter_value_at("Device.", "InternetGatewayDevice.Time.Enable", "1")
        .unwrap_err();
    assert!(matches!(err, CwmpError::InvalidPath { .. }));

    // Rejected writes leave the tree as it was.
    assert_eq!(device, sample_device());
}

/// Records every object instance path together with its template.
#[derive(Default)]
struct ObjectRecorder {
    objects: Vec<(String, &'static str)>,
    parameters: usize,
}

impl ParameterVisitor for ObjectRecorder {
    fn visit_object(&mut self, path: &str, info: &'static ObjectInfo) {
        self.objects.push((path.to_string(), info.path));
    }

    fn visit_parameter(
        &mut self,
        _path: &str,
        _info: &'static ParameterInfo,
        _value: Option<String>,
    ) {
        self.parameters += 1;
    }
}

#[test]
fn test_visited_instances_match_their_templates() {
    let device = sample_device();
    let mut recorder = ObjectRecorder::default();
    device.visit("Device.", &mut recorder);

    let paths: Vec<&str> = recorder.objects.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Device.",
            "Device.ManagementServer.",
            "Device.DHCPv4.",
            "Device.DHCPv4.Server.",
            "Device.DHCPv4.Server.Pool.1.",
            "Device.DHCPv4.Server.Pool.1.StaticAddress.1.",
            "Device.DHCPv4.Server.Pool.1.StaticAddress.2.",
        ]
    );

    for (instance, template) in &recorder.objects {
        let instance = ObjectPath::parse(instance).expect("instance path");
        let template = ObjectPath::parse(template).expect("template path");
        assert!(instance.matches(&template), "{} vs {}", instance, template);
        assert_eq!(instance.to_template(), template);
    }

    // Unset parameters are still visited.
    let expected = Device::info().parameters.len()
        + ManagementServer::info().parameters.len()
        + Dhcpv4::info().parameters.len()
        + Server::info().parameters.len()
        + Pool::info().parameters.len()
        + 2 * StaticAddress::info().parameters.len();
    assert_eq!(recorder.parameters, expected);
}
