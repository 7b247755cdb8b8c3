// crates/cwmp-rs/tests/schema.rs

//! Consistency checks over the static metadata of the whole `Device.` tree.

use cwmp_rs::tr181::Device;
use cwmp_rs::tr181::dhcpv4::Pool;
use cwmp_rs::tr181::ethernet::Interface;
use cwmp_rs::tr196::cell_config::PlmnList;
use cwmp_rs::tr181::mqtt::broker::Server;
use cwmp_rs::{
    Access, ActiveNotify, CwmpObject, DateTime, ObjectInfo, ObjectPath, ParameterInfo,
    ParameterKind, ParameterType,
};
use std::collections::HashSet;

fn all_objects() -> Vec<&'static ObjectInfo> {
    let mut objects = Vec::new();
    Device::info().walk(&mut |object| objects.push(object));
    objects
}

/// Parses a string with the parser matching the parameter's base type.
fn parses_as(kind: ParameterKind, value: &str) -> bool {
    match kind {
        ParameterKind::Boolean => bool::from_cwmp_str(value).is_ok(),
        ParameterKind::Int => i32::from_cwmp_str(value).is_ok(),
        ParameterKind::UnsignedInt => u32::from_cwmp_str(value).is_ok(),
        ParameterKind::Long => i64::from_cwmp_str(value).is_ok(),
        ParameterKind::UnsignedLong => u64::from_cwmp_str(value).is_ok(),
        ParameterKind::DateTime => DateTime::from_cwmp_str(value).is_ok(),
        ParameterKind::String | ParameterKind::Base64 | ParameterKind::HexBinary => true,
    }
}

fn is_integer(kind: ParameterKind) -> bool {
    matches!(
        kind,
        ParameterKind::Int
            | ParameterKind::UnsignedInt
            | ParameterKind::Long
            | ParameterKind::UnsignedLong
    )
}

#[test]
fn test_every_object_path_parses() {
    for object in all_objects() {
        let path = ObjectPath::parse(object.path)
            .unwrap_or_else(|e| panic!("{} does not parse: {}", object.path, e));
        assert_eq!(path.to_string(), object.path);
        assert_eq!(object.is_multi_instance(), object.path.ends_with(".{i}."));
    }
}

#[test]
fn test_child_paths_extend_parent_path() {
    for parent in all_objects() {
        for child in parent.children {
            let info = child.object();
            let expected = if child.multi_instance {
                format!("{}{}.{{i}}.", parent.path, child.name)
            } else {
                format!("{}{}.", parent.path, child.name)
            };
            assert_eq!(info.path, expected, "child {} of {}", child.name, parent.path);
            assert_eq!(info.is_multi_instance(), child.multi_instance);
            assert_eq!(info.name(), child.name);
        }
    }
}

#[test]
fn test_names_are_unique_per_object() {
    for object in all_objects() {
        let mut names = HashSet::new();
        for parameter in object.parameters {
            assert!(
                names.insert(parameter.name),
                "duplicate parameter {}{}",
                object.path,
                parameter.name
            );
        }
        for child in object.children {
            assert!(
                names.insert(child.name),
                "duplicate name {}{}",
                object.path,
                child.name
            );
        }
    }
}

#[test]
fn test_table_counters_exist_on_parent() {
    for parent in all_objects() {
        for child in parent.children.iter().filter(|c| c.multi_instance) {
            if let Some(counter) = child.object().num_entries_parameter {
                let parameter = parent.parameter(counter).unwrap_or_else(|| {
                    panic!("{} has no {} for {}", parent.path, counter, child.name)
                });
                assert_eq!(parameter.kind, ParameterKind::UnsignedInt);
                assert_eq!(parameter.access, Access::ReadOnly);
            }
        }
    }
}

#[test]
fn test_enable_and_unique_keys_name_own_parameters() {
    for object in all_objects() {
        if let Some(enable) = object.enable_parameter {
            assert!(
                object.parameter(enable).is_some(),
                "{} has no enable parameter {}",
                object.path,
                enable
            );
        }
        for key_set in object.unique_keys {
            for key in key_set.split(',').map(str::trim) {
                assert!(
                    object.parameter(key).is_some(),
                    "{} unique key {} is not a parameter",
                    object.path,
                    key
                );
            }
        }
        if !object.unique_keys.is_empty() {
            assert!(object.is_multi_instance(), "{} is not a table", object.path);
        }
    }
}

#[test]
fn test_defaults_are_valid_values() {
    let check = |object: &ObjectInfo, parameter: &ParameterInfo| {
        let Some(default) = parameter.default_value else {
            return;
        };
        assert!(
            parses_as(parameter.kind, default),
            "default of {}{} does not parse as {}",
            object.path,
            parameter.name,
            parameter.kind
        );
        assert!(
            parameter.allows_value(default),
            "default of {}{} is not an enumerated value",
            object.path,
            parameter.name
        );
        if let (Some(range), true) = (parameter.range, is_integer(parameter.kind)) {
            let value: i64 = default.parse().expect("integer default");
            assert!(
                range.contains(value),
                "default of {}{} is out of range",
                object.path,
                parameter.name
            );
        }
    };
    for object in all_objects() {
        for parameter in object.parameters {
            check(object, parameter);
        }
    }
}

#[test]
fn test_table_bounds() {
    let pool = Pool::info();
    assert_eq!(pool.min_entries, 0);
    assert_eq!(pool.max_entries, None);
    assert_eq!(pool.access, Access::ReadWrite);
    assert_eq!(pool.num_entries_parameter, Some("PoolNumberOfEntries"));
    assert_eq!(pool.unique_keys, &["Alias", "Order"]);

    assert_eq!(PlmnList::info().max_entries, Some(6));
    assert_eq!(Server::info().min_entries, 1);
    assert_eq!(Interface::info().access, Access::ReadOnly);

    let device = Device::info();
    assert_eq!(device.min_entries, 1);
    assert_eq!(device.max_entries, Some(1));
}

#[test]
fn test_parameter_metadata() {
    let pool = Pool::info();

    let lease_time = pool.parameter("LeaseTime").expect("LeaseTime");
    assert_eq!(lease_time.kind, ParameterKind::Int);
    assert_eq!(lease_time.kind.xsd_type(), "xsd:int");
    assert_eq!(lease_time.units, Some("seconds"));
    assert_eq!(lease_time.default_value, Some("86400"));
    assert_eq!(lease_time.range.and_then(|r| r.min), Some(-1));
    assert!(lease_time.is_writable());

    let status = pool.parameter("Status").expect("Status");
    assert!(!status.is_writable());
    assert!(status.allows_value("Error_Misconfigured"));
    assert!(!status.allows_value("Up"));

    let min_address = pool.parameter("MinAddress").expect("MinAddress");
    assert_eq!(min_address.data_type, Some("IPv4Address"));
    assert_eq!(min_address.kind, ParameterKind::String);

    let dns = pool.parameter("DNSServers").expect("DNSServers");
    assert!(dns.list);
    assert_eq!(dns.size.and_then(|s| s.max), Some(4));

    let mac = Interface::info().parameter("MACAddress").expect("MACAddress");
    assert_eq!(mac.data_type, Some("MACAddress"));

    let ms = cwmp_rs::tr181::ManagementServer::info();
    let password = ms.parameter("Password").expect("Password");
    assert!(password.hidden);
    let url = ms.parameter("ConnectionRequestURL").expect("ConnectionRequestURL");
    assert_eq!(url.notify, ActiveNotify::ForceDefaultEnabled);
}

#[test]
fn test_parameter_paths_cover_all_models() {
    let paths = Device::info().parameter_paths();
    for expected in [
        "Device.RootDataModelVersion",
        "Device.DHCPv4.Server.Pool.{i}.StaticAddress.{i}.Chaddr",
        "Device.BulkData.Profile.{i}.HTTP.RequestURIParameter.{i}.Reference",
        "Device.MQTT.Broker.{i}.Bridge.{i}.Subscription.{i}.Topic",
        "Device.MQTT.Client.{i}.Stats.PublishSent",
        "Device.Ethernet.Link.{i}.Stats.BytesSent",
        "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.SIP.AuthPassword",
        "Device.Services.FAPService.{i}.CellConfig.LTE.EPC.PLMNList.{i}.PLMNID",
        "Device.Services.FAPService.{i}.REM.LTE.Cell.{i}.RF.RSRP",
        "Device.Services.FAPService.{i}.Transport.SCTP.Assoc.{i}.Status",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
    }

    let unique: HashSet<&String> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());
}
