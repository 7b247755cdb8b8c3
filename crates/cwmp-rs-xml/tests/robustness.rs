//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure malformed documents and values that do not fit the
//! field types are reported as errors without panicking.

use cwmp_rs::tr181::Device;
use cwmp_rs::tr181::dhcpv4::{Pool, StaticAddress};
use cwmp_rs::{CwmpObject, MacAddress};
use cwmp_rs_xml::{XmlError, load_object_from_str, save_object_to_string};

#[test]
fn test_empty_document() {
    let result = load_object_from_str::<Pool>("");
    assert!(matches!(result, Err(XmlError::EmptyDocument)));

    let result = load_object_from_str::<Pool>("  \r\n\t ");
    assert!(matches!(result, Err(XmlError::EmptyDocument)));
}

#[test]
fn test_malformed_xml() {
    let result = load_object_from_str::<Pool>("<Pool><Enable>true</Enable>");
    assert!(matches!(result, Err(XmlError::XmlParsing(_))));

    let result = load_object_from_str::<Pool>("<Pool><Enable>true</Alias></Pool>");
    assert!(matches!(result, Err(XmlError::XmlParsing(_))));
}

#[test]
fn test_values_not_matching_field_type() {
    for xml in [
        "<Pool><Enable>maybe</Enable></Pool>",
        "<Pool><Order>-1</Order></Pool>",
        "<Pool><LeaseTime>forever</LeaseTime></Pool>",
        "<Pool><ClientID>XYZ</ClientID></Pool>",
        "<Pool><MinAddress>300.1.1.1</MinAddress></Pool>",
        "<Pool><StaticAddress><Chaddr>00:11:22</Chaddr></StaticAddress></Pool>",
    ] {
        let result = load_object_from_str::<Pool>(xml);
        assert!(
            matches!(result, Err(XmlError::XmlParsing(_))),
            "expected {} to be rejected, got {:?}",
            xml,
            result
        );
    }
}

#[test]
fn test_unknown_elements_are_skipped() {
    let xml = r#"<Pool>
  <X_EXAMPLE_VendorFlag>1</X_EXAMPLE_VendorFlag>
  <Enable>true</Enable>
  <X_EXAMPLE_Nested><Depth>2</Depth></X_EXAMPLE_Nested>
</Pool>"#;
    let pool: Pool = load_object_from_str(xml).expect("vendor extensions are ignored");
    assert_eq!(pool.enable, Some(true));
}

#[test]
fn test_root_name_is_not_checked() {
    let address: StaticAddress =
        load_object_from_str("<Entry><Alias>a</Alias></Entry>").expect("any root name");
    assert_eq!(address.alias.as_deref(), Some("a"));
}

#[test]
fn test_empty_root_gives_default_object() {
    let pool: Pool = load_object_from_str("<Pool/>").expect("empty object");
    assert_eq!(pool, Pool::default());
    assert!(pool.static_addresses.is_empty());
}

#[test]
fn test_interleaved_table_entries() {
    let xml = r#"<Pool>
  <StaticAddress><Chaddr>00:11:22:33:44:55</Chaddr></StaticAddress>
  <Option><Tag>6</Tag></Option>
  <Enable>true</Enable>
  <StaticAddress><Chaddr>AA:BB:CC:DD:EE:FF</Chaddr></StaticAddress>
</Pool>"#;
    let pool: Pool = load_object_from_str(xml).expect("interleaved tables");
    assert_eq!(pool.enable, Some(true));
    assert_eq!(pool.options.len(), 1);
    assert_eq!(pool.options[0].tag, Some(6));
    let chaddrs: Vec<Option<MacAddress>> =
        pool.static_addresses.iter().map(|a| a.chaddr).collect();
    assert_eq!(
        chaddrs,
        vec![
            Some(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55])),
            Some(MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])),
        ]
    );
}

#[test]
fn test_rejected_write_leaves_no_empty_elements() {
    let mut device = Device::default();
    assert!(
        device
            .set_parameter_value_at("Device.", "Device.Time.NoSuchParam", "x")
            .is_err()
    );
    assert!(
        device
            .set_parameter_value_at("Device.", "Device.DeviceInfo.Manufacturer", "ACME")
            .is_err()
    );
    let xml = save_object_to_string(&device).expect("serialize device");
    assert!(!xml.contains("<Time"), "{}", xml);
    assert!(!xml.contains("<DeviceInfo"), "{}", xml);
}
