// crates/cwmp-rs/src/tr181/device.rs

//! The `Device.` root object.

use super::{BulkData, DeviceInfo, Dhcpv4, Ethernet, ManagementServer, Mqtt, Services, Time};
use crate::CwmpObject;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Root of the TR-181 `Device:2` data model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Device", default)]
#[cwmp(path = "Device.")]
pub struct Device {
    /// Root data model version, e.g. `2.15`.
    #[serde(rename = "RootDataModelVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 32)]
    pub root_data_model_version: Option<String>,
    #[serde(rename = "InterfaceStackNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub interface_stack_number_of_entries: Option<u32>,

    #[serde(rename = "Services", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub services: Option<Services>,
    #[serde(rename = "DeviceInfo", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub device_info: Option<DeviceInfo>,
    #[serde(rename = "ManagementServer", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub management_server: Option<ManagementServer>,
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub time: Option<Time>,
    #[serde(rename = "Ethernet", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub ethernet: Option<Ethernet>,
    #[serde(rename = "DHCPv4", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub dhcpv4: Option<Dhcpv4>,
    #[serde(rename = "BulkData", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub bulk_data: Option<BulkData>,
    #[serde(rename = "MQTT", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub mqtt: Option<Mqtt>,
}
