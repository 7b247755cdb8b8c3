// crates/cwmp-rs/src/tr181/management_server.rs

//! `Device.ManagementServer.`: the CPE side configuration of the ACS
//! connection.

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "ManagementServer", default)]
#[cwmp(path = "Device.ManagementServer.")]
pub struct ManagementServer {
    #[serde(rename = "EnableCWMP", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "true")]
    pub enable_cwmp: Option<bool>,
    /// ACS URL. Only `https` URLs allow certificate based authentication.
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub url: Option<String>,
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub password: Option<String>,
    #[serde(rename = "ScheduleReboot", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub schedule_reboot: Option<DateTime>,
    #[serde(rename = "DelayReboot", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, units = "seconds", default = "-1")]
    pub delay_reboot: Option<i32>,
    #[serde(rename = "PeriodicInformEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub periodic_inform_enable: Option<bool>,
    #[serde(rename = "PeriodicInformInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds")]
    pub periodic_inform_interval: Option<u32>,
    #[serde(rename = "PeriodicInformTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub periodic_inform_time: Option<DateTime>,
    #[serde(rename = "ParameterKey", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 32, notify = "canDeny")]
    pub parameter_key: Option<String>,
    #[serde(rename = "ConnectionRequestURL", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 256, notify = "forceDefaultEnabled")]
    pub connection_request_url: Option<String>,
    #[serde(rename = "ConnectionRequestUsername", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub connection_request_username: Option<String>,
    #[serde(rename = "ConnectionRequestPassword", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub connection_request_password: Option<String>,
    #[serde(rename = "UpgradesManaged", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub upgrades_managed: Option<bool>,
    #[serde(rename = "DefaultActiveNotificationThrottle", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "seconds")]
    pub default_active_notification_throttle: Option<u32>,
    #[serde(rename = "CWMPRetryMinimumWaitInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "5", units = "seconds")]
    pub cwmp_retry_minimum_wait_interval: Option<u32>,
    /// Retry back-off multiplier in thousandths (`2000` means 2.0).
    #[serde(rename = "CWMPRetryIntervalMultiplier", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1000, max = 65535, default = "2000")]
    pub cwmp_retry_interval_multiplier: Option<u32>,
    #[serde(rename = "ManageableDeviceNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub manageable_device_number_of_entries: Option<u32>,

    #[serde(rename = "ManageableDevice", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub manageable_devices: Vec<ManageableDevice>,
}

/// A device behind this CPE that is managed through it (TR-111).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "ManageableDevice", default)]
#[cwmp(
    path = "Device.ManagementServer.ManageableDevice.{i}.",
    num_entries = "ManageableDeviceNumberOfEntries",
    unique_key = "Alias",
    unique_key = "ManufacturerOUI, SerialNumber, ProductClass"
)]
pub struct ManageableDevice {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "ManufacturerOUI", skip_serializing_if = "Option::is_none")]
    #[cwmp(min_size = 6, max_size = 6)]
    pub manufacturer_oui: Option<String>,
    #[serde(rename = "SerialNumber", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub serial_number: Option<String>,
    #[serde(rename = "ProductClass", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub product_class: Option<String>,
    /// Path references to the `Device.Hosts.Host.{i}.` entries of this device.
    #[serde(rename = "Host", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 1024)]
    pub host: Option<String>,
}
