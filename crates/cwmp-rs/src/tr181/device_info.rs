// crates/cwmp-rs/src/tr181/device_info.rs

//! `Device.DeviceInfo.` and its sub-objects.

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// General information about the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "DeviceInfo", default)]
#[cwmp(path = "Device.DeviceInfo.")]
pub struct DeviceInfo {
    #[serde(rename = "DeviceCategory", skip_serializing_if = "Option::is_none")]
    #[cwmp(list)]
    pub device_category: Option<String>,
    #[serde(rename = "Manufacturer", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub manufacturer: Option<String>,
    /// Organizationally unique identifier, six upper-case hex digits.
    #[serde(rename = "ManufacturerOUI", skip_serializing_if = "Option::is_none")]
    #[cwmp(min_size = 6, max_size = 6)]
    pub manufacturer_oui: Option<String>,
    #[serde(rename = "ModelName", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub model_name: Option<String>,
    #[serde(rename = "ModelNumber", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub model_number: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 256)]
    pub description: Option<String>,
    #[serde(rename = "ProductClass", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub product_class: Option<String>,
    #[serde(rename = "SerialNumber", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub serial_number: Option<String>,
    #[serde(rename = "HardwareVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64, notify = "forceEnabled")]
    pub hardware_version: Option<String>,
    #[serde(rename = "SoftwareVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64, notify = "forceEnabled")]
    pub software_version: Option<String>,
    #[serde(rename = "AdditionalHardwareVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 64)]
    pub additional_hardware_version: Option<String>,
    #[serde(rename = "AdditionalSoftwareVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 64)]
    pub additional_software_version: Option<String>,
    #[serde(rename = "ProvisioningCode", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64, notify = "forceEnabled")]
    pub provisioning_code: Option<String>,
    #[serde(rename = "UpTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "seconds", notify = "canDeny")]
    pub up_time: Option<u32>,
    #[serde(rename = "FirstUseDate", skip_serializing_if = "Option::is_none")]
    pub first_use_date: Option<DateTime>,
    #[serde(rename = "VendorConfigFileNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub vendor_config_file_number_of_entries: Option<u32>,

    #[serde(rename = "VendorConfigFile", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub vendor_config_files: Vec<VendorConfigFile>,
    #[serde(rename = "MemoryStatus", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub memory_status: Option<MemoryStatus>,
    #[serde(rename = "ProcessStatus", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub process_status: Option<ProcessStatus>,
}

/// A configuration file provided by the vendor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "VendorConfigFile", default)]
#[cwmp(
    path = "Device.DeviceInfo.VendorConfigFile.{i}.",
    num_entries = "VendorConfigFileNumberOfEntries",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct VendorConfigFile {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 16)]
    pub version: Option<String>,
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 256)]
    pub description: Option<String>,
    #[serde(rename = "UseForBackupRestore", skip_serializing_if = "Option::is_none")]
    pub use_for_backup_restore: Option<bool>,
}

/// Physical memory of the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "MemoryStatus", default)]
#[cwmp(path = "Device.DeviceInfo.MemoryStatus.")]
pub struct MemoryStatus {
    #[serde(rename = "Total", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "KiB")]
    pub total: Option<u32>,
    #[serde(rename = "Free", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "KiB", notify = "canDeny")]
    pub free: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "ProcessStatus", default)]
#[cwmp(path = "Device.DeviceInfo.ProcessStatus.")]
pub struct ProcessStatus {
    #[serde(rename = "CPUUsage", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "percent", max = 100, notify = "canDeny")]
    pub cpu_usage: Option<u32>,
    #[serde(rename = "ProcessNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub process_number_of_entries: Option<u32>,

    #[serde(rename = "Process", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub processes: Vec<Process>,
}

/// One running process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Process", default)]
#[cwmp(
    path = "Device.DeviceInfo.ProcessStatus.Process.{i}.",
    num_entries = "ProcessNumberOfEntries",
    unique_key = "PID"
)]
pub struct Process {
    #[serde(rename = "PID", skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(rename = "Command", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 256)]
    pub command: Option<String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "KiB")]
    pub size: Option<u32>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    #[cwmp(max = 99)]
    pub priority: Option<u32>,
    #[serde(rename = "CPUTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "milliseconds")]
    pub cpu_time: Option<u32>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Running|Sleeping|Stopped|Idle|Uninterruptible|Zombie")]
    pub state: Option<String>,
}
