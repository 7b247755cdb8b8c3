// crates/cwmp-rs/src/tr181/time.rs

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// `Device.Time.`: NTP client configuration and the local clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Time", default)]
#[cwmp(path = "Device.Time.")]
pub struct Time {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Disabled|Unsynchronized|Synchronized|Error_FailedToSynchronize|Error")]
    pub status: Option<String>,
    #[serde(rename = "NTPServer1", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub ntp_server1: Option<String>,
    #[serde(rename = "NTPServer2", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub ntp_server2: Option<String>,
    #[serde(rename = "NTPServer3", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub ntp_server3: Option<String>,
    #[serde(rename = "NTPServer4", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub ntp_server4: Option<String>,
    #[serde(rename = "NTPServer5", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub ntp_server5: Option<String>,
    #[serde(rename = "CurrentLocalTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(notify = "canDeny")]
    pub current_local_time: Option<DateTime>,
    /// POSIX TZ string, e.g. `EST+5EDT,M4.1.0/2,M10.5.0/2`.
    #[serde(rename = "LocalTimeZone", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub local_time_zone: Option<String>,
}
