// crates/cwmp-rs/src/tr181/ethernet.rs

//! `Device.Ethernet.`: physical Ethernet interfaces and the links layered on
//! them.

use crate::CwmpObject;
use crate::types::MacAddress;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Ethernet", default)]
#[cwmp(path = "Device.Ethernet.")]
pub struct Ethernet {
    #[serde(rename = "InterfaceNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub interface_number_of_entries: Option<u32>,
    #[serde(rename = "LinkNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub link_number_of_entries: Option<u32>,

    #[serde(rename = "Interface", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub interfaces: Vec<Interface>,
    #[serde(rename = "Link", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub links: Vec<Link>,
}

/// A physical Ethernet port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Interface", default)]
#[cwmp(
    path = "Device.Ethernet.Interface.{i}.",
    num_entries = "InterfaceNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct Interface {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        values = "Up|Down|Unknown|Dormant|NotPresent|LowerLayerDown|Error",
        default = "Down",
        notify = "forceDefaultEnabled"
    )]
    pub status: Option<String>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "LastChange", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "seconds", notify = "canDeny")]
    pub last_change: Option<u32>,
    #[serde(rename = "LowerLayers", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 1024)]
    pub lower_layers: Option<String>,
    #[serde(rename = "Upstream", skip_serializing_if = "Option::is_none")]
    pub upstream: Option<bool>,
    #[serde(rename = "MACAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<MacAddress>,
    /// `-1` means auto selection.
    #[serde(rename = "MaxBitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, units = "Mbps")]
    pub max_bit_rate: Option<i32>,
    #[serde(rename = "CurrentBitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "Mbps")]
    pub current_bit_rate: Option<u32>,
    #[serde(rename = "DuplexMode", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Half|Full|Auto")]
    pub duplex_mode: Option<String>,
    #[serde(rename = "EEECapability", skip_serializing_if = "Option::is_none")]
    pub eee_capability: Option<bool>,
    #[serde(rename = "EEEEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub eee_enable: Option<bool>,

    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub stats: Option<InterfaceStats>,
}

/// A layer 2 link on top of an interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Link", default)]
#[cwmp(
    path = "Device.Ethernet.Link.{i}.",
    access = "readWrite",
    num_entries = "LinkNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct Link {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        values = "Up|Down|Unknown|Dormant|NotPresent|LowerLayerDown|Error",
        default = "Down",
        notify = "forceDefaultEnabled"
    )]
    pub status: Option<String>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "LastChange", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "seconds", notify = "canDeny")]
    pub last_change: Option<u32>,
    #[serde(rename = "LowerLayers", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 1024)]
    pub lower_layers: Option<String>,
    #[serde(rename = "MACAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<MacAddress>,
    #[serde(rename = "PriorityTagging", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub priority_tagging: Option<bool>,

    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub stats: Option<LinkStats>,
}

// Interface and link counters have the same shape under different paths.
macro_rules! ethernet_stats {
    ($(#[$doc:meta])* $name:ident, $path:tt) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
        #[serde(rename = "Stats", default)]
        #[cwmp(path = $path)]
        pub struct $name {
            #[serde(rename = "BytesSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub bytes_sent: Option<u64>,
            #[serde(rename = "BytesReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub bytes_received: Option<u64>,
            #[serde(rename = "PacketsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub packets_sent: Option<u64>,
            #[serde(rename = "PacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub packets_received: Option<u64>,
            #[serde(rename = "ErrorsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub errors_sent: Option<u32>,
            #[serde(rename = "ErrorsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub errors_received: Option<u32>,
            #[serde(rename = "UnicastPacketsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub unicast_packets_sent: Option<u64>,
            #[serde(rename = "UnicastPacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub unicast_packets_received: Option<u64>,
            #[serde(rename = "DiscardPacketsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub discard_packets_sent: Option<u32>,
            #[serde(rename = "DiscardPacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub discard_packets_received: Option<u32>,
            #[serde(rename = "MulticastPacketsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub multicast_packets_sent: Option<u64>,
            #[serde(rename = "MulticastPacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub multicast_packets_received: Option<u64>,
            #[serde(rename = "BroadcastPacketsSent", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub broadcast_packets_sent: Option<u64>,
            #[serde(rename = "BroadcastPacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub broadcast_packets_received: Option<u64>,
            #[serde(rename = "UnknownProtoPacketsReceived", skip_serializing_if = "Option::is_none")]
            #[cwmp(notify = "canDeny")]
            pub unknown_proto_packets_received: Option<u32>,
        }
    };
}

ethernet_stats!(
    /// Counters of an Ethernet interface since it was last enabled.
    InterfaceStats,
    "Device.Ethernet.Interface.{i}.Stats."
);
ethernet_stats!(
    /// Counters of an Ethernet link since it was last enabled.
    LinkStats,
    "Device.Ethernet.Link.{i}.Stats."
);
