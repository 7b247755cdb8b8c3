// crates/cwmp-rs/src/tr181/mqtt/mod.rs

//! `Device.MQTT.` (TR-181 MQTT:1): MQTT clients and brokers hosted on the
//! device.

pub mod broker;
pub mod client;

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use broker::Broker;
pub use client::Client;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "MQTT", default)]
#[cwmp(path = "Device.MQTT.")]
pub struct Mqtt {
    #[serde(rename = "ClientNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub client_number_of_entries: Option<u32>,
    #[serde(rename = "BrokerNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub broker_number_of_entries: Option<u32>,

    #[serde(rename = "Capabilities", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub capabilities: Option<Capabilities>,
    #[serde(rename = "Client", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub clients: Vec<Client>,
    #[serde(rename = "Broker", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub brokers: Vec<Broker>,
}

/// Limits of the device's MQTT implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Capabilities", default)]
#[cwmp(path = "Device.MQTT.Capabilities.")]
pub struct Capabilities {
    #[serde(rename = "ProtocolVersionsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "3.1|3.1.1|5.0")]
    pub protocol_versions_supported: Option<String>,
    #[serde(rename = "TransportProtocolSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "TCP/IP|TLS|WebSocket")]
    pub transport_protocol_supported: Option<String>,
    /// `0` means no limit.
    #[serde(rename = "MaxNumberOfClientSubscriptions", skip_serializing_if = "Option::is_none")]
    pub max_number_of_client_subscriptions: Option<u32>,
    #[serde(rename = "MaxNumberOfBrokerBridges", skip_serializing_if = "Option::is_none")]
    pub max_number_of_broker_bridges: Option<u32>,
    #[serde(
        rename = "MaxNumberOfBrokerBridgeSubscriptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_number_of_broker_bridge_subscriptions: Option<u32>,
}
