// crates/cwmp-rs/src/tr181/mqtt/broker.rs

//! `Device.MQTT.Broker.{i}.` and its bridges to other brokers.

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// An MQTT broker running on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Broker", default)]
#[cwmp(
    path = "Device.MQTT.Broker.{i}.",
    access = "readWrite",
    num_entries = "BrokerNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct Broker {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Disabled|Enabled|Error_Misconfigured|Error", default = "Disabled")]
    pub status: Option<String>,
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "1883")]
    pub port: Option<u32>,
    /// Path reference to the IP interface the broker listens on. Empty means all.
    #[serde(rename = "Interface", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub interface: Option<String>,
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub password: Option<String>,
    #[serde(rename = "BridgeNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub bridge_number_of_entries: Option<u32>,

    #[serde(rename = "Bridge", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub bridges: Vec<Bridge>,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub stats: Option<Stats>,
}

/// A bridge forwarding topics between this broker and a remote one.
///
/// `ServerConnection` names the [`Server`] instance in use by path; it is
/// resolved by the agent, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Bridge", default)]
#[cwmp(
    path = "Device.MQTT.Broker.{i}.Bridge.{i}.",
    access = "readWrite",
    num_entries = "BridgeNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct Bridge {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        values = "Disabled|Connecting|Connected|Error_Misconfigured|Error_BrokerUnreachable|Error",
        default = "Disabled"
    )]
    pub status: Option<String>,
    #[serde(rename = "ClientID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 23)]
    pub client_id: Option<String>,
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub password: Option<String>,
    #[serde(rename = "TransportProtocol", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "TCP/IP|TLS|WebSocket", default = "TCP/IP")]
    pub transport_protocol: Option<String>,
    #[serde(rename = "ProtocolVersion", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "3.1|3.1.1|5.0", default = "3.1")]
    pub protocol_version: Option<String>,
    #[serde(rename = "CleanSession", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "true")]
    pub clean_session: Option<bool>,
    #[serde(rename = "MessageRetryTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds", default = "5")]
    pub message_retry_time: Option<u32>,
    #[serde(rename = "KeepAliveTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535, units = "seconds", default = "60")]
    pub keep_alive_time: Option<u32>,
    #[serde(rename = "ServerSelectionAlgorithm", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Priority|RoundRobin|Random", default = "Priority")]
    pub server_selection_algorithm: Option<String>,
    #[serde(rename = "ServerConnection", skip_serializing_if = "Option::is_none")]
    pub server_connection: Option<String>,
    #[serde(rename = "ServerNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub server_number_of_entries: Option<u32>,
    #[serde(rename = "SubscriptionNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub subscription_number_of_entries: Option<u32>,

    #[serde(rename = "Server", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub servers: Vec<Server>,
    #[serde(rename = "Subscription", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub subscriptions: Vec<Subscription>,
}

/// A remote broker a bridge can connect to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Server", default)]
#[cwmp(
    path = "Device.MQTT.Broker.{i}.Bridge.{i}.Server.{i}.",
    access = "readWrite",
    min_entries = 1,
    num_entries = "ServerNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Address, Port"
)]
pub struct Server {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub priority: Option<u32>,
    /// Used by `Random` selection among servers of equal priority. `-1` when unused.
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, max = 65535)]
    pub weight: Option<i64>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub address: Option<String>,
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "1883")]
    pub port: Option<u32>,
}

/// A topic forwarded over a bridge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Subscription", default)]
#[cwmp(
    path = "Device.MQTT.Broker.{i}.Bridge.{i}.Subscription.{i}.",
    access = "readWrite",
    num_entries = "SubscriptionNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Topic, Direction"
)]
pub struct Subscription {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Enabled|Disabled|Error", default = "Disabled")]
    pub status: Option<String>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Topic", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub topic: Option<String>,
    #[serde(rename = "Direction", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "out|in|both", default = "out")]
    pub direction: Option<String>,
    #[serde(rename = "QoSLevel", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 2, default = "0")]
    pub qos_level: Option<u32>,
    #[serde(rename = "LocalPrefix", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub local_prefix: Option<String>,
    #[serde(rename = "RemotePrefix", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub remote_prefix: Option<String>,
}

/// Broker throughput counters. They reset when the broker is restarted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Stats", default)]
#[cwmp(path = "Device.MQTT.Broker.{i}.Stats.")]
pub struct Stats {
    #[serde(rename = "TotalNumberOfClients", skip_serializing_if = "Option::is_none")]
    pub total_number_of_clients: Option<u32>,
    #[serde(rename = "NumberOfActiveClients", skip_serializing_if = "Option::is_none")]
    pub number_of_active_clients: Option<u32>,
    #[serde(rename = "NumberOfInactiveClients", skip_serializing_if = "Option::is_none")]
    pub number_of_inactive_clients: Option<u32>,
    #[serde(rename = "Subscriptions", skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<u32>,
    #[serde(rename = "PublishSent", skip_serializing_if = "Option::is_none")]
    pub publish_sent: Option<u64>,
    #[serde(rename = "PublishReceived", skip_serializing_if = "Option::is_none")]
    pub publish_received: Option<u64>,
    #[serde(rename = "MQTTMessagesSent", skip_serializing_if = "Option::is_none")]
    pub mqtt_messages_sent: Option<u64>,
    #[serde(rename = "MQTTMessagesReceived", skip_serializing_if = "Option::is_none")]
    pub mqtt_messages_received: Option<u64>,
    #[serde(rename = "ConnectionErrors", skip_serializing_if = "Option::is_none")]
    pub connection_errors: Option<u32>,
    #[serde(rename = "PublishErrors", skip_serializing_if = "Option::is_none")]
    pub publish_errors: Option<u32>,
}
