// crates/cwmp-rs/src/tr181/mqtt/client.rs

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// An MQTT client connection to an external broker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Client", default)]
#[cwmp(
    path = "Device.MQTT.Client.{i}.",
    access = "readWrite",
    num_entries = "ClientNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Name"
)]
pub struct Client {
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
    #[serde(rename = "Interface", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub interface: Option<String>,
    #[serde(rename = "ClientID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
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
    #[serde(rename = "ConnectRetryTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds", default = "5")]
    pub connect_retry_time: Option<u32>,
    #[serde(rename = "KeepAliveTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535, units = "seconds", default = "60")]
    pub keep_alive_time: Option<u32>,
    /// Command parameter: setting it to `true` drops and re-establishes the
    /// connection. Always reads back as `false`.
    #[serde(rename = "ForceReconnect", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub force_reconnect: Option<bool>,
    #[serde(rename = "BrokerAddress", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub broker_address: Option<String>,
    #[serde(rename = "BrokerPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "1883")]
    pub broker_port: Option<u32>,
    #[serde(rename = "WillEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub will_enable: Option<bool>,
    #[serde(rename = "WillTopic", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub will_topic: Option<String>,
    #[serde(rename = "WillValue", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub will_value: Option<String>,
    #[serde(rename = "WillQoS", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 2, default = "0")]
    pub will_qos: Option<u32>,
    #[serde(rename = "WillRetain", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub will_retain: Option<bool>,
    #[serde(rename = "SubscriptionNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub subscription_number_of_entries: Option<u32>,

    #[serde(rename = "Subscription", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub subscriptions: Vec<Subscription>,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub stats: Option<Stats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Subscription", default)]
#[cwmp(
    path = "Device.MQTT.Client.{i}.Subscription.{i}.",
    access = "readWrite",
    num_entries = "SubscriptionNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Topic"
)]
pub struct Subscription {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        values = "Unsubscribed|Subscribed|Subscribing|Unsubscribing|Error",
        default = "Unsubscribed"
    )]
    pub status: Option<String>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    /// Topic filter, may contain the `+` and `#` wildcards.
    #[serde(rename = "Topic", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub topic: Option<String>,
    #[serde(rename = "QoS", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 2, default = "0")]
    pub qos: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Stats", default)]
#[cwmp(path = "Device.MQTT.Client.{i}.Stats.")]
pub struct Stats {
    #[serde(rename = "BrokerConnectionEstablished", skip_serializing_if = "Option::is_none")]
    pub broker_connection_established: Option<DateTime>,
    #[serde(rename = "LastPublishMessageSent", skip_serializing_if = "Option::is_none")]
    pub last_publish_message_sent: Option<DateTime>,
    #[serde(rename = "LastPublishMessageReceived", skip_serializing_if = "Option::is_none")]
    pub last_publish_message_received: Option<DateTime>,
    #[serde(rename = "PublishSent", skip_serializing_if = "Option::is_none")]
    pub publish_sent: Option<u64>,
    #[serde(rename = "PublishReceived", skip_serializing_if = "Option::is_none")]
    pub publish_received: Option<u64>,
    #[serde(rename = "SubscribeSent", skip_serializing_if = "Option::is_none")]
    pub subscribe_sent: Option<u64>,
    #[serde(rename = "UnSubscribeSent", skip_serializing_if = "Option::is_none")]
    pub unsubscribe_sent: Option<u64>,
    #[serde(rename = "MQTTMessagesSent", skip_serializing_if = "Option::is_none")]
    pub mqtt_messages_sent: Option<u64>,
    #[serde(rename = "MQTTMessagesReceived", skip_serializing_if = "Option::is_none")]
    pub mqtt_messages_received: Option<u64>,
    #[serde(rename = "ConnectionErrors", skip_serializing_if = "Option::is_none")]
    pub connection_errors: Option<u32>,
    #[serde(rename = "PublishErrors", skip_serializing_if = "Option::is_none")]
    pub publish_errors: Option<u32>,
}
