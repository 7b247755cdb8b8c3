// crates/cwmp-rs/src/tr104/voice_profile.rs

//! `VoiceService.{i}.VoiceProfile.{i}.`: signaling and media settings shared
//! by a group of lines.

use super::Line;
use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A voice profile. Lines of one profile share one SIP account context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "VoiceProfile", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.",
    access = "readWrite",
    num_entries = "VoiceProfileNumberOfEntries",
    enable = "Enable"
)]
pub struct VoiceProfile {
    /// `Quiescent` lets active sessions finish while refusing new ones.
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Disabled|Quiescent|Enabled")]
    pub enable: Option<String>,
    #[serde(rename = "Reset", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub reset: Option<bool>,
    #[serde(rename = "NumberOfLines", skip_serializing_if = "Option::is_none")]
    pub number_of_lines: Option<u32>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "SignalingProtocol", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub signaling_protocol: Option<String>,
    #[serde(rename = "MaxSessions", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub max_sessions: Option<u32>,
    #[serde(rename = "DTMFMethod", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "InBand|RFC2833|SIPInfo")]
    pub dtmf_method: Option<String>,
    #[serde(rename = "DTMFMethodG711", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "InBand|RFC2833|SIPInfo")]
    pub dtmf_method_g711: Option<String>,
    #[serde(rename = "Region", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 2)]
    pub region: Option<String>,
    #[serde(rename = "DigitMap", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub digit_map: Option<String>,
    #[serde(rename = "DigitMapEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub digit_map_enable: Option<bool>,
    #[serde(rename = "STUNEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub stun_enable: Option<bool>,
    #[serde(rename = "STUNServer", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub stun_server: Option<String>,
    #[serde(rename = "FaxPassThrough", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Disable|Auto|Force")]
    pub fax_pass_through: Option<String>,
    #[serde(rename = "ModemPassThrough", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Disable|Auto|Force")]
    pub modem_pass_through: Option<String>,

    #[serde(rename = "SIP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub sip: Option<Sip>,
    #[serde(rename = "RTP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub rtp: Option<Rtp>,
    #[serde(rename = "Line", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub lines: Vec<Line>,
}

/// SIP settings of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "SIP", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.SIP.")]
pub struct Sip {
    #[serde(rename = "ProxyServer", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub proxy_server: Option<String>,
    #[serde(rename = "ProxyServerPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535, default = "5060")]
    pub proxy_server_port: Option<u32>,
    #[serde(rename = "ProxyServerTransport", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "UDP|TCP|TLS|SCTP")]
    pub proxy_server_transport: Option<String>,
    #[serde(rename = "RegistrarServer", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub registrar_server: Option<String>,
    #[serde(rename = "RegistrarServerPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535, default = "5060")]
    pub registrar_server_port: Option<u32>,
    #[serde(rename = "RegistrarServerTransport", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "UDP|TCP|TLS|SCTP")]
    pub registrar_server_transport: Option<String>,
    #[serde(rename = "UserAgentDomain", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub user_agent_domain: Option<String>,
    #[serde(rename = "UserAgentPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub user_agent_port: Option<u32>,
    #[serde(rename = "UserAgentTransport", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "UDP|TCP|TLS|SCTP")]
    pub user_agent_transport: Option<String>,
    #[serde(rename = "OutboundProxy", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub outbound_proxy: Option<String>,
    #[serde(rename = "OutboundProxyPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535, default = "5060")]
    pub outbound_proxy_port: Option<u32>,
    #[serde(rename = "Organization", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub organization: Option<String>,
    #[serde(rename = "RegistrationPeriod", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds")]
    pub registration_period: Option<u32>,
    #[serde(rename = "RegisterExpires", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds")]
    pub register_expires: Option<u32>,
    #[serde(rename = "RegisterRetryInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds")]
    pub register_retry_interval: Option<u32>,
    #[serde(rename = "DSCPMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 63)]
    pub dscp_mark: Option<u32>,
    /// `-1` leaves the VLAN ID unset.
    #[serde(rename = "VLANIDMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, default = "-1")]
    pub vlan_id_mark: Option<i32>,
    #[serde(rename = "EthernetPriorityMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, default = "-1")]
    pub ethernet_priority_mark: Option<i32>,
    #[serde(rename = "InboundAuth", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "None|Digest")]
    pub inbound_auth: Option<String>,
    #[serde(rename = "InboundAuthUsername", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub inbound_auth_username: Option<String>,
    #[serde(rename = "InboundAuthPassword", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub inbound_auth_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RTP", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.RTP.")]
pub struct Rtp {
    #[serde(rename = "LocalPortMin", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub local_port_min: Option<u32>,
    #[serde(rename = "LocalPortMax", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub local_port_max: Option<u32>,
    #[serde(rename = "DSCPMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 63)]
    pub dscp_mark: Option<u32>,
    #[serde(rename = "VLANIDMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, default = "-1")]
    pub vlan_id_mark: Option<i32>,
    #[serde(rename = "EthernetPriorityMark", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, default = "-1")]
    pub ethernet_priority_mark: Option<i32>,
    #[serde(rename = "TelephoneEventPayloadType", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 128)]
    pub telephone_event_payload_type: Option<u32>,

    #[serde(rename = "RTCP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub rtcp: Option<Rtcp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RTCP", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.RTP.RTCP.")]
pub struct Rtcp {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "TxRepeatInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "milliseconds")]
    pub tx_repeat_interval: Option<u32>,
    #[serde(rename = "LocalCName", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub local_cname: Option<String>,
}
