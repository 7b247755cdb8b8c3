// crates/cwmp-rs/src/tr104/capabilities.rs

//! `VoiceService.{i}.Capabilities.`: what the voice implementation supports.

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Capabilities", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.Capabilities.")]
pub struct Capabilities {
    #[serde(rename = "MaxProfileCount", skip_serializing_if = "Option::is_none")]
    pub max_profile_count: Option<u32>,
    #[serde(rename = "MaxLineCount", skip_serializing_if = "Option::is_none")]
    pub max_line_count: Option<u32>,
    #[serde(rename = "MaxSessionsPerLine", skip_serializing_if = "Option::is_none")]
    pub max_sessions_per_line: Option<u32>,
    #[serde(rename = "MaxSessionCount", skip_serializing_if = "Option::is_none")]
    pub max_session_count: Option<u32>,
    #[serde(rename = "SignalingProtocols", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 256)]
    pub signaling_protocols: Option<String>,
    /// ISO 3166-1 alpha-2 country codes.
    #[serde(rename = "Regions", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 256)]
    pub regions: Option<String>,
    #[serde(rename = "RTCP", skip_serializing_if = "Option::is_none")]
    pub rtcp: Option<bool>,
    #[serde(rename = "SRTP", skip_serializing_if = "Option::is_none")]
    pub srtp: Option<bool>,
    #[serde(rename = "RTPRedundancy", skip_serializing_if = "Option::is_none")]
    pub rtp_redundancy: Option<bool>,
    #[serde(rename = "DSCPCoupled", skip_serializing_if = "Option::is_none")]
    pub dscp_coupled: Option<bool>,
    #[serde(rename = "EthernetTaggingCoupled", skip_serializing_if = "Option::is_none")]
    pub ethernet_tagging_coupled: Option<bool>,
    #[serde(rename = "PSTNSoftSwitchOver", skip_serializing_if = "Option::is_none")]
    pub pstn_soft_switch_over: Option<bool>,
    #[serde(rename = "FaxT38", skip_serializing_if = "Option::is_none")]
    pub fax_t38: Option<bool>,
    #[serde(rename = "FaxPassThrough", skip_serializing_if = "Option::is_none")]
    pub fax_pass_through: Option<bool>,
    #[serde(rename = "ModemPassThrough", skip_serializing_if = "Option::is_none")]
    pub modem_pass_through: Option<bool>,
    #[serde(rename = "ToneGeneration", skip_serializing_if = "Option::is_none")]
    pub tone_generation: Option<bool>,
    #[serde(rename = "RingGeneration", skip_serializing_if = "Option::is_none")]
    pub ring_generation: Option<bool>,
    #[serde(rename = "DigitMap", skip_serializing_if = "Option::is_none")]
    pub digit_map: Option<bool>,
    #[serde(rename = "NumberingPlan", skip_serializing_if = "Option::is_none")]
    pub numbering_plan: Option<bool>,
    #[serde(rename = "ButtonMap", skip_serializing_if = "Option::is_none")]
    pub button_map: Option<bool>,
    #[serde(rename = "VoicePortTests", skip_serializing_if = "Option::is_none")]
    pub voice_port_tests: Option<bool>,
    #[serde(rename = "CodecNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub codec_number_of_entries: Option<u32>,

    #[serde(rename = "SIP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub sip: Option<SipCapabilities>,
    #[serde(rename = "Codec", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub codecs: Vec<Codec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "SIP", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.Capabilities.SIP.")]
pub struct SipCapabilities {
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "UserAgent|BackToBackUserAgents|OutboundProxy")]
    pub role: Option<String>,
    #[serde(rename = "Extensions", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 256)]
    pub extensions: Option<String>,
    #[serde(rename = "Transports", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "UDP|TCP|TLS|SCTP")]
    pub transports: Option<String>,
    #[serde(rename = "URISchemes", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 256)]
    pub uri_schemes: Option<String>,
    #[serde(rename = "EventSubscription", skip_serializing_if = "Option::is_none")]
    pub event_subscription: Option<bool>,
    #[serde(rename = "ResponseMap", skip_serializing_if = "Option::is_none")]
    pub response_map: Option<bool>,
    #[serde(rename = "TLSAuthenticationProtocols", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "Null|MD5|SHA-1")]
    pub tls_authentication_protocols: Option<String>,
    #[serde(rename = "TLSEncryptionProtocols", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "Null|RC4|RC2|DES|3DES")]
    pub tls_encryption_protocols: Option<String>,
}

/// A codec the device implements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Codec", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.Capabilities.Codec.{i}.",
    num_entries = "CodecNumberOfEntries",
    unique_key = "EntryID"
)]
pub struct Codec {
    #[serde(rename = "EntryID", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = 1)]
    pub entry_id: Option<u32>,
    #[serde(rename = "Codec", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64, values = "G.711MuLaw|G.711ALaw|G.726|G.729|G.729a|G.729e|G.728|G.723.1|G.722|G.722.1|G.722.2|GSM-FR|GSM-HR|GSM-EFR|iLBC")]
    pub codec: Option<String>,
    #[serde(rename = "BitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "bits per second")]
    pub bit_rate: Option<u32>,
    /// Supported packetization periods in milliseconds, e.g. `10,20,30`.
    #[serde(rename = "PacketizationPeriod", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, max_size = 64)]
    pub packetization_period: Option<String>,
    #[serde(rename = "SilenceSuppression", skip_serializing_if = "Option::is_none")]
    pub silence_suppression: Option<bool>,
}
