// crates/cwmp-rs/src/tr104/line.rs

//! `VoiceProfile.{i}.Line.{i}.`: one telephone line (directory number) and
//! its per-line SIP credentials, codec selection and call statistics.

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Line", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.",
    access = "readWrite",
    num_entries = "NumberOfLines",
    enable = "Enable",
    unique_key = "DirectoryNumber"
)]
pub struct Line {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Disabled|Quiescent|Enabled")]
    pub enable: Option<String>,
    #[serde(rename = "DirectoryNumber", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 32)]
    pub directory_number: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        values = "Up|Initializing|Registering|Unregistering|Error|Testing|Quiescent|Disabled",
        notify = "forceDefaultEnabled"
    )]
    pub status: Option<String>,
    #[serde(rename = "CallState", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Idle|Calling|Ringing|Connecting|InCall|Hold|Disconnecting")]
    pub call_state: Option<String>,
    /// `InterfaceID`s of the physical interfaces this line rings.
    #[serde(rename = "PhyReferenceList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 32)]
    pub phy_reference_list: Option<String>,
    #[serde(rename = "RingMuteStatus", skip_serializing_if = "Option::is_none")]
    pub ring_mute_status: Option<bool>,
    #[serde(rename = "RingVolumeStatus", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "percent", max = 100)]
    pub ring_volume_status: Option<u32>,

    #[serde(rename = "SIP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub sip: Option<LineSip>,
    #[serde(rename = "Codec", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub codec: Option<LineCodec>,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub stats: Option<LineStats>,
}

/// Per-line SIP credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "SIP", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.SIP.")]
pub struct LineSip {
    #[serde(rename = "AuthUserName", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 128)]
    pub auth_user_name: Option<String>,
    #[serde(rename = "AuthPassword", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 128, hidden)]
    pub auth_password: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 389)]
    pub uri: Option<String>,
}

/// Codec currently in use on the line and the allowed codec list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Codec", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Codec.")]
pub struct LineCodec {
    #[serde(rename = "TransmitCodec", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub transmit_codec: Option<String>,
    #[serde(rename = "ReceiveCodec", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub receive_codec: Option<String>,
    #[serde(rename = "TransmitBitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "bits per second")]
    pub transmit_bit_rate: Option<u32>,
    #[serde(rename = "ReceiveBitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "bits per second")]
    pub receive_bit_rate: Option<u32>,
    #[serde(rename = "TransmitSilenceSuppression", skip_serializing_if = "Option::is_none")]
    pub transmit_silence_suppression: Option<bool>,
    #[serde(rename = "ReceiveSilenceSuppression", skip_serializing_if = "Option::is_none")]
    pub receive_silence_suppression: Option<bool>,
    #[serde(rename = "TransmitPacketizationPeriod", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "milliseconds")]
    pub transmit_packetization_period: Option<u32>,

    #[serde(rename = "List", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object, item = "codec_entry")]
    pub list: Vec<CodecEntry>,
}

/// One codec allowed on the line, ordered by `Priority` (1 is preferred).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "List", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Codec.List.{i}.",
    unique_key = "EntryID"
)]
pub struct CodecEntry {
    #[serde(rename = "EntryID", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = 1)]
    pub entry_id: Option<u32>,
    #[serde(rename = "Codec", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 64)]
    pub codec: Option<String>,
    #[serde(rename = "BitRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "bits per second")]
    pub bit_rate: Option<u32>,
    #[serde(rename = "PacketizationPeriod", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 64)]
    pub packetization_period: Option<String>,
    #[serde(rename = "SilenceSuppression", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub silence_suppression: Option<bool>,
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1)]
    pub priority: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Stats", default)]
#[cwmp(path = "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Stats.")]
pub struct LineStats {
    /// Command parameter. Writing `true` resets every counter of this object.
    #[serde(rename = "ResetStatistics", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub reset_statistics: Option<bool>,
    #[serde(rename = "PacketsSent", skip_serializing_if = "Option::is_none")]
    pub packets_sent: Option<u32>,
    #[serde(rename = "PacketsReceived", skip_serializing_if = "Option::is_none")]
    pub packets_received: Option<u32>,
    #[serde(rename = "BytesSent", skip_serializing_if = "Option::is_none")]
    pub bytes_sent: Option<u32>,
    #[serde(rename = "BytesReceived", skip_serializing_if = "Option::is_none")]
    pub bytes_received: Option<u32>,
    #[serde(rename = "PacketsLost", skip_serializing_if = "Option::is_none")]
    pub packets_lost: Option<u32>,
    #[serde(rename = "Overruns", skip_serializing_if = "Option::is_none")]
    pub overruns: Option<u32>,
    #[serde(rename = "Underruns", skip_serializing_if = "Option::is_none")]
    pub underruns: Option<u32>,
    #[serde(rename = "IncomingCallsReceived", skip_serializing_if = "Option::is_none")]
    pub incoming_calls_received: Option<u32>,
    #[serde(rename = "IncomingCallsAnswered", skip_serializing_if = "Option::is_none")]
    pub incoming_calls_answered: Option<u32>,
    #[serde(rename = "IncomingCallsConnected", skip_serializing_if = "Option::is_none")]
    pub incoming_calls_connected: Option<u32>,
    #[serde(rename = "IncomingCallsFailed", skip_serializing_if = "Option::is_none")]
    pub incoming_calls_failed: Option<u32>,
    #[serde(rename = "OutgoingCallsAttempted", skip_serializing_if = "Option::is_none")]
    pub outgoing_calls_attempted: Option<u32>,
    #[serde(rename = "OutgoingCallsAnswered", skip_serializing_if = "Option::is_none")]
    pub outgoing_calls_answered: Option<u32>,
    #[serde(rename = "OutgoingCallsConnected", skip_serializing_if = "Option::is_none")]
    pub outgoing_calls_connected: Option<u32>,
    #[serde(rename = "OutgoingCallsFailed", skip_serializing_if = "Option::is_none")]
    pub outgoing_calls_failed: Option<u32>,
    #[serde(rename = "CallsDropped", skip_serializing_if = "Option::is_none")]
    pub calls_dropped: Option<u32>,
    #[serde(rename = "TotalCallTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "seconds")]
    pub total_call_time: Option<u32>,
    #[serde(rename = "ReceivePacketLossRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "percent", max = 100)]
    pub receive_packet_loss_rate: Option<u32>,
    #[serde(rename = "FarEndPacketLossRate", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "percent", max = 100)]
    pub far_end_packet_loss_rate: Option<u32>,
    #[serde(rename = "ReceiveInterarrivalJitter", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub receive_interarrival_jitter: Option<u32>,
    #[serde(rename = "FarEndInterarrivalJitter", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub far_end_interarrival_jitter: Option<u32>,
    #[serde(rename = "RoundTripDelay", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub round_trip_delay: Option<u32>,
    #[serde(rename = "AverageReceiveInterarrivalJitter", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub average_receive_interarrival_jitter: Option<u32>,
    #[serde(rename = "AverageFarEndInterarrivalJitter", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub average_far_end_interarrival_jitter: Option<u32>,
    #[serde(rename = "AverageRoundTripDelay", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "microseconds")]
    pub average_round_trip_delay: Option<u32>,
}
