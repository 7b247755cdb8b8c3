// crates/cwmp-rs/src/tr196/transport.rs

//! `FAPService.{i}.Transport.`: the SCTP stack carrying S1-AP.

use crate::CwmpObject;
use crate::types::{DateTime, IpAddress};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Transport", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.Transport.")]
pub struct Transport {
    #[serde(rename = "SCTP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub sctp: Option<Sctp>,
}

/// SCTP protocol parameters (RFC 4960) and counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "SCTP", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.Transport.SCTP.")]
pub struct Sctp {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "HBInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "seconds", default = "30")]
    pub hb_interval: Option<u32>,
    #[serde(rename = "MaxAssociationRetransmits", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "10")]
    pub max_association_retransmits: Option<u32>,
    #[serde(rename = "MaxInitRetransmits", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "8")]
    pub max_init_retransmits: Option<u32>,
    #[serde(rename = "MaxPathRetransmits", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "5")]
    pub max_path_retransmits: Option<u32>,
    #[serde(rename = "RTOInitial", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "milliseconds", default = "3000")]
    pub rto_initial: Option<u32>,
    #[serde(rename = "RTOMax", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "milliseconds", default = "60000")]
    pub rto_max: Option<u32>,
    #[serde(rename = "RTOMin", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "milliseconds", default = "1000")]
    pub rto_min: Option<u32>,
    #[serde(rename = "ValCookieLife", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "milliseconds", default = "60000")]
    pub val_cookie_life: Option<u32>,
    #[serde(rename = "OutOfBlues", skip_serializing_if = "Option::is_none")]
    pub out_of_blues: Option<u32>,
    #[serde(rename = "ChecksumErrors", skip_serializing_if = "Option::is_none")]
    pub checksum_errors: Option<u32>,
    #[serde(rename = "OutCtrlChunks", skip_serializing_if = "Option::is_none")]
    pub out_ctrl_chunks: Option<u32>,
    #[serde(rename = "OutOrderChunks", skip_serializing_if = "Option::is_none")]
    pub out_order_chunks: Option<u32>,
    #[serde(rename = "OutUnorderChunks", skip_serializing_if = "Option::is_none")]
    pub out_unorder_chunks: Option<u32>,
    #[serde(rename = "InCtrlChunks", skip_serializing_if = "Option::is_none")]
    pub in_ctrl_chunks: Option<u32>,
    #[serde(rename = "InOrderChunks", skip_serializing_if = "Option::is_none")]
    pub in_order_chunks: Option<u32>,
    #[serde(rename = "InUnorderChunks", skip_serializing_if = "Option::is_none")]
    pub in_unorder_chunks: Option<u32>,
    #[serde(rename = "FragUsrMsgs", skip_serializing_if = "Option::is_none")]
    pub frag_usr_msgs: Option<u32>,
    #[serde(rename = "ReasmUsrMsgs", skip_serializing_if = "Option::is_none")]
    pub reasm_usr_msgs: Option<u32>,
    #[serde(rename = "OutSCTPPacks", skip_serializing_if = "Option::is_none")]
    pub out_sctp_packs: Option<u32>,
    #[serde(rename = "InSCTPPacks", skip_serializing_if = "Option::is_none")]
    pub in_sctp_packs: Option<u32>,
    /// Time of the last counter discontinuity (e.g. a restart of the stack).
    #[serde(rename = "Discontinuity", skip_serializing_if = "Option::is_none")]
    pub discontinuity: Option<DateTime>,
    #[serde(rename = "AssocNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub assoc_number_of_entries: Option<u32>,

    #[serde(rename = "Assoc", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub assocs: Vec<Assoc>,
}

/// An SCTP association to a peer (typically an MME).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Assoc", default)]
#[cwmp(
    path = "Device.Services.FAPService.{i}.Transport.SCTP.Assoc.{i}.",
    num_entries = "AssocNumberOfEntries",
    unique_key = "PrimaryPeerAddress, LocalPort"
)]
pub struct Assoc {
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Disabled|Active|Progressing|ShuttingDown")]
    pub status: Option<String>,
    #[serde(rename = "PrimaryPeerAddress", skip_serializing_if = "Option::is_none")]
    pub primary_peer_address: Option<IpAddress>,
    #[serde(rename = "LocalPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(max = 65535)]
    pub local_port: Option<u32>,
    #[serde(rename = "InStreams", skip_serializing_if = "Option::is_none")]
    pub in_streams: Option<u32>,
    #[serde(rename = "OutStreams", skip_serializing_if = "Option::is_none")]
    pub out_streams: Option<u32>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime>,
    #[serde(rename = "Discontinuity", skip_serializing_if = "Option::is_none")]
    pub discontinuity: Option<DateTime>,
}
