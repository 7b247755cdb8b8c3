// crates/cwmp-rs/src/tr196/fap_control.rs

//! `FAPService.{i}.FAPControl.`: administrative state of the femto cell and
//! its core network gateways.

use crate::CwmpObject;
use alloc::string::String;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "FAPControl", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.FAPControl.")]
pub struct FapControl {
    #[serde(rename = "LTE", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub lte: Option<Lte>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "LTE", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.FAPControl.LTE.")]
pub struct Lte {
    /// Setting `true` allows the cell to start transmitting.
    #[serde(rename = "AdminState", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub admin_state: Option<bool>,
    #[serde(rename = "OpState", skip_serializing_if = "Option::is_none")]
    #[cwmp(notify = "forceDefaultEnabled")]
    pub op_state: Option<bool>,
    #[serde(rename = "RFTxStatus", skip_serializing_if = "Option::is_none")]
    #[cwmp(notify = "forceDefaultEnabled")]
    pub rf_tx_status: Option<bool>,
    #[serde(rename = "SelfConfigEvents", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list)]
    pub self_config_events: Option<String>,
    #[serde(rename = "EnclosingCellIdentity", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub enclosing_cell_identity: Option<String>,

    #[serde(rename = "Gateway", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub gateway: Option<Gateway>,
}

/// Security gateways and MME addresses the cell connects to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Gateway", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.FAPControl.LTE.Gateway.")]
pub struct Gateway {
    #[serde(rename = "SecGWServer1", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub sec_gw_server1: Option<String>,
    #[serde(rename = "SecGWServer2", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub sec_gw_server2: Option<String>,
    #[serde(rename = "SecGWServer3", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub sec_gw_server3: Option<String>,
    #[serde(rename = "S1SigLinkServerList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 64)]
    pub s1_sig_link_server_list: Option<String>,
    #[serde(rename = "S1ConnectionMode", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "One|All", default = "One")]
    pub s1_connection_mode: Option<String>,
    #[serde(rename = "S1SigLinkPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "36412")]
    pub s1_sig_link_port: Option<u32>,
}
