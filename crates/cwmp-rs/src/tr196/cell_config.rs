// crates/cwmp-rs/src/tr196/cell_config.rs

//! `FAPService.{i}.CellConfig.`: LTE cell configuration, split into the core
//! network side (`EPC`) and the radio side (`RAN`).

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "CellConfig", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.CellConfig.")]
pub struct CellConfig {
    #[serde(rename = "LTE", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub lte: Option<Lte>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "LTE", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.CellConfig.LTE.")]
pub struct Lte {
    #[serde(rename = "EPC", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub epc: Option<Epc>,
    #[serde(rename = "RAN", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub ran: Option<Ran>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "EPC", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.CellConfig.LTE.EPC.")]
pub struct Epc {
    #[serde(rename = "AllowedCipheringAlgorithmList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, values = "EEA0|128-EEA1|128-EEA2")]
    pub allowed_ciphering_algorithm_list: Option<String>,
    #[serde(
        rename = "AllowedIntegrityProtectionAlgorithmList",
        skip_serializing_if = "Option::is_none"
    )]
    #[cwmp(access = "readWrite", list, values = "128-EIA1|128-EIA2")]
    pub allowed_integrity_protection_algorithm_list: Option<String>,
    /// Tracking area code.
    #[serde(rename = "TAC", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub tac: Option<u32>,
    #[serde(rename = "EAID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max = 65535)]
    pub eaid: Option<u32>,
    #[serde(rename = "MaxPLMNListEntries", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = 1, max = 6)]
    pub max_plmn_list_entries: Option<u32>,
    #[serde(rename = "PLMNListNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub plmn_list_number_of_entries: Option<u32>,

    #[serde(rename = "PLMNList", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub plmn_lists: Vec<PlmnList>,
}

/// A PLMN broadcast by the cell. Exactly one entry has `IsPrimary` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "PLMNList", default)]
#[cwmp(
    path = "Device.Services.FAPService.{i}.CellConfig.LTE.EPC.PLMNList.{i}.",
    access = "readWrite",
    max_entries = 6,
    num_entries = "PLMNListNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "PLMNID"
)]
pub struct PlmnList {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "IsPrimary", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub is_primary: Option<bool>,
    /// MCC followed by a 2 or 3 digit MNC.
    #[serde(rename = "PLMNID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min_size = 5, max_size = 6)]
    pub plmn_id: Option<String>,
    #[serde(rename = "CellReservedForOperatorUse", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub cell_reserved_for_operator_use: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RAN", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.CellConfig.LTE.RAN.")]
pub struct Ran {
    #[serde(rename = "RF", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub rf: Option<Rf>,
}

/// Radio frequency settings. List parameters hold candidate values the FAP
/// selects from during self-configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RF", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.CellConfig.LTE.RAN.RF.")]
pub struct Rf {
    #[serde(rename = "EARFCNDL", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list)]
    pub earfcn_dl: Option<String>,
    #[serde(rename = "EARFCNUL", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list)]
    pub earfcn_ul: Option<String>,
    #[serde(rename = "FreqBandIndicator", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 256)]
    pub freq_band_indicator: Option<u32>,
    #[serde(rename = "DLBandwidth", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, values = "n6|n15|n25|n50|n75|n100")]
    pub dl_bandwidth: Option<String>,
    #[serde(rename = "ULBandwidth", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, values = "n6|n15|n25|n50|n75|n100")]
    pub ul_bandwidth: Option<String>,
    #[serde(rename = "ReferenceSignalPower", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -60, max = 50, units = "dBm")]
    pub reference_signal_power: Option<i32>,
    #[serde(rename = "PhyCellID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list)]
    pub phy_cell_id: Option<String>,
    #[serde(rename = "PSCHPowerOffset", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -350, max = 150, units = "0.01 dB")]
    pub psch_power_offset: Option<i32>,
    #[serde(rename = "SSCHPowerOffset", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -350, max = 150, units = "0.01 dB")]
    pub ssch_power_offset: Option<i32>,
    #[serde(rename = "PBCHPowerOffset", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -350, max = 150, units = "0.01 dB")]
    pub pbch_power_offset: Option<i32>,
}
