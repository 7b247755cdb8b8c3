// crates/cwmp-rs/src/tr196/capabilities.rs

use crate::CwmpObject;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// `FAPService.{i}.Capabilities.`: radio hardware capabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Capabilities", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.Capabilities.")]
pub struct Capabilities {
    #[serde(rename = "GPSEquipped", skip_serializing_if = "Option::is_none")]
    pub gps_equipped: Option<bool>,
    #[serde(rename = "MaxTxPower", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "dBm")]
    pub max_tx_power: Option<u32>,
    #[serde(rename = "SupportedSystems", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "UMTS|LTE|CDMA2000")]
    pub supported_systems: Option<String>,
    #[serde(rename = "Beacon", skip_serializing_if = "Option::is_none")]
    pub beacon: Option<bool>,

    #[serde(rename = "LTE", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub lte: Option<Lte>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "LTE", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.Capabilities.LTE.")]
pub struct Lte {
    #[serde(rename = "DuplexMode", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "FDDMode|TDDMode")]
    pub duplex_mode: Option<String>,
    /// E-UTRA band numbers, e.g. `1,3,7`.
    #[serde(rename = "BandsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list)]
    pub bands_supported: Option<String>,
    #[serde(rename = "NNSFSupported", skip_serializing_if = "Option::is_none")]
    pub nnsf_supported: Option<bool>,
    #[serde(rename = "UMTSRxSupported", skip_serializing_if = "Option::is_none")]
    pub umts_rx_supported: Option<bool>,
    #[serde(rename = "UMTSRxBandsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list)]
    pub umts_rx_bands_supported: Option<String>,
    #[serde(rename = "GERANRxSupported", skip_serializing_if = "Option::is_none")]
    pub geran_rx_supported: Option<bool>,
    #[serde(rename = "GERANRxBandsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list)]
    pub geran_rx_bands_supported: Option<String>,
    #[serde(rename = "NMMGPSSupported", skip_serializing_if = "Option::is_none")]
    pub nmm_gps_supported: Option<bool>,
}
