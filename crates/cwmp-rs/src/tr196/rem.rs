// crates/cwmp-rs/src/tr196/rem.rs

//! `FAPService.{i}.REM.`: radio environment measurement, the scan of
//! neighbouring cells the FAP runs before and while transmitting.

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "REM", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.REM.")]
pub struct Rem {
    #[serde(rename = "LTE", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub lte: Option<Lte>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "LTE", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.REM.LTE.")]
pub struct Lte {
    #[serde(rename = "InServiceHandling", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Immediate|Delayed")]
    pub in_service_handling: Option<String>,
    #[serde(rename = "ScanOnBoot", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub scan_on_boot: Option<bool>,
    #[serde(rename = "ScanPeriodically", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub scan_periodically: Option<bool>,
    #[serde(rename = "PeriodicInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "seconds")]
    pub periodic_interval: Option<u32>,
    #[serde(rename = "PeriodicTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub periodic_time: Option<DateTime>,
    #[serde(rename = "REMPLMNList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 32)]
    pub rem_plmn_list: Option<String>,
    #[serde(rename = "REMBandList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 32)]
    pub rem_band_list: Option<String>,
    #[serde(rename = "EUTRACarrierARFCNDLList", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 64)]
    pub eutra_carrier_arfcn_dl_list: Option<String>,
    #[serde(rename = "ScanTimeout", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", units = "seconds")]
    pub scan_timeout: Option<u32>,
    #[serde(rename = "ScanStatus", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Indeterminate|InProgress|Success|Error|Error_TIMEOUT")]
    pub scan_status: Option<String>,
    #[serde(rename = "ErrorDetails", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 256)]
    pub error_details: Option<String>,
    #[serde(rename = "LastScanTime", skip_serializing_if = "Option::is_none")]
    pub last_scan_time: Option<DateTime>,
    #[serde(rename = "MaxCellEntries", skip_serializing_if = "Option::is_none")]
    pub max_cell_entries: Option<u32>,
    #[serde(rename = "CellNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub cell_number_of_entries: Option<u32>,

    #[serde(rename = "Cell", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub cells: Vec<Cell>,
}

/// A neighbouring cell found by the last scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Cell", default)]
#[cwmp(
    path = "Device.Services.FAPService.{i}.REM.LTE.Cell.{i}.",
    num_entries = "CellNumberOfEntries"
)]
pub struct Cell {
    #[serde(rename = "RF", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub rf: Option<CellRf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RF", default)]
#[cwmp(path = "Device.Services.FAPService.{i}.REM.LTE.Cell.{i}.RF.")]
pub struct CellRf {
    #[serde(rename = "EUTRACarrierARFCN", skip_serializing_if = "Option::is_none")]
    #[cwmp(max = 65535)]
    pub eutra_carrier_arfcn: Option<u32>,
    #[serde(rename = "PhyCellID", skip_serializing_if = "Option::is_none")]
    #[cwmp(max = 503)]
    pub phy_cell_id: Option<u32>,
    #[serde(rename = "RSRP", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = -140, max = -44, units = "dBm")]
    pub rsrp: Option<i32>,
    #[serde(rename = "RSRQ", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = -240, max = 0, units = "0.1 dB")]
    pub rsrq: Option<i32>,
    #[serde(rename = "RSSI", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "dBm")]
    pub rssi: Option<i32>,
}
