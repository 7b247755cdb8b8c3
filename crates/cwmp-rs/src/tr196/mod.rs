// crates/cwmp-rs/src/tr196/mod.rs

//! TR-196 `FAPService:2` objects (LTE femto access point), mounted at
//! `Device.Services.FAPService.{i}.`.
//!
//! Only the LTE branches are modelled. Each level of the standard's
//! hierarchy (`CellConfig.`, `CellConfig.LTE.`, `CellConfig.LTE.RAN.`, ...)
//! is its own type, so an instance path maps one-to-one onto field access.

pub mod capabilities;
pub mod cell_config;
pub mod fap_control;
pub mod rem;
pub mod transport;

use crate::CwmpObject;
use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use capabilities::Capabilities;
pub use cell_config::CellConfig;
pub use fap_control::FapControl;
pub use rem::Rem;
pub use transport::Transport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "FAPService", default)]
#[cwmp(
    path = "Device.Services.FAPService.{i}.",
    num_entries = "FAPServiceNumberOfEntries",
    unique_key = "Alias"
)]
pub struct FapService {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    /// Distinguished name prefix used to build the FAP's managed object names.
    #[serde(rename = "DNPrefix", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub dn_prefix: Option<String>,

    #[serde(rename = "Capabilities", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub capabilities: Option<Capabilities>,
    #[serde(rename = "FAPControl", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub fap_control: Option<FapControl>,
    #[serde(rename = "CellConfig", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub cell_config: Option<CellConfig>,
    #[serde(rename = "REM", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub rem: Option<Rem>,
    #[serde(rename = "Transport", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub transport: Option<Transport>,
}
