// crates/cwmp-rs/src/tr104/mod.rs

//! TR-104 `VoiceService:1` objects, mounted at
//! `Device.Services.VoiceService.{i}.`.

pub mod capabilities;
pub mod line;
pub mod voice_profile;

use crate::CwmpObject;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use capabilities::Capabilities;
pub use line::Line;
pub use voice_profile::VoiceProfile;

/// One VoIP service instance of the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "VoiceService", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.",
    num_entries = "VoiceServiceNumberOfEntries"
)]
pub struct VoiceService {
    #[serde(rename = "VoiceProfileNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub voice_profile_number_of_entries: Option<u32>,

    #[serde(rename = "Capabilities", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub capabilities: Option<Capabilities>,
    #[serde(rename = "VoiceProfile", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub voice_profiles: Vec<VoiceProfile>,
    #[serde(rename = "PhyInterface", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub phy_interfaces: Vec<PhyInterface>,
}

/// A physical voice port (FXS/FXO) that lines can be attached to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "PhyInterface", default)]
#[cwmp(
    path = "Device.Services.VoiceService.{i}.PhyInterface.{i}.",
    unique_key = "InterfaceID"
)]
pub struct PhyInterface {
    #[serde(rename = "PhyPort", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 2)]
    pub phy_port: Option<String>,
    /// Referenced from a line's `PhyReferenceList`.
    #[serde(rename = "InterfaceID", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = 1)]
    pub interface_id: Option<u32>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 32)]
    pub description: Option<String>,
}
