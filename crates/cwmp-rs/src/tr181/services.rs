// crates/cwmp-rs/src/tr181/services.rs

use crate::CwmpObject;
use crate::tr104::VoiceService;
use crate::tr196::FapService;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// `Device.Services.`: mount point of the service data models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Services", default)]
#[cwmp(path = "Device.Services.")]
pub struct Services {
    #[serde(rename = "VoiceServiceNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub voice_service_number_of_entries: Option<u32>,
    #[serde(rename = "FAPServiceNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub fap_service_number_of_entries: Option<u32>,

    #[serde(rename = "VoiceService", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub voice_services: Vec<VoiceService>,
    #[serde(rename = "FAPService", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub fap_services: Vec<FapService>,
}
