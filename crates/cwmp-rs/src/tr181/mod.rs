// crates/cwmp-rs/src/tr181/mod.rs

//! TR-181 `Device:2` objects.
//!
//! The tree is rooted at [`Device`]. `Device.Services.VoiceService.{i}.` and
//! `Device.Services.FAPService.{i}.` are defined in [`crate::tr104`] and
//! [`crate::tr196`].

pub mod bulkdata;
pub mod device;
pub mod device_info;
pub mod dhcpv4;
pub mod ethernet;
pub mod management_server;
pub mod mqtt;
pub mod services;
pub mod time;

pub use bulkdata::BulkData;
pub use device::Device;
pub use device_info::DeviceInfo;
pub use dhcpv4::Dhcpv4;
pub use ethernet::Ethernet;
pub use management_server::ManagementServer;
pub use mqtt::Mqtt;
pub use services::Services;
pub use time::Time;
