// crates/cwmp-rs/src/tr181/dhcpv4.rs

//! `Device.DHCPv4.`: the DHCPv4 server, its address pools and their leases.

use crate::CwmpObject;
use crate::types::{DateTime, HexBinary, IpAddress, MacAddress};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "DHCPv4", default)]
#[cwmp(path = "Device.DHCPv4.")]
pub struct Dhcpv4 {
    #[serde(rename = "ClientNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub client_number_of_entries: Option<u32>,

    #[serde(rename = "Server", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub server: Option<Server>,
}

/// DHCPv4 server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Server", default)]
#[cwmp(path = "Device.DHCPv4.Server.")]
pub struct Server {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "PoolNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub pool_number_of_entries: Option<u32>,

    #[serde(rename = "Pool", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub pools: Vec<Pool>,
}

/// A DHCP server address pool.
///
/// Pools are evaluated in ascending `Order`; the first pool whose
/// classification criteria match the client request is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Pool", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.",
    access = "readWrite",
    num_entries = "PoolNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Order"
)]
pub struct Pool {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Disabled|Enabled|Error_Misconfigured|Error", default = "Disabled")]
    pub status: Option<String>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Order", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1)]
    pub order: Option<u32>,
    /// Path reference to an IP interface.
    #[serde(rename = "Interface", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub interface: Option<String>,
    #[serde(rename = "VendorClassID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 255)]
    pub vendor_class_id: Option<String>,
    #[serde(rename = "VendorClassIDExclude", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub vendor_class_id_exclude: Option<bool>,
    #[serde(rename = "VendorClassIDMode", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Exact|Prefix|Suffix|Substring", default = "Exact")]
    pub vendor_class_id_mode: Option<String>,
    #[serde(rename = "ClientID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub client_id: Option<HexBinary>,
    #[serde(rename = "ClientIDExclude", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub client_id_exclude: Option<bool>,
    #[serde(rename = "UserClassID", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 65535)]
    pub user_class_id: Option<HexBinary>,
    #[serde(rename = "UserClassIDExclude", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub user_class_id_exclude: Option<bool>,
    #[serde(rename = "Chaddr", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub chaddr: Option<MacAddress>,
    #[serde(rename = "ChaddrMask", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub chaddr_mask: Option<MacAddress>,
    #[serde(rename = "ChaddrExclude", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub chaddr_exclude: Option<bool>,
    #[serde(rename = "MinAddress", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", data_type = "IPv4Address")]
    pub min_address: Option<IpAddress>,
    #[serde(rename = "MaxAddress", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", data_type = "IPv4Address")]
    pub max_address: Option<IpAddress>,
    #[serde(rename = "ReservedAddresses", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 32)]
    pub reserved_addresses: Option<String>,
    #[serde(rename = "SubnetMask", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", data_type = "IPv4Address")]
    pub subnet_mask: Option<IpAddress>,
    #[serde(rename = "DNSServers", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 4)]
    pub dns_servers: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub domain_name: Option<String>,
    #[serde(rename = "IPRouters", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", list, max_size = 4)]
    pub ip_routers: Option<String>,
    /// `-1` is an infinite lease.
    #[serde(rename = "LeaseTime", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, units = "seconds", default = "86400")]
    pub lease_time: Option<i32>,
    #[serde(rename = "StaticAddressNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub static_address_number_of_entries: Option<u32>,
    #[serde(rename = "OptionNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub option_number_of_entries: Option<u32>,
    #[serde(rename = "ClientNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub client_number_of_entries: Option<u32>,

    #[serde(rename = "StaticAddress", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub static_addresses: Vec<StaticAddress>,
    #[serde(rename = "Option", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub options: Vec<PoolOption>,
    #[serde(rename = "Client", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub clients: Vec<Client>,
}

/// A fixed MAC to IP address binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "StaticAddress", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.StaticAddress.{i}.",
    access = "readWrite",
    num_entries = "StaticAddressNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Chaddr"
)]
pub struct StaticAddress {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Chaddr", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub chaddr: Option<MacAddress>,
    #[serde(rename = "Yiaddr", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", data_type = "IPv4Address")]
    pub yiaddr: Option<IpAddress>,
}

/// A DHCP option handed out by the pool. `Value` excludes tag and length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Option", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.Option.{i}.",
    access = "readWrite",
    num_entries = "OptionNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias",
    unique_key = "Tag"
)]
pub struct PoolOption {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Tag", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 254)]
    pub tag: Option<u32>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 255)]
    pub value: Option<HexBinary>,
}

/// A client currently holding, or recently holding, a lease from the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Client", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.Client.{i}.",
    num_entries = "ClientNumberOfEntries",
    unique_key = "Alias",
    unique_key = "Chaddr"
)]
pub struct Client {
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Chaddr", skip_serializing_if = "Option::is_none")]
    pub chaddr: Option<MacAddress>,
    #[serde(rename = "Active", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "IPv4AddressNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub ipv4_address_number_of_entries: Option<u32>,
    #[serde(rename = "OptionNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub option_number_of_entries: Option<u32>,

    #[serde(rename = "IPv4Address", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub ipv4_addresses: Vec<Ipv4Address>,
    #[serde(rename = "Option", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub options: Vec<ClientOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "IPv4Address", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.Client.{i}.IPv4Address.{i}.",
    num_entries = "IPv4AddressNumberOfEntries",
    unique_key = "IPAddress"
)]
pub struct Ipv4Address {
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    #[cwmp(data_type = "IPv4Address")]
    pub ip_address: Option<IpAddress>,
    /// Lease expiry. `9999-12-31T23:59:59Z` for an infinite lease.
    #[serde(rename = "LeaseTimeRemaining", skip_serializing_if = "Option::is_none")]
    pub lease_time_remaining: Option<DateTime>,
}

/// A DHCP option received from the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Option", default)]
#[cwmp(
    path = "Device.DHCPv4.Server.Pool.{i}.Client.{i}.Option.{i}.",
    num_entries = "OptionNumberOfEntries",
    unique_key = "Tag"
)]
pub struct ClientOption {
    #[serde(rename = "Tag", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = 0, max = 255)]
    pub tag: Option<u32>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    #[cwmp(max_size = 255)]
    pub value: Option<HexBinary>,
}
