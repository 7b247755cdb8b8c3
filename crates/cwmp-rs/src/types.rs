// crates/cwmp-rs/src/types.rs

//! CWMP leaf value types and their string encoding.
//!
//! Every parameter field of a model type is an `Option<T>` where `T`
//! implements [`ParameterType`]. The string forms produced here are the ones
//! carried in `ParameterValueStruct` values and in the XML binding.

use crate::error::CwmpError;
use crate::meta::ParameterKind;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::{SecondsFormat, TimeZone, Utc};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// CWMP `dateTime`, always handled in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Size of a MAC address in bytes.
pub const MAC_ADDRESS_SIZE: usize = 6;

/// A leaf parameter type.
pub trait ParameterType: Sized {
    /// Base wire type.
    const KIND: ParameterKind;

    /// TR-106 named data type, if the type refines a base type.
    const DATA_TYPE: Option<&'static str> = None;

    /// Formats the value the way it is carried in a `ParameterValueStruct`.
    fn to_cwmp_string(&self) -> String;

    /// Parses a value received from an ACS.
    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError>;
}

fn invalid(kind: ParameterKind, s: &str) -> CwmpError {
    CwmpError::InvalidValue {
        kind,
        value: s.to_string(),
    }
}

impl ParameterType for bool {
    const KIND: ParameterKind = ParameterKind::Boolean;

    fn to_cwmp_string(&self) -> String {
        if *self { "true".into() } else { "false".into() }
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(Self::KIND, s)),
        }
    }
}

impl ParameterType for String {
    const KIND: ParameterKind = ParameterKind::String;

    fn to_cwmp_string(&self) -> String {
        self.clone()
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        Ok(s.to_string())
    }
}

macro_rules! integer_parameter {
    ($ty:ty, $kind:expr) => {
        impl ParameterType for $ty {
            const KIND: ParameterKind = $kind;

            fn to_cwmp_string(&self) -> String {
                self.to_string()
            }

            fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
                s.trim().parse().map_err(|_| invalid(Self::KIND, s))
            }
        }
    };
}

integer_parameter!(i32, ParameterKind::Int);
integer_parameter!(u32, ParameterKind::UnsignedInt);
integer_parameter!(i64, ParameterKind::Long);
integer_parameter!(u64, ParameterKind::UnsignedLong);

impl ParameterType for DateTime {
    const KIND: ParameterKind = ParameterKind::DateTime;

    fn to_cwmp_string(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(s.trim())?;
        Ok(parsed.with_timezone(&Utc))
    }
}

/// The "Unknown Time" value, `0001-01-01T00:00:00Z`.
pub fn unknown_time() -> DateTime {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC)
}

/// The "Infinite Time" value, `9999-12-31T23:59:59Z`.
pub fn infinite_time() -> DateTime {
    Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59)
        .single()
        .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC)
}

// --- Binary types ---

/// Binary data encoded as base64 on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Base64(pub Vec<u8>);

impl Base64 {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Base64 {
    fn from(bytes: Vec<u8>) -> Self {
        Base64(bytes)
    }
}

impl From<&[u8]> for Base64 {
    fn from(bytes: &[u8]) -> Self {
        Base64(bytes.to_vec())
    }
}

impl fmt::Display for Base64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_STANDARD.encode(&self.0))
    }
}

impl FromStr for Base64 {
    type Err = CwmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Base64(BASE64_STANDARD.decode(s.trim())?))
    }
}

impl ParameterType for Base64 {
    const KIND: ParameterKind = ParameterKind::Base64;

    fn to_cwmp_string(&self) -> String {
        self.to_string()
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        s.parse()
    }
}

/// Binary data encoded as hex digits on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBinary(pub Vec<u8>);

impl HexBinary {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(bytes: Vec<u8>) -> Self {
        HexBinary(bytes)
    }
}

impl From<&[u8]> for HexBinary {
    fn from(bytes: &[u8]) -> Self {
        HexBinary(bytes.to_vec())
    }
}

impl fmt::Display for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl FromStr for HexBinary {
    type Err = CwmpError;

    /// Accepts an optional "0x" prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        Ok(HexBinary(hex::decode(trimmed)?))
    }
}

impl ParameterType for HexBinary {
    const KIND: ParameterKind = ParameterKind::HexBinary;

    fn to_cwmp_string(&self) -> String {
        self.to_string()
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        s.parse()
    }
}

// --- Addresses ---

/// TR-106 `IPAddress`: an IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpAddress(pub IpAddr);

impl IpAddress {
    pub const fn is_ipv4(&self) -> bool {
        self.0.is_ipv4()
    }
}

impl Default for IpAddress {
    fn default() -> Self {
        IpAddress(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        IpAddress(addr)
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress(IpAddr::V4(addr))
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress(IpAddr::V6(addr))
    }
}

impl From<[u8; 4]> for IpAddress {
    fn from(octets: [u8; 4]) -> Self {
        IpAddress(IpAddr::V4(Ipv4Addr::from(octets)))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for IpAddress {
    type Err = CwmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IpAddress(s.trim().parse()?))
    }
}

impl ParameterType for IpAddress {
    const KIND: ParameterKind = ParameterKind::String;
    const DATA_TYPE: Option<&'static str> = Some("IPAddress");

    fn to_cwmp_string(&self) -> String {
        self.to_string()
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        s.parse()
    }
}

/// TR-106 `MACAddress`: a 6-byte IEEE 802 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MacAddress(pub [u8; MAC_ADDRESS_SIZE]);

impl MacAddress {
    /// Creates a new `MacAddress` from a 6-byte array.
    pub const fn new(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }

    /// Checks if the address is a multicast address.
    pub fn is_multicast(&self) -> bool {
        (self.0[0] & 0x01) != 0
    }

    /// Checks if the address is the broadcast address (FF:FF:FF:FF:FF:FF).
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; MAC_ADDRESS_SIZE]
    }
}

impl From<[u8; MAC_ADDRESS_SIZE]> for MacAddress {
    fn from(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }
}

impl fmt::Display for MacAddress {
    /// Formats the MAC address as "XX:XX:XX:XX:XX:XX".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = CwmpError;

    /// Accepts `:` or `-` as the octet separator, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut bytes = [0u8; MAC_ADDRESS_SIZE];
        let mut count = 0;
        for part in trimmed.split([':', '-']) {
            if count == MAC_ADDRESS_SIZE || part.len() != 2 {
                return Err(CwmpError::InvalidMacAddress(s.to_string()));
            }
            bytes[count] = u8::from_str_radix(part, 16)
                .map_err(|_| CwmpError::InvalidMacAddress(s.to_string()))?;
            count += 1;
        }
        if count != MAC_ADDRESS_SIZE {
            return Err(CwmpError::InvalidMacAddress(s.to_string()));
        }
        Ok(MacAddress(bytes))
    }
}

impl ParameterType for MacAddress {
    const KIND: ParameterKind = ParameterKind::String;
    const DATA_TYPE: Option<&'static str> = Some("MACAddress");

    fn to_cwmp_string(&self) -> String {
        self.to_string()
    }

    fn from_cwmp_str(s: &str) -> Result<Self, CwmpError> {
        s.parse()
    }
}

// --- serde: every custom type travels as its CWMP string ---

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(Base64);
string_serde!(HexBinary);
string_serde!(IpAddress);
string_serde!(MacAddress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_accepts_numeric_forms() {
        assert_eq!(bool::from_cwmp_str("1").unwrap(), true);
        assert_eq!(bool::from_cwmp_str("false").unwrap(), false);
        assert!(matches!(
            bool::from_cwmp_str("yes"),
            Err(CwmpError::InvalidValue {
                kind: ParameterKind::Boolean,
                ..
            })
        ));
        assert_eq!(true.to_cwmp_string(), "true");
    }

    #[test]
    fn test_integer_out_of_type_range_is_rejected() {
        assert_eq!(u32::from_cwmp_str("4294967295").unwrap(), u32::MAX);
        assert!(u32::from_cwmp_str("-1").is_err());
        assert_eq!(i32::from_cwmp_str("-1").unwrap(), -1);
    }

    #[test]
    fn test_mac_address_parsing() {
        let mac: MacAddress = "00:1a:2B:3c:4D:5e".parse().unwrap();
        assert_eq!(mac, MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]));
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");

        let dashed: MacAddress = "FF-FF-FF-FF-FF-FF".parse().unwrap();
        assert!(dashed.is_broadcast());
        assert!(dashed.is_multicast());

        assert!("00:11:22:33:44".parse::<MacAddress>().is_err());
        assert!("00:11:22:33:44:55:66".parse::<MacAddress>().is_err());
        assert!("00:11:22:33:44:GG".parse::<MacAddress>().is_err());
    }

    #[test]
    fn test_ip_address_parsing() {
        let v4: IpAddress = "192.168.1.1".parse().unwrap();
        assert!(v4.is_ipv4());
        assert_eq!(v4, IpAddress::from([192, 168, 1, 1]));

        let v6 = IpAddress::from_cwmp_str("fe80::1").unwrap();
        assert!(!v6.is_ipv4());
        assert_eq!(v6.to_cwmp_string(), "fe80::1");

        assert!(matches!(
            "300.1.1.1".parse::<IpAddress>(),
            Err(CwmpError::AddrParsing(_))
        ));
    }

    #[test]
    fn test_binary_encodings() {
        let hex = HexBinary::from_cwmp_str("0x0A0b").unwrap();
        assert_eq!(hex.as_bytes(), &[0x0A, 0x0B]);
        assert_eq!(hex.to_cwmp_string(), "0A0B");
        assert!(matches!(
            HexBinary::from_cwmp_str("ABC"),
            Err(CwmpError::HexParsing(_))
        ));

        let b64 = Base64::from(b"cwmp".as_slice());
        assert_eq!(b64.to_cwmp_string(), "Y3dtcA==");
        assert_eq!(Base64::from_cwmp_str("Y3dtcA==").unwrap(), b64);
        assert!(matches!(
            Base64::from_cwmp_str("***"),
            Err(CwmpError::Base64Parsing(_))
        ));
    }

    #[test]
    fn test_date_time_forms() {
        assert_eq!(unknown_time().to_cwmp_string(), "0001-01-01T00:00:00Z");
        assert_eq!(infinite_time().to_cwmp_string(), "9999-12-31T23:59:59Z");

        let parsed = DateTime::from_cwmp_str("2024-05-01T12:30:00+02:00").unwrap();
        assert_eq!(parsed.to_cwmp_string(), "2024-05-01T10:30:00Z");
        assert!(DateTime::from_cwmp_str("yesterday").is_err());
    }
}
