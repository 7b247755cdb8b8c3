// crates/cwmp-rs/src/error.rs

use crate::meta::ParameterKind;
use alloc::string::String;
use core::fmt;
use std::net::AddrParseError;

/// Errors raised while parsing CWMP values and paths, or while addressing
/// parameters by path.
#[derive(Debug)]
pub enum CwmpError {
    /// A path string does not follow the CWMP naming rules.
    InvalidPath { path: String, reason: &'static str },

    /// No parameter with this name exists at the addressed object.
    UnknownParameter(String),

    /// No child object with this name exists at the addressed object.
    UnknownObject(String),

    /// The addressed table has no instance with this number.
    NoSuchInstance { object: String, instance: u32 },

    /// The parameter is read-only and cannot be set by path.
    NotWritable(String),

    /// A value string could not be converted to the parameter's type.
    InvalidValue { kind: ParameterKind, value: String },

    /// A `MACAddress` string was malformed.
    InvalidMacAddress(String),

    /// An `IPAddress` string was malformed.
    AddrParsing(AddrParseError),

    /// A `hexBinary` value contained invalid hex.
    HexParsing(hex::FromHexError),

    /// A `base64` value contained invalid base64.
    Base64Parsing(base64::DecodeError),

    /// A `dateTime` value was not RFC 3339.
    DateTimeParsing(chrono::ParseError),
}

impl From<AddrParseError> for CwmpError {
    fn from(e: AddrParseError) -> Self {
        CwmpError::AddrParsing(e)
    }
}

impl From<hex::FromHexError> for CwmpError {
    fn from(e: hex::FromHexError) -> Self {
        CwmpError::HexParsing(e)
    }
}

impl From<base64::DecodeError> for CwmpError {
    fn from(e: base64::DecodeError) -> Self {
        CwmpError::Base64Parsing(e)
    }
}

impl From<chrono::ParseError> for CwmpError {
    fn from(e: chrono::ParseError) -> Self {
        CwmpError::DateTimeParsing(e)
    }
}

impl fmt::Display for CwmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CwmpError::InvalidPath { path, reason } => {
                write!(f, "Invalid path '{}': {}", path, reason)
            }
            CwmpError::UnknownParameter(name) => write!(f, "Unknown parameter: {}", name),
            CwmpError::UnknownObject(name) => write!(f, "Unknown object: {}", name),
            CwmpError::NoSuchInstance { object, instance } => {
                write!(f, "Object {} has no instance {}", object, instance)
            }
            CwmpError::NotWritable(name) => write!(f, "Parameter is read-only: {}", name),
            CwmpError::InvalidValue { kind, value } => {
                write!(f, "Invalid {} value: '{}'", kind, value)
            }
            CwmpError::InvalidMacAddress(value) => write!(f, "Invalid MAC address: '{}'", value),
            CwmpError::AddrParsing(e) => write!(f, "IP address parsing error: {}", e),
            CwmpError::HexParsing(e) => write!(f, "Hex parsing error: {}", e),
            CwmpError::Base64Parsing(e) => write!(f, "Base64 parsing error: {}", e),
            CwmpError::DateTimeParsing(e) => write!(f, "dateTime parsing error: {}", e),
        }
    }
}

impl std::error::Error for CwmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CwmpError::AddrParsing(e) => Some(e),
            CwmpError::HexParsing(e) => Some(e),
            CwmpError::Base64Parsing(e) => Some(e),
            CwmpError::DateTimeParsing(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CwmpError;
    use crate::meta::ParameterKind;
    use alloc::string::ToString;
    use std::error::Error;

    #[test]
    fn test_from_addr_parse_error() {
        let err = "not an address".parse::<std::net::IpAddr>().unwrap_err();
        let cwmp_err: CwmpError = err.into();
        assert!(matches!(cwmp_err, CwmpError::AddrParsing(_)));
        assert!(cwmp_err.source().is_some());
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("Z").unwrap_err();
        let cwmp_err: CwmpError = hex_err.into();
        assert!(matches!(cwmp_err, CwmpError::HexParsing(_)));
    }

    #[test]
    fn test_from_base64_error() {
        use base64::Engine;
        let b64_err = base64::engine::general_purpose::STANDARD
            .decode("!!")
            .unwrap_err();
        let cwmp_err: CwmpError = b64_err.into();
        assert!(matches!(cwmp_err, CwmpError::Base64Parsing(_)));
    }

    #[test]
    fn test_from_chrono_error() {
        let chrono_err = chrono::DateTime::parse_from_rfc3339("soon").unwrap_err();
        let cwmp_err: CwmpError = chrono_err.into();
        assert!(matches!(cwmp_err, CwmpError::DateTimeParsing(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = CwmpError::NoSuchInstance {
            object: "Device.DHCPv4.Server.Pool.".to_string(),
            instance: 3,
        };
        assert_eq!(
            err.to_string(),
            "Object Device.DHCPv4.Server.Pool. has no instance 3"
        );

        let err = CwmpError::InvalidValue {
            kind: ParameterKind::UnsignedInt,
            value: "-5".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid xsd:unsignedInt value: '-5'");
        assert!(err.source().is_none());
    }
}
