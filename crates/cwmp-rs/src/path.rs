// crates/cwmp-rs/src/path.rs

//! Parsing and matching of CWMP object paths.
//!
//! Three flavours of path share one representation:
//! - template paths as used in the data model (`Device.BulkData.Profile.{i}.`),
//! - instance paths as exchanged with an ACS (`Device.BulkData.Profile.2.`),
//! - wildcard paths as accepted by BulkData (`Device.BulkData.Profile.*.`).

use crate::error::CwmpError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// One dot-separated component of an object path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Name(String),
    Instance(u32),
    /// `{i}` in a template path.
    Placeholder,
    /// `*` in a wildcard path.
    Wildcard,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Instance(n) => write!(f, "{}", n),
            Segment::Placeholder => f.write_str("{i}"),
            Segment::Wildcard => f.write_str("*"),
        }
    }
}

/// A partial path naming an object (always ends with `.` in text form).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPath {
    segments: Vec<Segment>,
}

fn invalid(path: &str, reason: &'static str) -> CwmpError {
    CwmpError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl ObjectPath {
    /// Parses an object path. The path must end with a dot.
    pub fn parse(path: &str) -> Result<Self, CwmpError> {
        if path.is_empty() {
            return Err(invalid(path, "path is empty"));
        }
        let body = path
            .strip_suffix('.')
            .ok_or_else(|| invalid(path, "object path must end with '.'"))?;

        let mut segments = Vec::new();
        for raw in body.split('.') {
            let segment = match raw {
                "" => return Err(invalid(path, "empty path segment")),
                "{i}" => Segment::Placeholder,
                "*" => Segment::Wildcard,
                _ if raw.as_bytes()[0].is_ascii_digit() => {
                    let n: u32 = raw
                        .parse()
                        .map_err(|_| invalid(path, "instance number is not a valid integer"))?;
                    if n == 0 {
                        return Err(invalid(path, "instance numbers start at 1"));
                    }
                    Segment::Instance(n)
                }
                _ if is_valid_name(raw) => Segment::Name(raw.to_string()),
                _ => return Err(invalid(path, "invalid character in object name")),
            };
            segments.push(segment);
        }

        if !matches!(segments.first(), Some(Segment::Name(_))) {
            return Err(invalid(path, "path must start with an object name"));
        }
        Ok(ObjectPath { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if the path contains at least one `{i}` placeholder.
    pub fn is_template(&self) -> bool {
        self.placeholder_count() > 0
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder))
            .count()
    }

    /// Replaces the placeholders, left to right, with the given instance numbers.
    pub fn instantiate(&self, instances: &[u32]) -> Result<ObjectPath, CwmpError> {
        if instances.len() != self.placeholder_count() {
            return Err(invalid(
                &self.to_string(),
                "instance count does not match the number of placeholders",
            ));
        }
        if instances.contains(&0) {
            return Err(invalid(&self.to_string(), "instance numbers start at 1"));
        }
        let mut numbers = instances.iter();
        let segments = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Placeholder => numbers
                    .next()
                    .map(|n| Segment::Instance(*n))
                    .unwrap_or(Segment::Placeholder),
                other => other.clone(),
            })
            .collect();
        Ok(ObjectPath { segments })
    }

    /// Replaces instance numbers and wildcards with `{i}`.
    pub fn to_template(&self) -> ObjectPath {
        let segments = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Instance(_) | Segment::Wildcard => Segment::Placeholder,
                other => other.clone(),
            })
            .collect();
        ObjectPath { segments }
    }

    /// Checks whether two paths address the same object node.
    ///
    /// Names must be equal. A placeholder or wildcard on either side matches
    /// any instance number; two instance numbers must be equal.
    pub fn matches(&self, other: &ObjectPath) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|pair| match pair {
                    (Segment::Name(a), Segment::Name(b)) => a == b,
                    (Segment::Instance(a), Segment::Instance(b)) => a == b,
                    (Segment::Name(_), _) | (_, Segment::Name(_)) => false,
                    _ => true,
                })
    }

    /// The concrete instance numbers in the path, left to right.
    pub fn instance_numbers(&self) -> Vec<u32> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Instance(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// The path without its last segment. The root object has no parent.
    pub fn parent(&self) -> Option<ObjectPath> {
        if self.segments.len() <= 1 {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(ObjectPath { segments })
    }

    /// Appends a named child object.
    pub fn child(&self, name: &str) -> Result<ObjectPath, CwmpError> {
        if !is_valid_name(name) {
            return Err(invalid(name, "invalid character in object name"));
        }
        let mut segments = self.segments.clone();
        segments.push(Segment::Name(name.to_string()));
        Ok(ObjectPath { segments })
    }

    /// Appends an instance number.
    pub fn instance(&self, number: u32) -> Result<ObjectPath, CwmpError> {
        if number == 0 {
            return Err(invalid(&self.to_string(), "instance numbers start at 1"));
        }
        let mut segments = self.segments.clone();
        segments.push(Segment::Instance(number));
        Ok(ObjectPath { segments })
    }

    /// Full path of a parameter of this object.
    pub fn parameter(&self, name: &str) -> String {
        let mut path = self.to_string();
        path.push_str(name);
        path
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}.", segment)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectPath {
    type Err = CwmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectPath::parse(s)
    }
}

/// Splits `Device.Time.Enable` into the object path `Device.Time.` and the
/// parameter name `Enable`.
pub fn split_parameter_path(path: &str) -> Result<(ObjectPath, &str), CwmpError> {
    let (object, name) = path
        .rsplit_once('.')
        .ok_or_else(|| invalid(path, "parameter path has no object part"))?;
    if !is_valid_name(name) {
        return Err(invalid(path, "invalid parameter name"));
    }
    let object = ObjectPath::parse(&path[..object.len() + 1])?;
    Ok((object, name))
}

/// Splits the first segment off a relative path: `Pool.1.Enable` gives
/// `("Pool", Some("1.Enable"))`, `Enable` gives `("Enable", None)`.
pub fn next_segment(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Reads the instance number that must follow a table name.
pub fn instance_segment<'a>(
    table: &str,
    rest: Option<&'a str>,
) -> Result<(u32, &'a str), CwmpError> {
    let rest = rest.ok_or_else(|| invalid(table, "table path is missing an instance number"))?;
    let (number, tail) = next_segment(rest);
    let tail = tail.ok_or_else(|| invalid(rest, "path ends at a table instance"))?;
    let number: u32 = number
        .parse()
        .map_err(|_| invalid(rest, "instance number is not a valid integer"))?;
    if number == 0 {
        return Err(invalid(rest, "instance numbers start at 1"));
    }
    Ok((number, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_path() {
        let path = ObjectPath::parse("Device.DHCPv4.Server.Pool.{i}.").unwrap();
        assert!(path.is_template());
        assert_eq!(path.placeholder_count(), 1);
        assert_eq!(path.to_string(), "Device.DHCPv4.Server.Pool.{i}.");
        assert_eq!(path.segments()[1], Segment::Name("DHCPv4".into()));
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for bad in [
            "",
            "Device.Time",
            "Device..Time.",
            "Device.Pool.0.",
            "1.Device.",
            "Device.Ti me.",
            "Device.Pool.99999999999.",
        ] {
            assert!(
                matches!(ObjectPath::parse(bad), Err(CwmpError::InvalidPath { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_instantiate_and_back() {
        let template = ObjectPath::parse("Device.MQTT.Broker.{i}.Bridge.{i}.").unwrap();
        let instance = template.instantiate(&[2, 5]).unwrap();
        assert_eq!(instance.to_string(), "Device.MQTT.Broker.2.Bridge.5.");
        assert_eq!(instance.instance_numbers(), vec![2, 5]);
        assert_eq!(instance.to_template(), template);

        assert!(template.instantiate(&[1]).is_err());
        assert!(template.instantiate(&[1, 0]).is_err());
    }

    #[test]
    fn test_matches_placeholders_and_wildcards() {
        let template = ObjectPath::parse("Device.BulkData.Profile.{i}.").unwrap();
        let instance = ObjectPath::parse("Device.BulkData.Profile.3.").unwrap();
        let wildcard = ObjectPath::parse("Device.BulkData.Profile.*.").unwrap();
        let other = ObjectPath::parse("Device.BulkData.Profile.4.").unwrap();
        let different = ObjectPath::parse("Device.BulkData.Other.3.").unwrap();

        assert!(instance.matches(&template));
        assert!(template.matches(&instance));
        assert!(wildcard.matches(&instance));
        assert!(!instance.matches(&other));
        assert!(!instance.matches(&different));
    }

    #[test]
    fn test_parent_and_child() {
        let path = ObjectPath::parse("Device.DHCPv4.Server.Pool.1.").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "Device.DHCPv4.Server.Pool.");
        assert_eq!(
            parent.instance(1).unwrap().child("StaticAddress").unwrap().to_string(),
            "Device.DHCPv4.Server.Pool.1.StaticAddress."
        );
        assert!(ObjectPath::parse("Device.").unwrap().parent().is_none());
        assert_eq!(path.parameter("Enable"), "Device.DHCPv4.Server.Pool.1.Enable");
    }

    #[test]
    fn test_split_parameter_path() {
        let (object, name) = split_parameter_path("Device.Time.NTPServer1").unwrap();
        assert_eq!(object.to_string(), "Device.Time.");
        assert_eq!(name, "NTPServer1");
        assert!(split_parameter_path("Device.Time.").is_err());
        assert!(split_parameter_path("Enable").is_err());
    }

    #[test]
    fn test_relative_navigation_helpers() {
        assert_eq!(next_segment("Pool.1.Enable"), ("Pool", Some("1.Enable")));
        assert_eq!(next_segment("Enable"), ("Enable", None));
        assert_eq!(instance_segment("Pool", Some("2.Enable")).unwrap(), (2, "Enable"));
        assert!(instance_segment("Pool", None).is_err());
        assert!(instance_segment("Pool", Some("2")).is_err());
        assert!(instance_segment("Pool", Some("x.Enable")).is_err());
    }
}
