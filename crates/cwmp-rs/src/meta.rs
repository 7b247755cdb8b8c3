// crates/cwmp-rs/src/meta.rs

//! Static metadata describing CWMP objects and parameters.
//!
//! Every model type carries one `ObjectInfo` generated by
//! `#[derive(CwmpObject)]`. The metadata records what the standard says about
//! each parameter (access, notification policy, units, ranges, enumerations)
//! but nothing here is enforced when a field is assigned.

use core::fmt;
use alloc::string::String;
use alloc::vec::Vec;
use alloc::format;

/// Access mode of a parameter or object (TR-106 `access` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    #[default]
    ReadOnly,
    ReadWrite,
}

impl Access {
    /// The XML attribute value (`readOnly` / `readWrite`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Access::ReadOnly => "readOnly",
            Access::ReadWrite => "readWrite",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active notification policy of a parameter (TR-106 `activeNotify` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveNotify {
    /// The ACS may turn active notification on or off.
    #[default]
    Normal,
    /// The CPE may reject a request to enable active notification.
    CanDeny,
    /// Active notification is always on and cannot be turned off.
    ForceEnabled,
    /// Active notification is on by default but may be turned off.
    ForceDefaultEnabled,
}

impl ActiveNotify {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActiveNotify::Normal => "normal",
            ActiveNotify::CanDeny => "canDeny",
            ActiveNotify::ForceEnabled => "forceEnabled",
            ActiveNotify::ForceDefaultEnabled => "forceDefaultEnabled",
        }
    }
}

impl fmt::Display for ActiveNotify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base data type of a parameter as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Boolean,
    String,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    DateTime,
    Base64,
    HexBinary,
}

impl ParameterKind {
    /// The SOAP type name used in `ParameterValueStruct` values.
    pub const fn xsd_type(&self) -> &'static str {
        match self {
            ParameterKind::Boolean => "xsd:boolean",
            ParameterKind::String => "xsd:string",
            ParameterKind::Int => "xsd:int",
            ParameterKind::UnsignedInt => "xsd:unsignedInt",
            ParameterKind::Long => "xsd:long",
            ParameterKind::UnsignedLong => "xsd:unsignedLong",
            ParameterKind::DateTime => "xsd:dateTime",
            ParameterKind::Base64 => "xsd:base64",
            ParameterKind::HexBinary => "xsd:hexBinary",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xsd_type())
    }
}

/// Inclusive numeric range of an integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Range {
    pub const fn contains(&self, value: i64) -> bool {
        let above = match self.min {
            Some(min) => value >= min,
            None => true,
        };
        let below = match self.max {
            Some(max) => value <= max,
            None => true,
        };
        above && below
    }
}

/// Inclusive length bounds of a string or binary parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeRange {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl SizeRange {
    pub const fn contains(&self, len: usize) -> bool {
        let above = match self.min {
            Some(min) => len >= min,
            None => true,
        };
        let below = match self.max {
            Some(max) => len <= max,
            None => true,
        };
        above && below
    }
}

/// Metadata of one parameter, the equivalent of its `@CWMPParameter` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Parameter name, identical to the XML element name.
    pub name: &'static str,
    pub kind: ParameterKind,
    /// TR-106 named data type (`IPAddress`, `MACAddress`, ...) when the
    /// parameter uses one.
    pub data_type: Option<&'static str>,
    pub access: Access,
    pub notify: ActiveNotify,
    pub units: Option<&'static str>,
    pub size: Option<SizeRange>,
    pub range: Option<Range>,
    /// Enumerated values allowed by the standard. Empty when unrestricted.
    pub values: &'static [&'static str],
    pub default_value: Option<&'static str>,
    /// Comma-separated list of values.
    pub list: bool,
    /// The value is returned as an empty string when read (passwords, keys).
    pub hidden: bool,
}

impl ParameterInfo {
    pub const fn is_writable(&self) -> bool {
        matches!(self.access, Access::ReadWrite)
    }

    /// Whether `value` is one of the enumerated values. For list parameters
    /// every item must be. Parameters without an enumeration accept anything.
    pub fn allows_value(&self, value: &str) -> bool {
        if self.values.is_empty() {
            return true;
        }
        if self.list {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .all(|item| self.values.contains(&item))
        } else {
            self.values.contains(&value)
        }
    }
}

/// A child object slot of an object.
#[derive(Debug, Clone, Copy)]
pub struct ChildInfo {
    /// Element / path segment name (e.g. "StaticAddress").
    pub name: &'static str,
    /// True for tables (`{i}` objects).
    pub multi_instance: bool,
    /// Accessor to the child's own metadata.
    pub info: fn() -> &'static ObjectInfo,
}

impl ChildInfo {
    pub fn object(&self) -> &'static ObjectInfo {
        (self.info)()
    }
}

/// Metadata of one object, the equivalent of its `@CWMPObject` annotation.
#[derive(Debug)]
pub struct ObjectInfo {
    /// Template path, e.g. `Device.DHCPv4.Server.Pool.{i}.`.
    pub path: &'static str,
    /// `ReadWrite` tables allow the ACS to add and delete instances.
    pub access: Access,
    pub min_entries: u32,
    /// `None` means unbounded.
    pub max_entries: Option<u32>,
    /// Name of the parent's `...NumberOfEntries` parameter for tables.
    pub num_entries_parameter: Option<&'static str>,
    pub enable_parameter: Option<&'static str>,
    /// Each entry is one comma-separated set of unique key parameters.
    pub unique_keys: &'static [&'static str],
    pub parameters: &'static [ParameterInfo],
    pub children: &'static [ChildInfo],
}

impl ObjectInfo {
    /// Last named segment of the path (`Pool` for `Device.DHCPv4.Server.Pool.{i}.`).
    pub fn name(&self) -> &'static str {
        self.path
            .trim_end_matches('.')
            .trim_end_matches("{i}")
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .unwrap_or(self.path)
    }

    pub fn is_multi_instance(&self) -> bool {
        self.path.ends_with(".{i}.")
    }

    pub fn parameter(&self, name: &str) -> Option<&'static ParameterInfo> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&'static ChildInfo> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Visits this object and every object below it, parents first.
    pub fn walk(&'static self, f: &mut dyn FnMut(&'static ObjectInfo)) {
        f(self);
        for child in self.children {
            child.object().walk(f);
        }
    }

    /// Template paths of every parameter defined at or below this object.
    pub fn parameter_paths(&'static self) -> Vec<String> {
        let mut paths = Vec::new();
        self.walk(&mut |object| {
            for parameter in object.parameters {
                paths.push(format!("{}{}", object.path, parameter.name));
            }
        });
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PARAMETERS: [ParameterInfo; 2] = [
        ParameterInfo {
            name: "Status",
            kind: ParameterKind::String,
            data_type: None,
            access: Access::ReadOnly,
            notify: ActiveNotify::Normal,
            units: None,
            size: None,
            range: None,
            values: &["Disabled", "Enabled", "Error"],
            default_value: None,
            list: false,
            hidden: false,
        },
        ParameterInfo {
            name: "Protocols",
            kind: ParameterKind::String,
            data_type: None,
            access: Access::ReadOnly,
            notify: ActiveNotify::Normal,
            units: None,
            size: None,
            range: None,
            values: &["Streaming", "File", "HTTP"],
            default_value: None,
            list: true,
            hidden: false,
        },
    ];

    static LEAF: ObjectInfo = ObjectInfo {
        path: "Device.Example.Entry.{i}.",
        access: Access::ReadWrite,
        min_entries: 0,
        max_entries: None,
        num_entries_parameter: Some("EntryNumberOfEntries"),
        enable_parameter: None,
        unique_keys: &["Alias"],
        parameters: &PARAMETERS,
        children: &[],
    };

    fn leaf() -> &'static ObjectInfo {
        &LEAF
    }

    static ROOT: ObjectInfo = ObjectInfo {
        path: "Device.Example.",
        access: Access::ReadOnly,
        min_entries: 1,
        max_entries: Some(1),
        num_entries_parameter: None,
        enable_parameter: None,
        unique_keys: &[],
        parameters: &[],
        children: &[ChildInfo {
            name: "Entry",
            multi_instance: true,
            info: leaf,
        }],
    };

    #[test]
    fn test_object_name_strips_placeholder() {
        assert_eq!(LEAF.name(), "Entry");
        assert_eq!(ROOT.name(), "Example");
        assert!(LEAF.is_multi_instance());
        assert!(!ROOT.is_multi_instance());
    }

    #[test]
    fn test_allows_value_checks_enumeration() {
        let status = LEAF.parameter("Status").unwrap();
        assert!(status.allows_value("Enabled"));
        assert!(!status.allows_value("Error_Misconfigured"));

        let protocols = LEAF.parameter("Protocols").unwrap();
        assert!(protocols.allows_value("HTTP, File"));
        assert!(!protocols.allows_value("HTTP,FTP"));
    }

    #[test]
    fn test_parameter_paths_walks_children() {
        let paths = ROOT.parameter_paths();
        assert_eq!(
            paths,
            vec![
                "Device.Example.Entry.{i}.Status".to_string(),
                "Device.Example.Entry.{i}.Protocols".to_string(),
            ]
        );
    }

    #[test]
    fn test_ranges() {
        let range = Range { min: Some(-1), max: Some(10) };
        assert!(range.contains(-1));
        assert!(!range.contains(11));
        let size = SizeRange { min: None, max: Some(64) };
        assert!(size.contains(0));
        assert!(!size.contains(65));
    }
}
