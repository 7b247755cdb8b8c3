// src/lib.rs

#![doc = "Typed CWMP (TR-069) data model objects."]
#![doc = ""]
#![doc = "Every object node of the Broadband Forum TR-181 (`Device:2`), TR-104"]
#![doc = "(`VoiceService`) and TR-196 (`FAPService`) trees that this crate covers is a"]
#![doc = "plain struct with public `Option` fields, `Default` construction and"]
#![doc = "`set_*` / `with_*` accessors."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `meta`: static per-object and per-parameter metadata (access, notification, ranges)."]
#![doc = "- `types`: CWMP leaf value types and their string forms."]
#![doc = "- `path`: parsing and matching of template, instance and wildcard paths."]
#![doc = "- `CwmpObject`: schema access, parameter walks and path-based writes."]

extern crate alloc;
// Lets `#[derive(CwmpObject)]` output refer to `::cwmp_rs` from inside this crate.
extern crate self as cwmp_rs;

// --- Crate Modules ---

pub mod error;
pub mod meta;
pub mod object;
pub mod path;
pub mod types;

// --- Data models ---

pub mod tr104;
pub mod tr181;
pub mod tr196;

// --- Public API Re-exports ---

pub use cwmp_rs_derive::CwmpObject;
pub use error::CwmpError;
pub use meta::{Access, ActiveNotify, ChildInfo, ObjectInfo, ParameterInfo, ParameterKind, Range, SizeRange};
pub use object::{CwmpObject, ParameterValue, ParameterVisitor};
pub use path::{ObjectPath, Segment};
pub use types::{
    Base64, DateTime, HexBinary, IpAddress, MacAddress, ParameterType, infinite_time, unknown_time,
};
