// crates/cwmp-rs-xml/src/lib.rs

#![doc = "Reads and writes cwmp-rs data model objects as XML documents."]
#![doc = ""]
#![doc = "Every model type in `cwmp-rs` carries its XML element names through `serde`."]
#![doc = "This crate drives `quick-xml` over those mappings:"]
#![doc = "- `load_object_from_str`: Parsing an object tree from an XML document."]
#![doc = "- `save_object_to_string`: Serializing an object tree to an indented XML document."]
#![doc = "- `save_object_to_string_with`: Same, with explicit `XmlOptions`."]

// --- Crate Modules ---

mod builder;
mod error;
mod parser;

// --- Public API Re-exports ---

pub use builder::{XmlOptions, save_object_to_string, save_object_to_string_with};
pub use error::XmlError;
pub use parser::load_object_from_str;
