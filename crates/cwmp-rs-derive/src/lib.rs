// crates/cwmp-rs-derive/src/lib.rs

//! Derive macro for `cwmp_rs::CwmpObject`.
//!
//! The derive turns `#[cwmp(...)]` attributes into static object and
//! parameter metadata, generates `set_*` / `with_*` accessors, and implements
//! path based visiting and writing.
//!
//! Parameter and child object names are taken from the field's
//! `#[serde(rename = "...")]`, so the CWMP name and the XML element name are
//! always the same string.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
//! #[serde(rename = "StaticAddress", default)]
//! #[cwmp(path = "Device.DHCPv4.Server.Pool.{i}.StaticAddress.{i}.", access = "readWrite",
//!        num_entries = "StaticAddressNumberOfEntries", enable = "Enable", unique_key = "Chaddr")]
//! pub struct StaticAddress {
//!     #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
//!     #[cwmp(access = "readWrite", default = "false")]
//!     pub enable: Option<bool>,
//! }
//! ```

mod attrs;
mod expand;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `cwmp_rs::CwmpObject` for a struct with named fields.
///
/// # Container attributes
/// * `path = "Device.X.{i}."` - template object path (required).
/// * `access = "readOnly" | "readWrite"` - whether instances may be added/deleted.
/// * `min_entries = N`, `max_entries = N` - table bounds.
/// * `num_entries = "XNumberOfEntries"` - the parent's entry counter.
/// * `enable = "Enable"` - the enable parameter of a table entry.
/// * `unique_key = "A, B"` - one unique key set, may be repeated.
///
/// # Field attributes
/// * `access`, `notify = "normal" | "canDeny" | "forceEnabled" | "forceDefaultEnabled"`.
/// * `units`, `default`, `data_type`, `values = "A|B|C"`.
/// * `min`, `max` (value range), `min_size`, `max_size` (length range).
/// * `list`, `hidden` flags.
/// * `object` marks a child object (`Option<T>`) or table (`Vec<T>`).
/// * `item = "name"` overrides the singular name used for table helpers.
#[proc_macro_derive(CwmpObject, attributes(cwmp))]
pub fn derive_cwmp_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand_derive(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
