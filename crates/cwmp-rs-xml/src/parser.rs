// crates/cwmp-rs-xml/src/parser.rs

use crate::error::XmlError;
use log::debug;
use serde::de::DeserializeOwned;

/// Parses an XML document into a model object.
///
/// The root element name is not checked, so a `<Pool>` document can be read
/// as any type with a compatible layout. Elements the type does not know are
/// skipped. Absent elements leave the corresponding fields unset and absent
/// table entries leave the collections empty. Entries of one table may be
/// interleaved with other elements and keep their document order.
///
/// # Errors
/// Returns `XmlError::EmptyDocument` for blank input and
/// `XmlError::XmlParsing` when the XML is malformed or a value does not
/// parse as the field's type.
pub fn load_object_from_str<T: DeserializeOwned>(xml_content: &str) -> Result<T, XmlError> {
    if xml_content.trim().is_empty() {
        return Err(XmlError::EmptyDocument);
    }
    let object = quick_xml::de::from_str(xml_content)?;
    debug!(
        "loaded {} from {} bytes of XML",
        core::any::type_name::<T>(),
        xml_content.len()
    );
    Ok(object)
}
