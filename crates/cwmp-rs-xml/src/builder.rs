// crates/cwmp-rs-xml/src/builder.rs

use crate::error::XmlError;
use core::fmt::Write;
use log::debug;
use serde::Serialize;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n";

/// Output settings for [`save_object_to_string_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Write the `<?xml ...?>` declaration line.
    pub declaration: bool,
    /// Indentation character and width per level. `None` writes one line.
    pub indent: Option<(char, usize)>,
    /// Root element name. `None` uses the type's own element name.
    pub root: Option<String>,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            declaration: true,
            indent: Some((' ', 2)),
            root: None,
        }
    }
}

impl XmlOptions {
    /// Single-line output without a declaration, as embedded in a larger
    /// document.
    pub fn compact() -> Self {
        Self {
            declaration: false,
            indent: None,
            root: None,
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }
}

/// Serializes a model object into an XML document with the default
/// [`XmlOptions`].
///
/// Unset parameters and empty tables are left out of the document.
///
/// # Errors
/// Returns an `XmlError` if serialization fails.
pub fn save_object_to_string<T: Serialize>(object: &T) -> Result<String, XmlError> {
    save_object_to_string_with(object, &XmlOptions::default())
}

/// Serializes a model object into an XML document.
///
/// # Errors
/// Returns an `XmlError` if serialization fails or the root name is not a
/// valid XML name.
pub fn save_object_to_string_with<T: Serialize>(
    object: &T,
    options: &XmlOptions,
) -> Result<String, XmlError> {
    let mut buffer = String::new();
    if options.declaration {
        write!(&mut buffer, "{}", XML_DECLARATION)?;
    }

    let mut serializer = match options.root.as_deref() {
        Some(root) => quick_xml::se::Serializer::with_root(&mut buffer, Some(root))?,
        None => quick_xml::se::Serializer::new(&mut buffer),
    };
    if let Some((indent_char, indent_size)) = options.indent {
        serializer.indent(indent_char, indent_size);
    }
    object.serialize(serializer)?;

    debug!(
        "saved {} as {} bytes of XML",
        core::any::type_name::<T>(),
        buffer.len()
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename = "Entry")]
    struct Entry {
        #[serde(rename = "Enable")]
        enable: bool,
        #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[test]
    fn test_default_options() {
        let options = XmlOptions::default();
        assert!(options.declaration);
        assert_eq!(options.indent, Some((' ', 2)));
        assert_eq!(options.root, None);
    }

    #[test]
    fn test_compact_output() {
        let entry = Entry {
            enable: true,
            name: None,
        };
        let xml = save_object_to_string_with(&entry, &XmlOptions::compact()).unwrap();
        assert_eq!(xml, "<Entry><Enable>true</Enable></Entry>");
    }

    #[test]
    fn test_root_override() {
        let entry = Entry {
            enable: false,
            name: Some("a".into()),
        };
        let options = XmlOptions::compact().with_root("Item");
        let xml = save_object_to_string_with(&entry, &options).unwrap();
        assert_eq!(xml, "<Item><Enable>false</Enable><Name>a</Name></Item>");
    }

    #[test]
    fn test_declaration_is_first_line() {
        let entry = Entry {
            enable: true,
            name: None,
        };
        let xml = save_object_to_string(&entry).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("\n  <Enable>true</Enable>\n"));
    }
}
