// crates/cwmp-rs-xml/src/error.rs

use core::fmt;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;

/// Errors that can occur while reading or writing an object document.
#[derive(Debug)]
pub enum XmlError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// Writing the XML declaration failed.
    FmtError(fmt::Error),

    /// The input contained no XML content at all.
    EmptyDocument,
}

impl From<DeError> for XmlError {
    fn from(e: DeError) -> Self {
        XmlError::XmlParsing(e)
    }
}

impl From<SeError> for XmlError {
    fn from(e: SeError) -> Self {
        XmlError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for XmlError {
    fn from(e: fmt::Error) -> Self {
        XmlError::FmtError(e)
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            XmlError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            XmlError::FmtError(e) => write!(f, "Formatting error: {}", e),
            XmlError::EmptyDocument => write!(f, "XML document is empty"),
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XmlError::XmlParsing(e) => Some(e),
            XmlError::XmlSerializing(e) => Some(e),
            XmlError::FmtError(e) => Some(e),
            XmlError::EmptyDocument => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::XmlError;
    use std::error::Error;

    #[test]
    fn test_from_de_error() {
        // Create a dummy DeError by failing to parse
        let xml_err = quick_xml::de::from_str::<()>("invalid xml").unwrap_err();
        let err: XmlError = xml_err.into();
        assert!(matches!(err, XmlError::XmlParsing(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: XmlError = xml_err.into();
        assert!(matches!(err, XmlError::XmlSerializing(_)));
        assert!(err.to_string().starts_with("XML serializing error: "));
    }

    #[test]
    fn test_from_fmt_error() {
        let err: XmlError = core::fmt::Error.into();
        assert!(matches!(err, XmlError::FmtError(_)));
    }

    #[test]
    fn test_empty_document_message() {
        let err = XmlError::EmptyDocument;
        assert_eq!(err.to_string(), "XML document is empty");
        assert!(err.source().is_none());
    }
}
