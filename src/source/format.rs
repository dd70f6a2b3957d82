//! Common trait for source document formats.

use super::{SourceDocument, Xml2Js, ZthesXml};
use crate::LmtError;
use crate::profile::Profile;

/// Trait for formats a ZThes export can be read from.
///
/// Implementations only build the [`SourceDocument`] tree. Classification
/// happens in `convert`, independent of where the tree came from.
pub trait SourceFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Profile the reader was built with.
    fn profile(&self) -> &Profile;

    /// Read a source document, collecting the root and node elements named
    /// by `profile`.
    fn read_with(&self, input: &[u8], profile: &Profile) -> Result<SourceDocument, LmtError>;

    /// Read a source document from bytes with the reader's own profile.
    fn read(&self, input: &[u8]) -> Result<SourceDocument, LmtError> {
        self.read_with(input, self.profile())
    }

    /// Validate that the input looks like this format.
    ///
    /// This is a quick check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), LmtError> {
        let _ = input;
        Ok(())
    }
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn SourceFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "xml" | "zthes" => Some(Box::new(ZthesXml::default())),
        "json" => Some(Box::new(Xml2Js::default())),
        _ => None,
    }
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<Box<dyn SourceFormat>> {
    match mime {
        "application/xml" | "text/xml" => Some(Box::new(ZthesXml::default())),
        "application/json" => Some(Box::new(Xml2Js::default())),
        _ => None,
    }
}
