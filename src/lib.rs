//! # mesa-lmt
//!
//! Converts Synaptica ZThes language thesaurus exports into Language Mapping
//! Tables (LMT): flat term and group lists plus a tag -> `termID` lookup.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → classification, group resolution, tag mapping, assembly
//!   ↓
//! source    → ZThes XML / xml2js JSON readers, SourceDocument tree
//!   ↓
//! lmt       → output table types and encodings
//!   ↓
//! profile   → root/node element names, fixed vocabulary
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lmt::{MesaSynaptica, source::ZthesXml};
//!
//! let bytes = std::fs::read("languages.xml")?;
//! let table = MesaSynaptica::default().convert(&bytes, &ZthesXml::default())?;
//! println!("{}", table.to_json_pretty()?);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Conversion core: classifier, group resolver, mapping builder, assembler
pub mod convert;

/// Language Mapping Table types and JSON/YAML encoding
pub mod lmt;

/// Source profile and fixed ZThes vocabulary
pub mod profile;

/// Source tree and readers
pub mod source;

mod error;

pub use convert::to_lmt;
pub use error::{ErrorKind, LmtError};
pub use lmt::{Group, Lmt, Mapping, Member, Term};
pub use profile::Profile;
pub use source::{SourceDocument, SourceFormat};

/// The Mesa/Synaptica converter.
///
/// Bundles the display name hosts show for this converter with the profile
/// it reads documents with.
#[derive(Clone, Debug, Default)]
pub struct MesaSynaptica {
    profile: Profile,
}

impl MesaSynaptica {
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    /// Human-readable converter name.
    pub fn name(&self) -> &'static str {
        profile::vocabulary::DISPLAY_NAME
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Convert an already parsed source document.
    pub fn to_lmt(&self, document: &SourceDocument) -> Result<Lmt, LmtError> {
        convert::to_lmt(document, &self.profile)
    }

    /// Read `input` with `format` and convert it.
    ///
    /// The converter's profile decides the root and node elements, whatever
    /// profile `format` was built with.
    pub fn convert(&self, input: &[u8], format: &dyn SourceFormat) -> Result<Lmt, LmtError> {
        tracing::debug!("Converting {} bytes of {}", input.len(), format.name());
        let document = format.read_with(input, &self.profile)?;
        self.to_lmt(&document)
    }
}
