//! Source profile and fixed vocabulary of the ZThes export.

use serde::{Deserialize, Serialize};

/// Element and label names of the Synaptica ZThes export.
pub mod vocabulary {
    /// Document root of a Synaptica export.
    pub const ROOT: &str = "Synaptica-ZThes";
    /// Top-level node element.
    pub const TERM: &str = "term";
    /// Node identifier.
    pub const TERM_ID: &str = "termID";
    /// Spelling used for identifiers inside `relation` elements.
    pub const TERM_ID_ALT: &str = "termId";
    pub const TERM_NAME: &str = "termName";
    pub const TERM_NOTE: &str = "termNote";
    pub const RELATION: &str = "relation";
    pub const RELATION_TYPE: &str = "relationType";
    pub const RELATION_WEIGHT: &str = "relationWeight";
    /// Attribute of `termNote` holding its label.
    pub const LABEL: &str = "label";

    /// Display name of the Mesa/Synaptica converter.
    pub const DISPLAY_NAME: &str = "Mesa XML exported from Synaptica";
}

/// Names of the collections a converter looks for in a source document.
///
/// The default profile matches the Synaptica export. Hosts that rename the
/// root or node element can deserialize a profile from their own settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Name of the root collection.
    pub root: String,
    /// Name of the node element inside the root collection.
    pub term: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            root: vocabulary::ROOT.to_string(),
            term: vocabulary::TERM.to_string(),
        }
    }
}

impl Profile {
    /// Create a profile with custom root and node element names.
    pub fn new(root: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            term: term.into(),
        }
    }
}
