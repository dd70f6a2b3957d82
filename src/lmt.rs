//! The Language Mapping Table.
//!
//! ```text
//! Lmt
//! ├── Metadata: {}                       (reserved)
//! ├── terms:   Vec<Term>                 (document order)
//! ├── groups:  Vec<Group>                (document order)
//! └── mapping
//!     ├── term:  IndexMap<tag, termID>   (terms and group tags)
//!     └── group: IndexMap<tag, termID>   (reserved, always empty)
//! ```
//!
//! Serialized key names follow the table layout downstream tools already
//! consume, hence the mix of `PascalCase` and `snake_case` renames.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::LmtError;

/// Metadata placeholder. Serializes as an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {}

/// A language term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "LongDescription1")]
    pub long_description_1: String,

    #[serde(rename = "AudioLanguageTag", default, skip_serializing_if = "Option::is_none")]
    pub audio_language_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language_display_name_1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language_display_name_2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description_2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "VisualLanguageDisplayName1", default, skip_serializing_if = "Option::is_none")]
    pub visual_language_display_name_1: Option<String>,

    #[serde(rename = "VisualLanguageDisplayName2", default, skip_serializing_if = "Option::is_none")]
    pub visual_language_display_name_2: Option<String>,

    #[serde(rename = "VisualLanguageTag1", default, skip_serializing_if = "Option::is_none")]
    pub visual_language_tag_1: Option<String>,

    #[serde(rename = "VisualLanguageTag2", default, skip_serializing_if = "Option::is_none")]
    pub visual_language_tag_2: Option<String>,
}

impl Term {
    /// The tag this term is registered under: the audio tag when present,
    /// otherwise the first visual tag.
    pub fn tag(&self) -> Option<&str> {
        self.audio_language_tag
            .as_deref()
            .or(self.visual_language_tag_1.as_deref())
    }
}

/// A language group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "GroupTag")]
    pub group_tag: String,

    #[serde(default)]
    pub members: Vec<Member>,
}

/// One member of a group, taken from a `relation` of the group node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "relationType")]
    pub relation_type: String,

    #[serde(rename = "relationWeight")]
    pub relation_weight: String,

    #[serde(rename = "AudioLanguageTag", default, skip_serializing_if = "Option::is_none")]
    pub audio_language_tag: Option<String>,
}

/// Tag -> source identifier lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Shared namespace for term tags and group tags.
    #[serde(default)]
    pub term: IndexMap<String, String>,

    /// Reserved.
    #[serde(default)]
    pub group: IndexMap<String, String>,
}

/// A complete Language Mapping Table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lmt {
    #[serde(rename = "Metadata", default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub terms: Vec<Term>,

    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub mapping: Mapping,
}

impl Lmt {
    /// Source identifier registered for `tag`.
    pub fn lookup(&self, tag: &str) -> Option<&str> {
        self.mapping.term.get(tag).map(String::as_str)
    }

    /// Find a term by its registered tag.
    pub fn term_by_tag(&self, tag: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.tag() == Some(tag))
    }

    /// Find a group by its group tag.
    pub fn group_by_tag(&self, tag: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.group_tag == tag)
    }

    pub fn to_json(&self) -> Result<String, LmtError> {
        serde_json::to_string(self).map_err(|e| LmtError::json(format!("Serialize error: {e}")))
    }

    pub fn to_json_pretty(&self) -> Result<String, LmtError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LmtError::json(format!("Serialize error: {e}")))
    }

    /// Load a previously serialized table.
    pub fn from_json(input: &str) -> Result<Self, LmtError> {
        serde_json::from_str(input).map_err(|e| LmtError::json(format!("JSON parse error: {e}")))
    }

    pub fn to_yaml(&self) -> Result<String, LmtError> {
        #[cfg(feature = "yaml")]
        {
            serde_yaml::to_string(self).map_err(|e| LmtError::yaml(format!("Serialize error: {e}")))
        }
        #[cfg(not(feature = "yaml"))]
        {
            Err(LmtError::Unsupported(
                "YAML output requires the 'yaml' feature".to_string(),
            ))
        }
    }
}
