//! xml2js JSON support.
//!
//! JavaScript hosts hand the converter the object tree `xml2js` builds from
//! the ZThes XML. Repeated elements become arrays, and a labeled note keeps
//! its text under `_` and its attributes under `$`:
//!
//! ```json
//! {
//!   "Synaptica-ZThes": {
//!     "term": [
//!       {
//!         "termID": ["1001"],
//!         "termName": ["English"],
//!         "termNote": [{ "_": "en", "$": { "label": "Code" } }]
//!       }
//!     ]
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::{Note, Relation, SourceDocument, SourceFormat, SourceNode};
use crate::LmtError;
use crate::profile::Profile;

/// xml2js JSON format handler.
#[derive(Debug, Clone, Default)]
pub struct Xml2Js {
    profile: Profile,
}

impl Xml2Js {
    /// Create a reader that collects nodes named by `profile`.
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }
}

impl SourceFormat for Xml2Js {
    fn name(&self) -> &'static str {
        "xml2js JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn read_with(&self, input: &[u8], profile: &Profile) -> Result<SourceDocument, LmtError> {
        let top: IndexMap<String, serde_json::Value> = serde_json::from_slice(input)
            .map_err(|e| LmtError::json(format!("JSON parse error: {e}")))?;

        let mut doc = SourceDocument::new();
        for (key, value) in top {
            if key != profile.root {
                tracing::trace!("Skipping top-level key {key}");
                continue;
            }
            let nodes = match value {
                // xml2js renders an empty element as an empty string
                serde_json::Value::String(text) if text.trim().is_empty() => Vec::new(),
                value => {
                    let collection: RawRoot = serde_json::from_value(value)
                        .map_err(|e| LmtError::json(format!("Invalid root {key}: {e}")))?;
                    collection
                        .into_nodes(&profile.term)
                        .map_err(|e| LmtError::json(format!("Invalid {} list: {e}", profile.term)))?
                }
            };
            tracing::debug!("Read {} {} nodes from {key}", nodes.len(), profile.term);
            doc.roots.insert(key, nodes);
        }
        Ok(doc)
    }

    fn validate(&self, input: &[u8]) -> Result<(), LmtError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| LmtError::json(format!("Invalid UTF-8: {e}")))?;

        if !content.trim_start().starts_with('{') {
            return Err(LmtError::json("Expected a JSON object"));
        }

        Ok(())
    }
}

// ============================================================================
// WIRE SHAPES
// ============================================================================

/// The root object; the node list lives under a profile-defined key.
#[derive(Deserialize)]
struct RawRoot(IndexMap<String, serde_json::Value>);

impl RawRoot {
    fn into_nodes(mut self, term: &str) -> Result<Vec<SourceNode>, serde_json::Error> {
        let Some(value) = self.0.shift_remove(term) else {
            return Ok(Vec::new());
        };
        let raw: OneOrMany<RawNode> = serde_json::from_value(value)?;
        Ok(raw.into_vec().into_iter().map(RawNode::into_node).collect())
    }
}

/// xml2js emits one-element arrays by default and bare values with
/// `explicitArray: false`; both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    fn into_first(self) -> Option<T> {
        self.into_vec().into_iter().next()
    }
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "termID", alias = "termId", default)]
    term_id: Option<OneOrMany<String>>,
    #[serde(rename = "termName", default)]
    term_name: Option<OneOrMany<String>>,
    #[serde(rename = "termNote", default)]
    term_note: Option<OneOrMany<RawNote>>,
    #[serde(default)]
    relation: Option<Box<OneOrMany<RawNode>>>,
    #[serde(rename = "relationType", default)]
    relation_type: Option<OneOrMany<String>>,
    #[serde(rename = "relationWeight", default)]
    relation_weight: Option<OneOrMany<String>>,
}

impl RawNode {
    fn into_node(self) -> SourceNode {
        SourceNode {
            id: self.term_id.and_then(OneOrMany::into_first),
            name: self.term_name.and_then(OneOrMany::into_first),
            notes: self
                .term_note
                .map(|notes| notes.into_vec().into_iter().map(RawNote::into_note).collect()),
            relations: self.relation.map(|relations| {
                (*relations)
                    .into_vec()
                    .into_iter()
                    .map(RawNode::into_relation)
                    .collect()
            }),
        }
    }

    fn into_relation(mut self) -> Relation {
        let relation_type = self.relation_type.take().and_then(OneOrMany::into_first);
        let relation_weight = self.relation_weight.take().and_then(OneOrMany::into_first);
        Relation {
            node: self.into_node(),
            relation_type,
            relation_weight,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNote {
    Labeled {
        #[serde(rename = "_", default)]
        text: Option<String>,
        #[serde(rename = "$", default)]
        attrs: RawAttrs,
    },
    /// A note element without attributes collapses to its text.
    Bare(String),
}

#[derive(Deserialize, Default)]
struct RawAttrs {
    #[serde(default)]
    label: Option<String>,
}

impl RawNote {
    fn into_note(self) -> Note {
        match self {
            Self::Labeled { text, attrs } => Note {
                label: attrs.label.unwrap_or_default(),
                value: text.filter(|t| !t.is_empty()),
            },
            Self::Bare(text) => Note {
                label: String::new(),
                value: Some(text).filter(|t| !t.is_empty()),
            },
        }
    }
}
