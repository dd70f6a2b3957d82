//! Source documents: the in-memory tree a ZThes export is read into.
//!
//! Two readers produce the same [`SourceDocument`]:
//!
//! - **ZThes XML** ([`ZthesXml`]) - the raw Synaptica export
//! - **xml2js JSON** ([`Xml2Js`]) - the object tree a JavaScript host
//!   produces from the same XML
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  ZThes XML   │     │ xml2js JSON  │
//! └──────┬───────┘     └──────┬───────┘
//!        ▼                    ▼
//! ┌──────────────────────────────────────┐
//! │         SourceFormat trait           │
//! │  - read(&[u8]) -> SourceDocument     │
//! └──────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────┐
//! │            SourceDocument            │
//! │  roots: IndexMap<String, Vec<Node>>  │
//! └──────────────────────────────────────┘
//! ```
//!
//! Every field of a node is optional here. Whether a missing field is an
//! error is decided by the converter, which can name the offending node.

mod format;
mod json;
mod xml;

pub use format::{SourceFormat, detect_format, detect_format_from_mime};
pub use json::Xml2Js;
pub use xml::ZthesXml;

use indexmap::IndexMap;

/// A parsed source document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceDocument {
    /// Root collection name -> top-level nodes, in document order.
    pub roots: IndexMap<String, Vec<SourceNode>>,
}

impl SourceDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a single root collection.
    pub fn with_root(root: impl Into<String>, nodes: Vec<SourceNode>) -> Self {
        let mut roots = IndexMap::new();
        roots.insert(root.into(), nodes);
        Self { roots }
    }

    /// Top-level nodes of the named root collection.
    pub fn root(&self, name: &str) -> Option<&[SourceNode]> {
        self.roots.get(name).map(Vec::as_slice)
    }
}

/// A generic `term` node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceNode {
    /// `termID`.
    pub id: Option<String>,
    /// First `termName` value.
    pub name: Option<String>,
    /// `termNote` list; `None` when the node has no note element at all.
    pub notes: Option<Vec<Note>>,
    /// `relation` list; `None` when the node has no relation element.
    pub relations: Option<Vec<Relation>>,
}

impl SourceNode {
    /// Create a node with an id, a name and an empty note list.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            notes: Some(Vec::new()),
            relations: None,
        }
    }

    /// Add a labeled note.
    pub fn with_note(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes
            .get_or_insert_with(Vec::new)
            .push(Note::new(label, value));
        self
    }

    /// Add a relation sub-node.
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.get_or_insert_with(Vec::new).push(relation);
        self
    }
}

/// A labeled `termNote`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Note {
    /// The `label` attribute; empty when the note has none.
    pub label: String,
    /// Text content; `None` for an empty element.
    pub value: Option<String>,
}

impl Note {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
        }
    }
}

/// A `relation` sub-node: a node plus its relation type and weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relation {
    pub node: SourceNode,
    /// First `relationType` value.
    pub relation_type: Option<String>,
    /// First `relationWeight` value.
    pub relation_weight: Option<String>,
}

impl Relation {
    pub fn new(
        node: SourceNode,
        relation_type: impl Into<String>,
        relation_weight: impl Into<String>,
    ) -> Self {
        Self {
            node,
            relation_type: Some(relation_type.into()),
            relation_weight: Some(relation_weight.into()),
        }
    }
}
