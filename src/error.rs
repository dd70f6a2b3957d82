//! Error types for LMT conversion.

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Every error is fatal: the converter never recovers locally and never
/// returns a partially built table.
#[derive(Debug, Error)]
pub enum LmtError {
    /// The document does not expose the expected root collection.
    #[error("XML root element {root} not found")]
    MissingRootElement { root: String },

    /// A node lacks its identifier, name, note list, or a relation field.
    #[error("required element {element} not found{}", in_node(.id))]
    MissingRequiredElement {
        element: &'static str,
        id: Option<String>,
    },

    /// A note carries a label outside the recognized vocabulary.
    #[error("unknown termNote with label={label:?} in termID {id}")]
    UnknownNoteLabel { label: String, id: String },

    /// The node is neither a usable term nor a recognizable group.
    #[error("{}", ambiguous_message(.id, .missing))]
    AmbiguousOrInvalidNode {
        id: String,
        missing: Option<&'static str>,
    },

    /// Two nodes try to register the same tag.
    #[error("duplicate unique tag {tag} in termID {id} (already mapped to termID {existing})")]
    DuplicateTagMapping {
        tag: String,
        id: String,
        existing: String,
    },

    /// A relation of a group is itself a group.
    #[error("relation termID {id} of group termID {parent} is itself a group")]
    NestedGroup { id: String, parent: String },

    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Unsupported feature or format variant.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Discriminant of an [`LmtError`], for callers that branch on the failure
/// class without matching fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRootElement,
    MissingRequiredElement,
    UnknownNoteLabel,
    AmbiguousOrInvalidNode,
    DuplicateTagMapping,
    NestedGroup,
    Xml,
    Json,
    Yaml,
    Unsupported,
}

impl LmtError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a missing element error for a node that may not have an id yet.
    pub fn missing_element(element: &'static str, id: Option<&str>) -> Self {
        Self::MissingRequiredElement {
            element,
            id: id.map(str::to_string),
        }
    }

    pub fn unknown_label(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UnknownNoteLabel {
            label: label.into(),
            id: id.into(),
        }
    }

    /// Create an error for a node where `missing` names the first absent
    /// required property, if any.
    pub fn ambiguous(id: impl Into<String>, missing: Option<&'static str>) -> Self {
        Self::AmbiguousOrInvalidNode {
            id: id.into(),
            missing,
        }
    }

    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRootElement { .. } => ErrorKind::MissingRootElement,
            Self::MissingRequiredElement { .. } => ErrorKind::MissingRequiredElement,
            Self::UnknownNoteLabel { .. } => ErrorKind::UnknownNoteLabel,
            Self::AmbiguousOrInvalidNode { .. } => ErrorKind::AmbiguousOrInvalidNode,
            Self::DuplicateTagMapping { .. } => ErrorKind::DuplicateTagMapping,
            Self::NestedGroup { .. } => ErrorKind::NestedGroup,
            Self::Xml(_) => ErrorKind::Xml,
            Self::Json(_) => ErrorKind::Json,
            Self::Yaml(_) => ErrorKind::Yaml,
            Self::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

fn in_node(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" in termID {id}"),
        None => String::new(),
    }
}

fn ambiguous_message(id: &str, missing: &Option<&'static str>) -> String {
    match missing {
        Some(property) => format!("did not set term property {property} in termID {id}"),
        None => format!("termID {id} is neither group nor term"),
    }
}
