//! ZThes XML support.
//!
//! Synaptica exports its thesaurus as ZThes XML. Every node of the taxonomy,
//! whether a language or a language group, is a `term` element:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Synaptica-ZThes>
//!   <term>
//!     <termID>1001</termID>
//!     <termName>English</termName>
//!     <termNote label="Code">en</termNote>
//!     <termNote label="Audio Language Tag">en</termNote>
//!     <relation>
//!       <relationType>NT</relationType>
//!       <termId>1002</termId>
//!       <termName>English (US)</termName>
//!       <relationWeight>1</relationWeight>
//!     </relation>
//!   </term>
//! </Synaptica-ZThes>
//! ```

use super::{SourceDocument, SourceFormat};
use crate::LmtError;
use crate::profile::Profile;

/// ZThes XML format handler.
#[derive(Debug, Clone, Default)]
pub struct ZthesXml {
    profile: Profile,
}

impl ZthesXml {
    /// Create a reader that collects nodes named by `profile`.
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }
}

impl SourceFormat for ZthesXml {
    fn name(&self) -> &'static str {
        "ZThes XML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xml", "zthes"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn read_with(&self, input: &[u8], profile: &Profile) -> Result<SourceDocument, LmtError> {
        #[cfg(feature = "xml")]
        {
            let root = reader::read_tree(input)?;
            Ok(reader::build_document(root, profile))
        }
        #[cfg(not(feature = "xml"))]
        {
            let _ = (input, profile);
            Err(LmtError::Unsupported(
                "ZThes XML reading requires the 'xml' feature".to_string(),
            ))
        }
    }

    fn validate(&self, input: &[u8]) -> Result<(), LmtError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| LmtError::xml(format!("Invalid UTF-8: {e}")))?;

        if !has_start_tag(content, &self.profile.root) {
            return Err(LmtError::MissingRootElement {
                root: self.profile.root.clone(),
            });
        }

        Ok(())
    }
}

/// True if `content` opens an element named exactly `name`.
fn has_start_tag(content: &str, name: &str) -> bool {
    let open = format!("<{name}");
    content.match_indices(&open).any(|(at, _)| {
        content[at + open.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
    })
}

// ============================================================================
// XML READER (requires xml feature)
// ============================================================================

#[cfg(feature = "xml")]
mod reader {
    use super::*;
    use crate::profile::vocabulary;
    use crate::source::{Note, Relation, SourceNode};
    use quick_xml::Reader;
    use quick_xml::events::{BytesStart, Event};

    /// An element with its attributes, text and children, in document order.
    #[derive(Debug, Default)]
    pub struct XmlElement {
        name: String,
        attributes: Vec<(String, String)>,
        text: String,
        children: Vec<XmlElement>,
    }

    impl XmlElement {
        fn attribute(&self, key: &str) -> Option<&str> {
            self.attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }

        fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
            self.children.iter().filter(move |c| c.name == name)
        }

        fn first_text(&self, names: &[&str]) -> Option<String> {
            self.children
                .iter()
                .find(|c| names.contains(&c.name.as_str()))
                .map(|c| c.text.clone())
        }
    }

    pub fn read_tree(input: &[u8]) -> Result<XmlElement, LmtError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(start_element(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    let element = start_element(e)?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        close_element(&mut stack, &mut root, element)?;
                    }
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| LmtError::xml(format!("Text error: {e}")))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    let text = std::str::from_utf8(c)
                        .map_err(|e| LmtError::xml(format!("CDATA error: {e}")))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(LmtError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(LmtError::xml(format!("Unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| LmtError::xml("Document has no root element"))
    }

    fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, LmtError> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| LmtError::xml(format!("Invalid tag name: {e}")))?
            .to_string();

        let mut attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| LmtError::xml(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| LmtError::xml(format!("Attribute key error: {e}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| LmtError::xml(format!("Attribute value error: {e}")))?
                .to_string();
            attributes.push((key, value));
        }

        Ok(XmlElement {
            name,
            attributes,
            ..XmlElement::default()
        })
    }

    fn close_element(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<(), LmtError> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_some() => {
                return Err(LmtError::xml(format!(
                    "Second root element <{}>",
                    element.name
                )));
            }
            None => *root = Some(element),
        }
        Ok(())
    }

    pub fn build_document(root: XmlElement, profile: &Profile) -> SourceDocument {
        let nodes: Vec<SourceNode> = root
            .children_named(&profile.term)
            .map(node_from_element)
            .collect();

        tracing::debug!(
            "Read {} <{}> nodes from <{}>",
            nodes.len(),
            profile.term,
            root.name
        );

        SourceDocument::with_root(root.name, nodes)
    }

    fn node_from_element(element: &XmlElement) -> SourceNode {
        let notes: Vec<Note> = element
            .children_named(vocabulary::TERM_NOTE)
            .map(|note| Note {
                label: note.attribute(vocabulary::LABEL).unwrap_or_default().to_string(),
                value: (!note.text.is_empty()).then(|| note.text.clone()),
            })
            .collect();

        let relations: Vec<Relation> = element
            .children_named(vocabulary::RELATION)
            .map(|relation| Relation {
                node: node_from_element(relation),
                relation_type: relation.first_text(&[vocabulary::RELATION_TYPE]),
                relation_weight: relation.first_text(&[vocabulary::RELATION_WEIGHT]),
            })
            .collect();

        SourceNode {
            id: element.first_text(&[vocabulary::TERM_ID, vocabulary::TERM_ID_ALT]),
            name: element.first_text(&[vocabulary::TERM_NAME]),
            notes: (!notes.is_empty()).then_some(notes),
            relations: (!relations.is_empty()).then_some(relations),
        }
    }
}
