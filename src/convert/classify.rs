//! Node classification: term, group, or neither.
//!
//! ZThes uses one `term` element for languages and language groups alike.
//! Only the labeled notes tell them apart, so the decision is made from the
//! fields a node carries:
//!
//! 1. identifier, name and note list must exist
//! 2. every note label must be known
//! 3. `Name`, `Code` and `LongDescription1` plus an audio tag or a first
//!    visual tag make a term
//! 4. otherwise any `Language Group …` label makes a group
//! 5. otherwise the node is invalid

use super::labels::NoteLabel;
use crate::LmtError;
use crate::lmt::Term;
use crate::profile::vocabulary;
use crate::source::SourceNode;

/// Term properties that must be set for a node to be a term, in the order
/// they are reported when missing.
pub const TERM_REQUIRED: [&str; 3] = ["Name", "Code", "LongDescription1"];

/// Outcome of classifying one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// A usable term.
    Term(ClassifiedTerm),
    /// Not a term, but carries group labels. Reprocess as a group.
    Group,
}

/// A term together with the mapping entry it contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedTerm {
    /// `termID` of the source node.
    pub id: String,
    /// Mapping key of the term.
    pub tag: String,
    pub term: Term,
}

/// A node whose required elements are present and whose labels are known.
pub(crate) struct CheckedNode<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub notes: Vec<(NoteLabel, Option<&'a str>)>,
}

/// Check the required elements of `node` and parse its note labels.
pub(crate) fn check_node(node: &SourceNode) -> Result<CheckedNode<'_>, LmtError> {
    let id = node
        .id
        .as_deref()
        .ok_or_else(|| LmtError::missing_element(vocabulary::TERM_ID, None))?;
    let name = node
        .name
        .as_deref()
        .ok_or_else(|| LmtError::missing_element(vocabulary::TERM_NAME, Some(id)))?;
    let notes = node
        .notes
        .as_deref()
        .ok_or_else(|| LmtError::missing_element(vocabulary::TERM_NOTE, Some(id)))?
        .iter()
        .map(|note| Ok((NoteLabel::parse(&note.label, id)?, note.value.as_deref())))
        .collect::<Result<Vec<_>, LmtError>>()?;

    Ok(CheckedNode { id, name, notes })
}

/// Overwrite `slot` with `value` when the note has one.
///
/// A later note for the same field replaces an earlier one.
pub(crate) fn assign<'a>(slot: &mut Option<&'a str>, value: Option<&'a str>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Classify a top-level node or a relation node.
pub fn classify(node: &SourceNode) -> Result<Classification, LmtError> {
    let checked = check_node(node)?;

    let mut draft = TermDraft::new(checked.name);
    for &(label, value) in &checked.notes {
        draft.apply(label, value);
    }
    draft.finish(checked.id)
}

/// Term fields collected from the notes of one node.
#[derive(Default)]
struct TermDraft<'a> {
    name: &'a str,
    code: Option<&'a str>,
    long_description_1: Option<&'a str>,
    long_description_2: Option<&'a str>,
    notes: Option<&'a str>,
    audio_language_tag: Option<&'a str>,
    audio_language_display_name_1: Option<&'a str>,
    audio_language_display_name_2: Option<&'a str>,
    visual_language_tag_1: Option<&'a str>,
    visual_language_tag_2: Option<&'a str>,
    visual_language_display_name_1: Option<&'a str>,
    visual_language_display_name_2: Option<&'a str>,
    possibly_group: bool,
}

impl<'a> TermDraft<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn apply(&mut self, label: NoteLabel, value: Option<&'a str>) {
        let slot = match label {
            NoteLabel::AudioLanguageTag => &mut self.audio_language_tag,
            NoteLabel::AudioLanguageDisplayName1 => &mut self.audio_language_display_name_1,
            NoteLabel::AudioLanguageDisplayName2 => &mut self.audio_language_display_name_2,
            NoteLabel::Code => &mut self.code,
            NoteLabel::LongDescription1 => &mut self.long_description_1,
            NoteLabel::LongDescription2 => &mut self.long_description_2,
            NoteLabel::Notes => &mut self.notes,
            NoteLabel::VisualLanguageDisplayName1 => &mut self.visual_language_display_name_1,
            NoteLabel::VisualLanguageDisplayName2 => &mut self.visual_language_display_name_2,
            NoteLabel::VisualLanguageTag1 => &mut self.visual_language_tag_1,
            NoteLabel::VisualLanguageTag2 => &mut self.visual_language_tag_2,
            NoteLabel::LanguageGroupCode
            | NoteLabel::LanguageGroupTag
            | NoteLabel::LanguageGroupName => {
                self.possibly_group = true;
                return;
            }
        };
        assign(slot, value);
    }

    fn finish(self, id: &str) -> Result<Classification, LmtError> {
        // Audio tag wins over the visual tag.
        let tag = self.audio_language_tag.or(self.visual_language_tag_1);

        if let (Some(code), Some(long_description_1), Some(tag)) =
            (self.code, self.long_description_1, tag)
        {
            return Ok(Classification::Term(ClassifiedTerm {
                id: id.to_string(),
                tag: tag.to_string(),
                term: Term {
                    name: self.name.to_string(),
                    code: code.to_string(),
                    long_description_1: long_description_1.to_string(),
                    audio_language_tag: owned(self.audio_language_tag),
                    audio_language_display_name_1: owned(self.audio_language_display_name_1),
                    audio_language_display_name_2: owned(self.audio_language_display_name_2),
                    long_description_2: owned(self.long_description_2),
                    notes: owned(self.notes),
                    visual_language_display_name_1: owned(self.visual_language_display_name_1),
                    visual_language_display_name_2: owned(self.visual_language_display_name_2),
                    visual_language_tag_1: owned(self.visual_language_tag_1),
                    visual_language_tag_2: owned(self.visual_language_tag_2),
                },
            }));
        }

        if self.possibly_group {
            return Ok(Classification::Group);
        }

        let present = [Some(self.name), self.code, self.long_description_1];
        let missing = TERM_REQUIRED
            .iter()
            .zip(present)
            .find(|(_, value)| value.is_none())
            .map(|(property, _)| *property);
        Err(LmtError::ambiguous(id, missing))
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}
