//! Group resolution: group fields and members of a group node.

use super::classify::{Classification, assign, check_node, classify};
use super::labels::NoteLabel;
use crate::LmtError;
use crate::lmt::{Group, Member};
use crate::profile::vocabulary;
use crate::source::{Relation, SourceNode};

/// A group together with the node it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGroup {
    /// `termID` of the group node.
    pub id: String,
    pub group: Group,
}

/// Read `node` as a group.
///
/// Returns `Ok(None)` for nodes without any `Language Group …` note. A group
/// takes its name from `termName` unless a `Language Group Name` note
/// overrides it, and needs both a group code and a group tag.
pub fn resolve_group(node: &SourceNode) -> Result<Option<ResolvedGroup>, LmtError> {
    let checked = check_node(node)?;

    let mut is_group = false;
    let mut name = Some(checked.name);
    let mut code = None;
    let mut group_tag = None;
    for &(label, value) in &checked.notes {
        let slot = match label {
            NoteLabel::LanguageGroupCode => &mut code,
            NoteLabel::LanguageGroupTag => &mut group_tag,
            NoteLabel::LanguageGroupName => &mut name,
            _ => continue,
        };
        is_group = true;
        assign(slot, value);
    }

    if !is_group {
        return Ok(None);
    }

    let id = checked.id;
    let code = code.ok_or_else(|| LmtError::ambiguous(id, Some("Code")))?;
    let group_tag = group_tag.ok_or_else(|| LmtError::ambiguous(id, Some("GroupTag")))?;

    let members = node
        .relations
        .iter()
        .flatten()
        .map(|relation| resolve_member(relation, id))
        .collect::<Result<Vec<_>, LmtError>>()?;

    tracing::trace!("Group {group_tag} in termID {id} has {} members", members.len());

    Ok(Some(ResolvedGroup {
        id: id.to_string(),
        group: Group {
            name: name.unwrap_or(checked.name).to_string(),
            code: code.to_string(),
            group_tag: group_tag.to_string(),
            members,
        },
    }))
}

fn resolve_member(relation: &Relation, parent: &str) -> Result<Member, LmtError> {
    let classified = match classify(&relation.node)? {
        Classification::Term(classified) => classified,
        Classification::Group => return Err(nested_group(relation, parent)),
    };

    let relation_type = relation.relation_type.as_ref().ok_or_else(|| {
        LmtError::missing_element(vocabulary::RELATION_TYPE, Some(classified.id.as_str()))
    })?;
    let relation_weight = relation.relation_weight.as_ref().ok_or_else(|| {
        LmtError::missing_element(vocabulary::RELATION_WEIGHT, Some(classified.id.as_str()))
    })?;

    Ok(Member {
        relation_type: relation_type.clone(),
        relation_weight: relation_weight.clone(),
        audio_language_tag: classified.term.audio_language_tag,
    })
}

/// Error for a relation of group `parent` that is itself a group.
pub(crate) fn nested_group(relation: &Relation, parent: &str) -> LmtError {
    LmtError::NestedGroup {
        id: relation.node.id.clone().unwrap_or_default(),
        parent: parent.to_string(),
    }
}
