//! Conversion of a ZThes source document into a Language Mapping Table.
//!
//! ## Passes
//!
//! The top-level node list is walked twice:
//!
//! ```text
//! nodes ──► term pass ──► TermPass  { terms, tags }  ─┐
//!   │       classify every node; for groups,          │
//!   │       classify each relation as a term          ├─► merge ──► Lmt
//!   │                                                 │
//!   └─────► group pass ─► GroupPass { groups, tags } ─┘
//!           resolve every node as a group
//! ```
//!
//! Each pass folds the node list into its own partial result. The group
//! pass is checked against the term-pass tags, so any duplicate tag fails
//! at the node that reuses it. Merging puts term tags first.

pub mod classify;
pub mod group;
pub mod labels;
pub mod mapping;

pub use classify::{Classification, ClassifiedTerm, TERM_REQUIRED, classify};
pub use group::{ResolvedGroup, resolve_group};
pub use labels::NoteLabel;
pub use mapping::TagMap;

use crate::LmtError;
use crate::lmt::{Group, Lmt, Metadata, Term};
use crate::profile::Profile;
use crate::source::{SourceDocument, SourceNode};

/// Terms found in the term pass, with their tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermPass {
    pub terms: Vec<Term>,
    pub tags: TagMap,
}

impl TermPass {
    fn absorb(mut self, node: &SourceNode) -> Result<Self, LmtError> {
        match classify(node)? {
            Classification::Term(classified) => self.push(classified)?,
            Classification::Group => {
                let parent = node.id.as_deref().unwrap_or_default();
                for relation in node.relations.iter().flatten() {
                    match classify(&relation.node)? {
                        Classification::Term(classified) => self.push(classified)?,
                        Classification::Group => {
                            return Err(group::nested_group(relation, parent));
                        }
                    }
                }
            }
        }
        Ok(self)
    }

    fn push(&mut self, classified: ClassifiedTerm) -> Result<(), LmtError> {
        self.tags.register(classified.tag, classified.id)?;
        self.terms.push(classified.term);
        Ok(())
    }
}

/// Groups found in the group pass, with their group tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupPass {
    pub groups: Vec<Group>,
    pub tags: TagMap,
}

impl GroupPass {
    fn absorb(mut self, node: &SourceNode, known: &TagMap) -> Result<Self, LmtError> {
        if let Some(resolved) = resolve_group(node)? {
            known.ensure_free(&resolved.group.group_tag, &resolved.id)?;
            self.tags.register(resolved.group.group_tag.clone(), resolved.id)?;
            self.groups.push(resolved.group);
        }
        Ok(self)
    }
}

/// Collect every term: top-level terms and the relations of group nodes.
pub fn collect_terms(nodes: &[SourceNode]) -> Result<TermPass, LmtError> {
    nodes
        .iter()
        .try_fold(TermPass::default(), |pass, node| pass.absorb(node))
}

/// Collect every group with its members. A group tag already in `known`
/// fails at that group.
pub fn collect_groups(nodes: &[SourceNode], known: &TagMap) -> Result<GroupPass, LmtError> {
    nodes
        .iter()
        .try_fold(GroupPass::default(), |pass, node| pass.absorb(node, known))
}

/// Merge the two partial results into a table.
pub fn assemble(terms: TermPass, groups: GroupPass) -> Result<Lmt, LmtError> {
    let mut tags = terms.tags;
    tags.merge(groups.tags)?;

    Ok(Lmt {
        metadata: Metadata::default(),
        terms: terms.terms,
        groups: groups.groups,
        mapping: tags.into_mapping(),
    })
}

/// Convert the top-level node list of a document.
pub fn to_lmt(document: &SourceDocument, profile: &Profile) -> Result<Lmt, LmtError> {
    let nodes = document
        .root(&profile.root)
        .ok_or_else(|| LmtError::MissingRootElement {
            root: profile.root.clone(),
        })?;

    let terms = collect_terms(nodes)?;
    let groups = collect_groups(nodes, &terms.tags)?;
    let lmt = assemble(terms, groups)?;

    tracing::debug!(
        "Converted {} nodes into {} terms, {} groups, {} tags",
        nodes.len(),
        lmt.terms.len(),
        lmt.groups.len(),
        lmt.mapping.term.len()
    );

    Ok(lmt)
}
