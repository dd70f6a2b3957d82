//! Tag -> identifier mapping with duplicate rejection.

use indexmap::IndexMap;

use crate::LmtError;
use crate::lmt::Mapping;

/// Insertion-ordered tag table shared by terms and groups.
///
/// A tag maps to exactly one `termID`; registering it again is an error,
/// even for the same identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: IndexMap<String, String>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `tag` to the node `id`.
    pub fn register(&mut self, tag: impl Into<String>, id: impl Into<String>) -> Result<(), LmtError> {
        let tag = tag.into();
        let id = id.into();
        self.ensure_free(&tag, &id)?;
        self.entries.insert(tag, id);
        Ok(())
    }

    /// Fail if `tag` is already mapped; `id` is the node that would reuse it.
    pub fn ensure_free(&self, tag: &str, id: &str) -> Result<(), LmtError> {
        match self.entries.get(tag) {
            Some(existing) => Err(LmtError::DuplicateTagMapping {
                tag: tag.to_string(),
                id: id.to_string(),
                existing: existing.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Register every entry of `other`, in its order.
    pub fn merge(&mut self, other: TagMap) -> Result<(), LmtError> {
        for (tag, id) in other.entries {
            self.register(tag, id)?;
        }
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(t, i)| (t.as_str(), i.as_str()))
    }

    /// Convert into the table layout. The `group` namespace stays empty.
    pub fn into_mapping(self) -> Mapping {
        Mapping {
            term: self.entries,
            group: IndexMap::new(),
        }
    }
}
