//! The closed set of `termNote` labels.

use crate::LmtError;

/// Every note label the converter understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteLabel {
    AudioLanguageTag,
    AudioLanguageDisplayName1,
    AudioLanguageDisplayName2,
    Code,
    LongDescription1,
    LongDescription2,
    Notes,
    VisualLanguageDisplayName1,
    VisualLanguageDisplayName2,
    VisualLanguageTag1,
    VisualLanguageTag2,
    LanguageGroupCode,
    LanguageGroupTag,
    LanguageGroupName,
}

impl NoteLabel {
    pub const ALL: [NoteLabel; 14] = [
        Self::AudioLanguageTag,
        Self::AudioLanguageDisplayName1,
        Self::AudioLanguageDisplayName2,
        Self::Code,
        Self::LongDescription1,
        Self::LongDescription2,
        Self::Notes,
        Self::VisualLanguageDisplayName1,
        Self::VisualLanguageDisplayName2,
        Self::VisualLanguageTag1,
        Self::VisualLanguageTag2,
        Self::LanguageGroupCode,
        Self::LanguageGroupTag,
        Self::LanguageGroupName,
    ];

    /// The label text as it appears in the export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AudioLanguageTag => "Audio Language Tag",
            Self::AudioLanguageDisplayName1 => "Audio Language Display Name 1",
            Self::AudioLanguageDisplayName2 => "Audio Language Display Name 2",
            Self::Code => "Code",
            Self::LongDescription1 => "Long Description 1",
            Self::LongDescription2 => "Long Description 2",
            Self::Notes => "Notes",
            Self::VisualLanguageDisplayName1 => "Visual Language Display Name 1",
            Self::VisualLanguageDisplayName2 => "Visual Language Display Name 2",
            Self::VisualLanguageTag1 => "Visual Language Tag 1",
            Self::VisualLanguageTag2 => "Visual Language Tag 2",
            Self::LanguageGroupCode => "Language Group Code",
            Self::LanguageGroupTag => "Language Group Tag",
            Self::LanguageGroupName => "Language Group Name",
        }
    }

    /// Look up a label by its exact export text.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    /// Parse the label of a note on node `id`. Unknown labels are fatal.
    pub fn parse(label: &str, id: &str) -> Result<Self, LmtError> {
        Self::from_label(label).ok_or_else(|| LmtError::unknown_label(label, id))
    }

    /// Labels that only mark a node as a language group.
    pub fn is_group_label(self) -> bool {
        matches!(
            self,
            Self::LanguageGroupCode | Self::LanguageGroupTag | Self::LanguageGroupName
        )
    }
}

impl std::fmt::Display for NoteLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
