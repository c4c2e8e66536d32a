use serde::{Deserialize, Serialize};

/// One entry of a file's native sequence dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedSequence {
    /// Name exactly as recorded in the file
    pub name: String,

    /// Sequence length (alignment files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,

    /// Position in the file's dictionary (alignment files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl MappedSequence {
    /// A name-only entry, as produced for variant files
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
            index: None,
        }
    }

    /// A full dictionary entry, as produced for alignment files
    pub fn with_dictionary(name: impl Into<String>, length: u64, index: usize) -> Self {
        Self {
            name: name.into(),
            length: Some(length),
            index: Some(index),
        }
    }
}
