use serde::{Deserialize, Serialize};

use crate::core::types::{FileId, FileKind};

/// A single ingested genomic data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioDataFile {
    /// Filesystem location, also the source of the derived label
    pub path: String,

    /// Organism this file belongs to
    pub organism: String,

    /// Which reader applies to this file
    pub kind: FileKind,

    /// Display label; filled in by the store when not supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Assigned by the store at construction
    #[serde(default, skip_deserializing)]
    pub file_id: FileId,
}

impl BioDataFile {
    pub fn new(path: impl Into<String>, organism: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            organism: organism.into(),
            kind,
            label: None,
            file_id: 0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label for display, empty if none has been assigned
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Non-empty path segments, in path order
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}
