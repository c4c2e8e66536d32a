use serde::{Deserialize, Serialize};

/// Position of a file in the store, assigned densely from 0 in ingestion order
pub type FileId = usize;

/// Structural category of a data file, selecting the sequence reader that applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// SAM/BAM/CRAM: sequence dictionary with lengths and indices
    Alignment,
    /// VCF: sequence names only
    Variant,
    /// Any kind this crate has no reader for
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alignment => write!(f, "alignment"),
            Self::Variant => write!(f, "variant"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a queried name is resolved against a single file's dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// An exact dictionary match wins; otherwise an aliased name is returned
    /// even if the file does not contain it.
    #[default]
    Legacy,
    /// Both the exact and the aliased name must appear in the file's dictionary.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_deserialize() {
        let kind: FileKind = serde_json::from_str("\"alignment\"").unwrap();
        assert_eq!(kind, FileKind::Alignment);
        let kind: FileKind = serde_json::from_str("\"variant\"").unwrap();
        assert_eq!(kind, FileKind::Variant);
        let kind: FileKind = serde_json::from_str("\"bigwig\"").unwrap();
        assert_eq!(kind, FileKind::Unknown);
    }

    #[test]
    fn test_resolution_mode_default() {
        assert_eq!(ResolutionMode::default(), ResolutionMode::Legacy);
        let mode: ResolutionMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(mode, ResolutionMode::Strict);
    }
}
