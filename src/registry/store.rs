use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::file::BioDataFile;
use crate::core::sequence::MappedSequence;
use crate::core::types::{FileId, FileKind, ResolutionMode};
use crate::parsing::{AlignmentReader, ReadError, SequenceReader, VariantReader};
use crate::registry::aliases::AliasTable;
use crate::registry::cache::{SequenceCache, SharedSequences, DEFAULT_CACHE_CAPACITY};
use crate::registry::labels::compute_labels;
use crate::utils::validation::{validate_file_entry, ValidationError};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid file at position {index} ({path:?}): {source}")]
    InvalidFile {
        index: usize,
        path: String,
        source: ValidationError,
    },
}

/// Configures and builds a [`BioDataFileStore`]
pub struct StoreBuilder {
    aliases: AliasTable,
    alignment_reader: Arc<dyn SequenceReader>,
    variant_reader: Arc<dyn SequenceReader>,
    resolution: ResolutionMode,
    cache_capacity: usize,
}

impl StoreBuilder {
    fn new() -> Self {
        Self {
            aliases: AliasTable::new(),
            alignment_reader: Arc::new(AlignmentReader),
            variant_reader: Arc::new(VariantReader),
            resolution: ResolutionMode::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    #[must_use]
    pub fn aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn alignment_reader(mut self, reader: impl SequenceReader + 'static) -> Self {
        self.alignment_reader = Arc::new(reader);
        self
    }

    #[must_use]
    pub fn variant_reader(mut self, reader: impl SequenceReader + 'static) -> Self {
        self.variant_reader = Arc::new(reader);
        self
    }

    #[must_use]
    pub fn resolution(mut self, resolution: ResolutionMode) -> Self {
        self.resolution = resolution;
        self
    }

    /// Number of file dictionaries kept in memory; 0 re-reads on every query
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Validate, label and number `files`, then build the store
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFile` for the first entry with a blank or
    /// malformed path, or a blank organism.
    pub fn build(self, mut files: Vec<BioDataFile>) -> Result<BioDataFileStore, StoreError> {
        for (index, file) in files.iter().enumerate() {
            validate_file_entry(file).map_err(|source| StoreError::InvalidFile {
                index,
                path: file.path.clone(),
                source,
            })?;
        }

        compute_labels(&mut files);

        let mut readers = Vec::with_capacity(files.len());
        for (file_id, file) in files.iter_mut().enumerate() {
            file.file_id = file_id;
            info!(
                file_id,
                kind = %file.kind,
                path = %file.path,
                label = %file.display_label(),
                "Assigned file id"
            );

            readers.push(match file.kind {
                FileKind::Alignment => Some(Arc::clone(&self.alignment_reader)),
                FileKind::Variant => Some(Arc::clone(&self.variant_reader)),
                FileKind::Unknown => None,
            });
        }

        info!(
            files = files.len(),
            aliases = self.aliases.len(),
            resolution = ?self.resolution,
            "Built data file store"
        );

        Ok(BioDataFileStore {
            files,
            readers,
            aliases: self.aliases,
            resolution: self.resolution,
            cache: SequenceCache::new(self.cache_capacity),
        })
    }
}

/// A store of data files that answers queries by file id, organism and
/// (possibly aliased) sequence name.
///
/// The file list, labels and alias table are fixed at construction. Sequence
/// dictionaries are read from disk on demand and kept in a bounded cache.
pub struct BioDataFileStore {
    files: Vec<BioDataFile>,
    /// Reader for each file, by file id; `None` for unknown kinds
    readers: Vec<Option<Arc<dyn SequenceReader>>>,
    aliases: AliasTable,
    resolution: ResolutionMode,
    cache: SequenceCache,
}

impl BioDataFileStore {
    /// Build a store with the default readers, legacy resolution and cache
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFile` if any entry fails validation.
    pub fn new(files: Vec<BioDataFile>, aliases: AliasTable) -> Result<Self, StoreError> {
        Self::builder().aliases(aliases).build(files)
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub fn get_file(&self, file_id: FileId) -> Option<&BioDataFile> {
        self.files.get(file_id)
    }

    pub fn files(&self) -> &[BioDataFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn resolution(&self) -> ResolutionMode {
        self.resolution
    }

    /// Files whose organism equals `organism` exactly, in ingestion order
    pub fn list_for_organism(&self, organism: &str) -> Vec<&BioDataFile> {
        self.files
            .iter()
            .filter(|file| file.organism == organism)
            .collect()
    }

    /// The file's native sequence dictionary, or `None` for an unknown id.
    /// Files of unknown kind have an empty dictionary.
    ///
    /// # Errors
    ///
    /// Returns a `ReadError` if the file cannot be opened or parsed.
    pub fn sequences_for_file(&self, file_id: FileId) -> Result<Option<SharedSequences>, ReadError> {
        let Some(file) = self.files.get(file_id) else {
            return Ok(None);
        };

        let Some(reader) = &self.readers[file_id] else {
            warn!(file_id, path = %file.path, "No sequence reader for file kind");
            return Ok(Some(Arc::new(Vec::new())));
        };

        let path = Path::new(&file.path);
        self.cache
            .get_or_load(file_id, || reader.read_sequences(path))
            .map(Some)
    }

    /// The name under which `name` is recorded in the given file, if any.
    ///
    /// # Errors
    ///
    /// Returns a `ReadError` if the file's dictionary cannot be read.
    pub fn resolve_sequence_name(
        &self,
        file_id: FileId,
        name: &str,
    ) -> Result<Option<String>, ReadError> {
        let sequences = self.sequences_for_file(file_id)?.unwrap_or_default();
        Ok(self.resolve_against(&sequences, name))
    }

    fn resolve_against(&self, sequences: &[MappedSequence], name: &str) -> Option<String> {
        match self.resolution {
            ResolutionMode::Legacy => {
                // The alias wins from the first entry on, whether or not the
                // file records the aliased name.
                for sequence in sequences {
                    if sequence.name == name {
                        return Some(sequence.name.clone());
                    }
                    if let Some(reference) = self.aliases.get(name) {
                        return Some(reference.to_string());
                    }
                }
                None
            }
            ResolutionMode::Strict => {
                let contains = |candidate: &str| sequences.iter().any(|s| s.name == candidate);
                if contains(name) {
                    return Some(name.to_string());
                }
                self.aliases
                    .get(name)
                    .filter(|reference| contains(reference))
                    .map(str::to_string)
            }
        }
    }

    /// Reference name for `name`, or `name` itself when it is not an alias
    pub fn alias_to_reference<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.alias_to_reference(name)
    }

    /// First alias mapping to `name`, or `name` itself
    pub fn reference_to_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.reference_to_alias(name)
    }

    /// Every file containing `name` after alias resolution, once each, in
    /// ingestion order.
    ///
    /// # Errors
    ///
    /// Returns the first `ReadError` hit while reading a file's dictionary.
    pub fn list_for_sequence(&self, name: &str) -> Result<Vec<&BioDataFile>, ReadError> {
        let mut matched: IndexMap<FileId, &BioDataFile> = IndexMap::new();

        for file in &self.files {
            if matched.contains_key(&file.file_id) {
                continue;
            }

            let sequences = self.sequences_for_file(file.file_id)?.unwrap_or_default();
            let Some(resolved) = self.resolve_against(&sequences, name) else {
                continue;
            };

            if sequences.iter().any(|s| s.name == resolved) {
                matched.insert(file.file_id, file);
            }
        }

        Ok(matched.into_values().collect())
    }
}

impl std::fmt::Debug for BioDataFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BioDataFileStore")
            .field("files", &self.files)
            .field("aliases", &self.aliases)
            .field("resolution", &self.resolution)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
