//! Core data types for the file store.
//!
//! - [`BioDataFile`]: an ingested alignment or variant file with organism, path and label
//! - [`MappedSequence`]: one entry of a file's native sequence dictionary
//! - [`FileKind`], [`FileId`], [`ResolutionMode`]: classification and lookup types
//!
//! ## Sequence Naming
//!
//! The same sequence is often named differently across files:
//!
//! | Source | Chromosome 1 | Mitochondrial |
//! |--------|--------------|---------------|
//! | UCSC   | chr1         | chrM          |
//! | NCBI   | 1            | MT            |
//! | RefSeq | NC_000001.11 | NC_012920.1   |
//!
//! Names are compared exactly. Equivalence between names comes only from the
//! store's alias table.
//!
//! [`BioDataFile`]: file::BioDataFile
//! [`MappedSequence`]: sequence::MappedSequence
//! [`FileKind`]: types::FileKind
//! [`FileId`]: types::FileId
//! [`ResolutionMode`]: types::ResolutionMode

pub mod file;
pub mod sequence;
pub mod types;
