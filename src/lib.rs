//! # biodata-store
//!
//! A library for indexing alignment and variant files and resolving sequences
//! across them.
//!
//! A collection of genomic data files rarely agrees on sequence names: one BAM
//! calls the first chromosome `chr1`, a VCF calls it `1`, another file uses a
//! RefSeq accession. `biodata-store` keeps an ordered set of files, each tagged
//! with an organism, and answers:
//!
//! - **By id**: files are numbered densely from 0 in the order they were given
//! - **By organism**: exact organism match, in file order
//! - **By sequence**: every file recording a sequence, after translating the
//!   queried name through a user-supplied alias table
//!
//! Files without a label get one derived from the parts of their path that no
//! other file shares (`/data/pf/run1/aln.bam` and `/data/pf/run2/aln.bam`
//! become `run1` and `run2`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use biodata_store::StoreConfig;
//! use std::path::Path;
//!
//! let store = StoreConfig::load_from_file(Path::new("store.json"))
//!     .unwrap()
//!     .into_store()
//!     .unwrap();
//!
//! for file in store.list_for_sequence("chr1").unwrap() {
//!     let native = store.resolve_sequence_name(file.file_id, "chr1").unwrap();
//!     println!("{}: {:?}", file.display_label(), native);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: The file store, alias table, labels and dictionary cache
//! - [`core`]: Core data types for files and sequences
//! - [`parsing`]: Sequence readers for SAM/BAM/CRAM and VCF files
//! - [`config`]: JSON store definitions
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::StoreConfig;
pub use core::file::BioDataFile;
pub use core::sequence::MappedSequence;
pub use core::types::*;
pub use parsing::{ReadError, SequenceReader};
pub use registry::{AliasTable, BioDataFileStore, StoreError};
