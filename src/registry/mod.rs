//! The data file store and its supporting tables.
//!
//! Files are handed to the store once, as an ordered list, together with an
//! alias table. At construction the store labels every unlabelled file from
//! the parts of its path no other file shares, numbers files densely from 0,
//! and attaches the sequence reader for each file kind. After that the store
//! is read-only and can be shared across threads.
//!
//! ## Example
//!
//! ```rust,no_run
//! use biodata_store::core::file::BioDataFile;
//! use biodata_store::core::types::FileKind;
//! use biodata_store::registry::{AliasTable, BioDataFileStore};
//!
//! let files = vec![
//!     BioDataFile::new("/data/pf/run1/aln.bam", "Pf", FileKind::Alignment),
//!     BioDataFile::new("/data/pf/run2/aln.bam", "Pf", FileKind::Alignment),
//!     BioDataFile::new("/data/pf/calls.vcf.gz", "Pf", FileKind::Variant),
//! ];
//! let aliases: AliasTable = [("chr1", "Pf3D7_01_v3")].into_iter().collect();
//!
//! let store = BioDataFileStore::new(files, aliases).unwrap();
//!
//! // Labels are derived from the differing path segments: "run1", "run2", ...
//! for file in store.files() {
//!     println!("{}\t{}", file.file_id, file.display_label());
//! }
//!
//! // Every file recording chr1 under any of its names
//! for file in store.list_for_sequence("chr1").unwrap() {
//!     println!("{}", file.path);
//! }
//! ```

pub mod aliases;
pub mod cache;
pub mod labels;
pub mod store;

pub use aliases::AliasTable;
pub use store::{BioDataFileStore, StoreBuilder, StoreError};
