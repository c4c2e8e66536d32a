//! Readers that extract sequence dictionaries from data files.
//!
//! - **SAM/BAM/CRAM files**: `@SQ` lines from the alignment header, with name,
//!   length and position ([`sam::AlignmentReader`])
//! - **VCF files**: `##contig` IDs from the header, or the distinct `CHROM`
//!   values when the header declares none ([`vcf::VariantReader`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use biodata_store::parsing::{SequenceReader, VariantReader};
//! use biodata_store::parsing::sam::parse_file;
//! use std::path::Path;
//!
//! // Read from a BAM file
//! let sequences = parse_file(Path::new("sample.bam")).unwrap();
//!
//! // Or go through the reader a store uses for variant files
//! let names = VariantReader.read_sequences(Path::new("calls.vcf.gz")).unwrap();
//! ```

use std::path::Path;

use crate::core::sequence::MappedSequence;

pub mod sam;
pub mod vcf;

pub use sam::{AlignmentReader, ReadError};
pub use vcf::VariantReader;

/// Yields the ordered sequence dictionary of a data file.
///
/// Implementations open their own handle per call and release it before
/// returning. An unreadable or malformed file is an error; a file without
/// sequences is an empty, successful result.
pub trait SequenceReader: Send + Sync {
    /// Read the file's sequences in native dictionary order
    ///
    /// # Errors
    ///
    /// Returns a `ReadError` if the file cannot be opened or parsed.
    fn read_sequences(&self, path: &Path) -> Result<Vec<MappedSequence>, ReadError>;
}
