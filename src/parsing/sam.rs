use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::MappedSequence;
use crate::parsing::SequenceReader;
use crate::utils::validation::check_sequence_limit;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Too many sequences: {0} exceeds maximum allowed (100000)")]
    TooManySequences(usize),
}

/// Reads the `@SQ` dictionary of SAM/BAM/CRAM files
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentReader;

impl SequenceReader for AlignmentReader {
    fn read_sequences(&self, path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
        parse_file(path)
    }
}

/// Parse a SAM/BAM/CRAM file and extract its sequence dictionary
///
/// # Errors
///
/// Returns `ReadError::Io` if the file cannot be read, `ReadError::Noodles` if
/// parsing fails, `ReadError::UnsupportedFormat` for unknown extensions, or
/// `ReadError::TooManySequences` if the limit is exceeded.
pub fn parse_file(path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    debug!(path = %path.display(), "Reading alignment sequence dictionary");

    match extension.as_deref() {
        Some("sam") => parse_sam_file(path),
        Some("bam") => parse_bam_file(path),
        Some("cram") => parse_cram_file(path),
        Some(ext) => Err(ReadError::UnsupportedFormat(ext.to_string())),
        None => parse_sam_file(path),
    }
}

/// Parse a SAM file (text format)
fn parse_sam_file(path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
    use noodles::sam;

    let mut reader = std::fs::File::open(path)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ReadError::Noodles(e.to_string()))?;

    header_to_sequences(&header)
}

/// Parse a BAM file (binary format)
fn parse_bam_file(path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ReadError::Noodles(e.to_string()))?;

    header_to_sequences(&header)
}

/// Parse a CRAM file
fn parse_cram_file(path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
    use noodles::cram;

    let mut reader = std::fs::File::open(path).map(cram::io::Reader::new)?;

    reader
        .read_file_definition()
        .map_err(|e| ReadError::Noodles(e.to_string()))?;

    let header = reader
        .read_file_header()
        .map_err(|e| ReadError::Noodles(e.to_string()))?;

    header_to_sequences(&header)
}

/// Convert a noodles header into dictionary entries, in header order
fn header_to_sequences(header: &noodles::sam::Header) -> Result<Vec<MappedSequence>, ReadError> {
    let mut sequences = Vec::new();

    for (index, (name, map)) in header.reference_sequences().iter().enumerate() {
        if check_sequence_limit(sequences.len()).is_some() {
            return Err(ReadError::TooManySequences(sequences.len()));
        }

        let length = map.length().get() as u64;
        sequences.push(MappedSequence::with_dictionary(
            name.to_string(),
            length,
            index,
        ));
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "@HD\tVN:1.6\tSO:coordinate
@SQ\tSN:chr1\tLN:248956422\tM5:6aef897c3d6ff0c78aff06ac189178dd
@SQ\tSN:chr2\tLN:242193529
@SQ\tSN:chrM\tLN:16569
@RG\tID:sample1
";

    #[test]
    fn test_parse_sam_file() {
        let mut file = tempfile::Builder::new().suffix(".sam").tempfile().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();

        let sequences = AlignmentReader.read_sequences(file.path()).unwrap();
        let names: Vec<&str> = sequences.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["chr1", "chr2", "chrM"]);
        assert_eq!(sequences[1].length, Some(242_193_529));
        assert_eq!(sequences[1].index, Some(1));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file(Path::new("/nonexistent/dir/sample.bam"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[test]
    fn test_parse_unsupported_extension() {
        let result = parse_file(Path::new("/data/sample.fastq"));
        assert!(matches!(result, Err(ReadError::UnsupportedFormat(ext)) if ext == "fastq"));
    }
}
