//! Sequence names from VCF files.
//!
//! VCF files declare their sequences in the header as:
//! `##contig=<ID=chr1,length=248956422>`
//!
//! Only the names are kept. When a header declares no contigs, the distinct
//! `CHROM` values of the records are used instead, in first-seen order.
//!
//! Uses noodles for file parsing, plain or bgzipped.

use indexmap::IndexSet;
use std::path::Path;
use tracing::debug;

use crate::core::sequence::MappedSequence;
use crate::parsing::sam::ReadError;
use crate::parsing::SequenceReader;
use crate::utils::validation::check_sequence_limit;

/// Reads sequence names from VCF files
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantReader;

impl SequenceReader for VariantReader {
    fn read_sequences(&self, path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
        parse_vcf_file(path)
    }
}

/// Parse a VCF file and extract its sequence names
///
/// # Errors
///
/// Returns `ReadError::Io` if the file cannot be opened, `ReadError::Noodles`
/// if the header or a record is malformed, `ReadError::UnsupportedFormat` for
/// extensions other than `.vcf`, `.vcf.gz` and `.vcf.bgz`, or
/// `ReadError::TooManySequences` if the limit is exceeded.
pub fn parse_vcf_file(path: &Path) -> Result<Vec<MappedSequence>, ReadError> {
    use noodles::vcf;

    check_vcf_extension(path)?;
    debug!(path = %path.display(), "Reading variant sequence names");

    let mut reader = vcf::io::reader::Builder::default().build_from_path(path)?;
    let header = reader
        .read_header()
        .map_err(|e| ReadError::Noodles(e.to_string()))?;

    let mut names: IndexSet<String> = IndexSet::new();
    for name in header.contigs().keys() {
        push_name(&mut names, name)?;
    }

    if names.is_empty() {
        for result in reader.records() {
            let record = result.map_err(|e| ReadError::Noodles(e.to_string()))?;
            push_name(&mut names, record.reference_sequence_name())?;
        }
    }

    Ok(names.into_iter().map(MappedSequence::named).collect())
}

fn check_vcf_extension(path: &Path) -> Result<(), ReadError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if file_name.ends_with(".vcf") || file_name.ends_with(".vcf.gz") || file_name.ends_with(".vcf.bgz")
    {
        Ok(())
    } else {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Err(ReadError::UnsupportedFormat(ext.to_string()))
    }
}

fn push_name(names: &mut IndexSet<String>, name: &str) -> Result<(), ReadError> {
    if names.contains(name) {
        return Ok(());
    }
    if check_sequence_limit(names.len()).is_some() {
        return Err(ReadError::TooManySequences(names.len()));
    }
    names.insert(name.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VCF: &str = "##fileformat=VCFv4.3
##contig=<ID=chr1,length=248956422>
##contig=<ID=chr2,length=242193529,md5=f98db672eb0993dcfdabafe2a882905c>
##contig=<ID=chrM,length=16569,assembly=GRCh38>
##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Depth\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t100\t.\tA\tG\t.\tPASS\t.
";

    const VCF_NO_CONTIGS: &str = "##fileformat=VCFv4.3
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
Pf3D7_01_v3\t100\t.\tA\tG\t.\tPASS\t.
Pf3D7_01_v3\t200\t.\tC\tT\t.\tPASS\t.
Pf3D7_02_v3\t50\t.\tG\tA\t.\tPASS\t.
";

    fn names(sequences: &[MappedSequence]) -> Vec<&str> {
        sequences.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_parse_vcf_file() {
        let mut file = tempfile::Builder::new().suffix(".vcf").tempfile().unwrap();
        file.write_all(VCF.as_bytes()).unwrap();

        let sequences = VariantReader.read_sequences(file.path()).unwrap();
        assert_eq!(names(&sequences), vec!["chr1", "chr2", "chrM"]);
    }

    #[test]
    fn test_parse_vcf_file_record_fallback() {
        let mut file = tempfile::Builder::new().suffix(".vcf").tempfile().unwrap();
        file.write_all(VCF_NO_CONTIGS.as_bytes()).unwrap();

        let sequences = VariantReader.read_sequences(file.path()).unwrap();
        assert_eq!(names(&sequences), vec!["Pf3D7_01_v3", "Pf3D7_02_v3"]);
    }

    #[test]
    fn test_parse_vcf_unsupported_extension() {
        let result = parse_vcf_file(Path::new("/data/calls.bcf"));
        assert!(matches!(result, Err(ReadError::UnsupportedFormat(ext)) if ext == "bcf"));
    }

    #[test]
    fn test_parse_vcf_missing_file() {
        let result = parse_vcf_file(Path::new("/nonexistent/dir/calls.vcf.gz"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
