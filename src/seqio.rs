//! Reading a **target sequence** from FASTA / FASTQ (optionally gzipped).
//!
//! ### Design
//! - Parsed with `needletail`, which sniffs FASTA vs FASTQ and gzip itself.
//! - Only the first record is used; multi-line FASTA records are joined by the parser.
//! - The returned sequence is uppercased, like every other sequence in the crate.
//!
//! ### Errors
//! Parsing/IO errors are bubbled via `anyhow::Result` to the caller.
//!
//! ### Example
//! ```no_run
//! let target = primerqc::seqio::read_target("amplicon.fa").unwrap();
//! let report = primerqc::evaluate_primer_pair("ATGCATGCAT,ACGTACGTAC", Some(&target)).unwrap();
//! println!("{}", report);
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use needletail::parse_fastx_file;
use tracing::{debug, warn};

/// Return the first record of a FASTA/FASTQ file as an uppercase sequence.
pub fn read_target<P: AsRef<Path>>(path: P) -> Result<String> {
    let p = path.as_ref();
    let mut reader = parse_fastx_file(p).with_context(|| format!("cannot open target file {}", p.display()))?;
    let record = match reader.next() {
        Some(rec) => rec.with_context(|| format!("cannot parse target file {}", p.display()))?,
        None => anyhow::bail!("target file {} contains no sequence records", p.display()),
    };
    let id = String::from_utf8_lossy(record.id()).to_string();
    let seq = String::from_utf8_lossy(&record.seq()).to_ascii_uppercase();
    debug!(id = %id, len = seq.len(), "read target sequence");
    if reader.next().is_some() {
        warn!(file = %p.display(), "target file has more than one record; using the first ({id})");
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn first_fasta_record_is_joined_and_uppercased() {
        let mut f = tempfile::Builder::new().suffix(".fa").tempfile().unwrap();
        writeln!(f, ">amplicon some description\nccatgcatgc\nATTTTT\n>second\nGGGG").unwrap();
        f.flush().unwrap();
        assert_eq!(read_target(f.path()).unwrap(), "CCATGCATGCATTTTT");
    }

    #[test]
    fn fastq_is_accepted() {
        let mut f = tempfile::Builder::new().suffix(".fq").tempfile().unwrap();
        writeln!(f, "@read1\nACGTAC\n+\nIIIIII").unwrap();
        f.flush().unwrap();
        assert_eq!(read_target(f.path()).unwrap(), "ACGTAC");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_target(dir.path().join("nope.fa")).is_err());
    }
}
