//! Batch pipelines over a directory of documents.
//!
//! The anonymize pipeline drives the generator, substitution engine, and
//! mapping store in the forward direction; the restore pipeline inverts it
//! using a persisted mapping. Both are strictly sequential: each document is
//! opened, transformed, and saved to completion before the next is
//! considered.

pub mod anonymize;
pub mod restore;

pub use anonymize::AnonymizePipeline;
pub use restore::RestorePipeline;

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::has_document_extension;
use crate::error::{AnonymizerError, AnonymizerResult};

/// Outcome counts for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents transformed and saved under a new filename.
    pub processed: usize,

    /// Files passed through to the output directory unchanged.
    pub copied_through: usize,

    /// Documents skipped after a per-file failure.
    pub failed: usize,
}

impl BatchSummary {
    /// Total files the run looked at.
    pub fn total(&self) -> usize {
        self.processed + self.copied_through + self.failed
    }
}

/// Collects the document files of `dir` in filesystem enumeration order.
///
/// Enumeration order is whatever the platform yields; it is not part of the
/// pipeline contract.
pub(crate) fn document_files(dir: &Path) -> AnonymizerResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| AnonymizerError::io(dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| AnonymizerError::io(dir, err))?;
        let path = entry.path();
        if path.is_file() && has_document_extension(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

/// The filename stem, lossily decoded. Paths from `read_dir` always carry a
/// final component.
pub(crate) fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The extension of a recognized document file.
pub(crate) fn extension_lossy(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Copies an unprocessable file into `output_dir` byte-for-byte under its
/// original name.
pub(crate) fn copy_through(path: &Path, output_dir: &Path) -> AnonymizerResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AnonymizerError::MalformedFilename(path.display().to_string()))?;
    let target = output_dir.join(file_name);
    fs::copy(path, &target).map_err(|err| AnonymizerError::io(path, err))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_summary_total() {
        let summary = BatchSummary {
            processed: 3,
            copied_through: 2,
            failed: 1,
        };
        assert_eq!(summary.total(), 6);
    }

    #[test]
    fn test_document_files_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("김민준_202312345.docx"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "plain").unwrap();
        fs::create_dir(dir.path().join("nested.docx")).unwrap();

        let files = document_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(file_stem_lossy(&files[0]), "김민준_202312345");
        assert_eq!(extension_lossy(&files[0]), "docx");
    }

    #[test]
    fn test_copy_through_preserves_bytes_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let source = dir.path().join("report.docx");
        fs::write(&source, b"opaque bytes, not parsed").unwrap();

        let target = copy_through(&source, &out).unwrap();
        assert_eq!(target, out.join("report.docx"));
        assert_eq!(fs::read(&target).unwrap(), b"opaque bytes, not parsed");
    }
}
