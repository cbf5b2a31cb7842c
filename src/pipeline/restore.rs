//! Reverse pipeline: restore anonymized documents from a saved mapping.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{copy_through, document_files, extension_lossy, file_stem_lossy, BatchSummary};
use crate::domain::{Document, IdentityPair};
use crate::error::{AnonymizerError, AnonymizerResult};
use crate::mapping::MappingStore;
use crate::substitution::substitute;

/// Batch restoration of anonymized documents.
///
/// Inverts [`AnonymizePipeline`](super::AnonymizePipeline) using the mapping
/// that run persisted. Restoration is read-only with respect to the mapping
/// file: nothing is written or mutated besides the restored documents.
pub struct RestorePipeline;

impl RestorePipeline {
    pub fn new() -> Self {
        Self
    }

    /// Runs the batch.
    ///
    /// Fails fast when `anonymized_dir` is not a directory or the mapping
    /// cannot be loaded. Files whose filename is malformed or whose
    /// pseudonym key is unknown to the mapping are copied through with a
    /// warning; the batch continues.
    pub fn run(
        &self,
        anonymized_dir: &Path,
        output_dir: &Path,
        mapping_path: &Path,
    ) -> AnonymizerResult<BatchSummary> {
        if !anonymized_dir.is_dir() {
            return Err(AnonymizerError::MissingInputDirectory(
                anonymized_dir.to_path_buf(),
            ));
        }

        let mapping = MappingStore::load(mapping_path)?;
        // Derived fresh each run from the forward mapping; never persisted.
        let reverse = mapping.reverse_index();
        debug!("reverse index holds {} pseudonym key(s)", reverse.len());

        fs::create_dir_all(output_dir).map_err(|err| AnonymizerError::io(output_dir, err))?;

        let mut summary = BatchSummary::default();

        for path in document_files(anonymized_dir)? {
            let stem = file_stem_lossy(&path);
            let outcome = match IdentityPair::from_file_stem(&stem) {
                Ok(pseudonym) => match reverse.get(&pseudonym.composite_key()) {
                    Some(original) => {
                        self.restore_document(&path, output_dir, &pseudonym, original)
                    }
                    None => Err(AnonymizerError::UnknownPseudonymKey(
                        pseudonym.composite_key(),
                    )),
                },
                Err(err) => Err(err),
            };

            match outcome {
                Ok(target) => {
                    info!("restored {} -> {}", path.display(), target.display());
                    summary.processed += 1;
                }
                Err(err) if err.is_copy_through() => match copy_through(&path, output_dir) {
                    Ok(_) => {
                        warn!("{err}; copied through unchanged");
                        summary.copied_through += 1;
                    }
                    Err(copy_err) => {
                        warn!("skipping {}: {copy_err}", path.display());
                        summary.failed += 1;
                    }
                },
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Restores one document under its reconstructed original filename.
    fn restore_document(
        &self,
        path: &Path,
        output_dir: &Path,
        pseudonym: &IdentityPair,
        original: &IdentityPair,
    ) -> AnonymizerResult<PathBuf> {
        let mut document = Document::open(path)?;
        substitute(&mut document, pseudonym, original);

        let target = output_dir.join(original.to_filename(&extension_lossy(path)));
        document.save(&target)?;
        Ok(target)
    }
}

impl Default for RestorePipeline {
    fn default() -> Self {
        Self::new()
    }
}
