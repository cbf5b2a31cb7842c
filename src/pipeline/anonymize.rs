//! Forward pipeline: anonymize a batch of documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{copy_through, document_files, extension_lossy, file_stem_lossy, BatchSummary};
use crate::domain::{Document, IdentityPair};
use crate::error::{AnonymizerError, AnonymizerResult};
use crate::mapping::MappingStore;
use crate::pseudonym::PseudonymGenerator;
use crate::substitution::substitute;

/// Batch anonymization of every document in an input directory.
///
/// For each well-formed `<name>_<student_id>.docx` file the pipeline draws a
/// pseudonym pair, rewrites the document text, saves the result under the
/// pseudonym filename, and records the correspondence. The accumulated
/// mapping is persisted once, after the whole batch: an interrupted run
/// writes no mapping file at all.
pub struct AnonymizePipeline {
    generator: PseudonymGenerator,
}

impl AnonymizePipeline {
    /// Creates a pipeline with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_generator(PseudonymGenerator::from_entropy())
    }

    /// Creates a pipeline around a caller-supplied generator, letting tests
    /// seed deterministic pseudonym sequences.
    pub fn with_generator(generator: PseudonymGenerator) -> Self {
        Self { generator }
    }

    /// Runs the batch.
    ///
    /// Fails fast when `input_dir` is not a directory. Per-file problems
    /// never abort the batch: malformed filenames are copied through with a
    /// warning, other per-file failures are logged and skipped.
    pub fn run(
        &mut self,
        input_dir: &Path,
        output_dir: &Path,
        mapping_path: &Path,
    ) -> AnonymizerResult<BatchSummary> {
        if !input_dir.is_dir() {
            return Err(AnonymizerError::MissingInputDirectory(
                input_dir.to_path_buf(),
            ));
        }

        // Idempotent: succeeds when the directory already exists.
        fs::create_dir_all(output_dir).map_err(|err| AnonymizerError::io(output_dir, err))?;

        let mut mapping = MappingStore::new();
        let mut summary = BatchSummary::default();

        for path in document_files(input_dir)? {
            let stem = file_stem_lossy(&path);
            match IdentityPair::from_file_stem(&stem) {
                Ok(original) => {
                    match self.anonymize_document(&path, output_dir, &original, &mut mapping) {
                        Ok(target) => {
                            info!("anonymized {} -> {}", path.display(), target.display());
                            summary.processed += 1;
                        }
                        Err(err) => {
                            warn!("skipping {}: {err}", path.display());
                            summary.failed += 1;
                        }
                    }
                }
                Err(err) => match copy_through(&path, output_dir) {
                    Ok(_) => {
                        warn!("{err}; copied through unchanged");
                        summary.copied_through += 1;
                    }
                    Err(copy_err) => {
                        warn!("skipping {}: {copy_err}", path.display());
                        summary.failed += 1;
                    }
                },
            }
        }

        // Single write at batch end; per-file persistence is intentionally
        // not attempted.
        mapping.save(mapping_path)?;

        Ok(summary)
    }

    /// Anonymizes one document and records its mapping entry.
    fn anonymize_document(
        &mut self,
        path: &Path,
        output_dir: &Path,
        original: &IdentityPair,
        mapping: &mut MappingStore,
    ) -> AnonymizerResult<PathBuf> {
        let pseudonym = self.generator.generate_pair();

        let mut document = Document::open(path)?;
        let report = substitute(&mut document, original, &pseudonym);
        debug!(
            "replaced {} name and {} student-id occurrence(s) in {}",
            report.name_replacements,
            report.student_id_replacements,
            path.display()
        );

        let target = output_dir.join(pseudonym.to_filename(&extension_lossy(path)));
        document.save(&target)?;

        mapping.record(original, &pseudonym);
        Ok(target)
    }
}

impl Default for AnonymizePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Table;

    fn write_report(dir: &Path, name: &str, student_id: &str) {
        let doc = Document {
            paragraphs: vec![format!("이름: {name}, 학번: {student_id}")],
            tables: vec![Table::new(vec![vec![name.to_string(), student_id.to_string()]])],
        };
        doc.save(&dir.join(format!("{name}_{student_id}.docx"))).unwrap();
    }

    fn seeded_pipeline() -> AnonymizePipeline {
        AnonymizePipeline::with_generator(PseudonymGenerator::from_seed(99))
    }

    #[test]
    fn test_missing_input_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = seeded_pipeline()
            .run(
                &dir.path().join("absent"),
                &dir.path().join("anonymized"),
                &dir.path().join("mapping.json"),
            )
            .unwrap_err();
        assert!(matches!(err, AnonymizerError::MissingInputDirectory(_)));
        // Fail-fast means no side effects at all.
        assert!(!dir.path().join("anonymized").exists());
        assert!(!dir.path().join("mapping.json").exists());
    }

    #[test]
    fn test_one_mapping_entry_per_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_report(&input, "김민준", "202312345");
        write_report(&input, "이서연", "202011111");

        let mapping_path = dir.path().join("mapping.json");
        let summary = seeded_pipeline()
            .run(&input, &dir.path().join("anonymized"), &mapping_path)
            .unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.copied_through, 0);

        let mapping = MappingStore::load(&mapping_path).unwrap();
        assert_eq!(mapping.len(), 2);
        assert!(mapping.get("김민준_202312345").is_some());
        assert!(mapping.get("이서연_202011111").is_some());
    }

    #[test]
    fn test_output_filename_matches_mapping_entry() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("out");
        let output = dir.path().join("anonymized");
        fs::create_dir(&input).unwrap();
        write_report(&input, "김민준", "202312345");

        let mapping_path = dir.path().join("mapping.json");
        seeded_pipeline().run(&input, &output, &mapping_path).unwrap();

        let entry_pseudonym = MappingStore::load(&mapping_path)
            .unwrap()
            .get("김민준_202312345")
            .unwrap()
            .pseudonym();

        let saved = output.join(entry_pseudonym.to_filename("docx"));
        assert!(saved.exists());

        let document = Document::open(&saved).unwrap();
        assert_eq!(
            document.paragraphs[0],
            format!(
                "이름: {}, 학번: {}",
                entry_pseudonym.name, entry_pseudonym.student_id
            )
        );
    }

    #[test]
    fn test_run_twice_against_same_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("out");
        let output = dir.path().join("anonymized");
        fs::create_dir(&input).unwrap();
        write_report(&input, "김민준", "202312345");

        let mapping_path = dir.path().join("mapping.json");
        let mut pipeline = seeded_pipeline();
        pipeline.run(&input, &output, &mapping_path).unwrap();
        pipeline.run(&input, &output, &mapping_path).unwrap();
    }

    #[test]
    fn test_empty_batch_still_writes_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        let mapping_path = dir.path().join("mapping.json");
        let summary = seeded_pipeline()
            .run(&input, &dir.path().join("anonymized"), &mapping_path)
            .unwrap();

        assert_eq!(summary.total(), 0);
        assert!(MappingStore::load(&mapping_path).unwrap().is_empty());
    }
}
