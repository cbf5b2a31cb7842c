//! Reversible anonymization of structured student documents.
//!
//! This library anonymizes the name and student id embedded in a batch of
//! documents and their filenames, producing a re-identifiable mapping so the
//! transformation can later be reversed exactly.
//!
//! # Features
//!
//! - **Pseudonym Generation**: random replacement names and student ids with
//!   no semantic link to the originals
//! - **Consistent Substitution**: every occurrence across paragraphs and
//!   table cells is rewritten
//! - **Re-identifiable Mapping**: the original↔pseudonym correspondence is
//!   persisted as a single JSON document
//! - **Exact Reversal**: restoration reproduces the original text and
//!   filenames from the saved mapping
//!
//! # Architecture
//!
//! - [`domain`]: identity pairs, the filename protocol, and the document
//!   container
//! - [`pseudonym`]: random pseudonym generation
//! - [`mapping`]: mapping store persistence and the derived reverse index
//! - [`substitution`]: literal text substitution over document regions
//! - [`pipeline`]: batch anonymize and restore orchestration
//! - [`error`]: comprehensive error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use anonymizer::AnonymizePipeline;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = AnonymizePipeline::new();
//!
//! let summary = pipeline.run(
//!     Path::new("out"),
//!     Path::new("anonymized"),
//!     Path::new("name_student_id_mapping.json"),
//! )?;
//! println!("anonymized {} document(s)", summary.processed);
//! # Ok(())
//! # }
//! ```
//!
//! # Substitution
//!
//! ```
//! use anonymizer::{substitute, Document, IdentityPair};
//!
//! let mut document = Document::new();
//! document.paragraphs.push("이름: 김민준, 학번: 202312345".to_string());
//!
//! let report = substitute(
//!     &mut document,
//!     &IdentityPair::new("김민준", "202312345"),
//!     &IdentityPair::new("박서진", "201988888"),
//! );
//! assert_eq!(report.total(), 2);
//! assert_eq!(document.paragraphs[0], "이름: 박서진, 학번: 201988888");
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod pseudonym;
pub mod substitution;

// Re-exports for convenient access
pub use domain::{has_document_extension, Document, IdentityPair, Table, DOCUMENT_EXTENSION};
pub use error::{AnonymizerError, AnonymizerResult};
pub use mapping::{MappingEntry, MappingStore, DEFAULT_MAPPING_FILE};
pub use pipeline::{AnonymizePipeline, BatchSummary, RestorePipeline};
pub use pseudonym::PseudonymGenerator;
pub use substitution::{substitute, SubstitutionReport};
