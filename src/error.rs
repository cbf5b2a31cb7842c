//! Error types for the anonymization library.
//!
//! Two variants abort a whole batch ([`MissingInputDirectory`] and
//! [`MissingMappingFile`]); everything else is local to a single file and the
//! batch continues past it.
//!
//! [`MissingInputDirectory`]: AnonymizerError::MissingInputDirectory
//! [`MissingMappingFile`]: AnonymizerError::MissingMappingFile

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for anonymization operations.
pub type AnonymizerResult<T> = Result<T, AnonymizerError>;

/// Error type for all anonymization and restoration operations.
#[derive(Debug, Error)]
pub enum AnonymizerError {
    /// Required source directory is absent; the run is aborted before any
    /// per-file work.
    #[error("input directory '{}' does not exist", .0.display())]
    MissingInputDirectory(PathBuf),

    /// Restoration was requested but no mapping document exists at the
    /// given path.
    #[error("mapping file '{}' not found", .0.display())]
    MissingMappingFile(PathBuf),

    /// Filename stem has fewer than two `_`-separated segments, so no
    /// identity pair can be derived from it.
    #[error("filename '{0}' does not match the <name>_<student_id> convention")]
    MalformedFilename(String),

    /// Restoration found a file whose pseudonym key has no entry in the
    /// reverse mapping.
    #[error("no mapping entry for pseudonym key '{0}'")]
    UnknownPseudonymKey(String),

    /// Error occurred while reading or writing a file.
    #[error("IO error for path '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document or mapping file could not be parsed or serialized.
    #[error("invalid content at '{}'", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AnonymizerError {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a JSON error with the path it occurred on.
    pub fn serialization(path: &Path, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true when the error is handled per-file by copying the file
    /// through to the output directory unchanged.
    pub fn is_copy_through(&self) -> bool {
        matches!(
            self,
            Self::MalformedFilename(_) | Self::UnknownPseudonymKey(_)
        )
    }
}
