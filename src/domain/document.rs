//! The structured document container.
//!
//! A document is an ordered collection of text regions: paragraphs followed
//! by tables of cells. On disk the container is a JSON document; the
//! anonymization core never looks past the region text.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnonymizerError, AnonymizerResult};

/// File extension recognized as a document by the pipelines.
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Returns true when the path carries the recognized document extension.
pub fn has_document_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION)
}

/// A table of text cells, addressed row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from its rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// A structured text document: paragraphs plus tables of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a document from disk.
    pub fn open(path: &Path) -> AnonymizerResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| AnonymizerError::io(path, err))?;
        serde_json::from_str(&raw).map_err(|err| AnonymizerError::serialization(path, err))
    }

    /// Saves the document, overwriting any existing file.
    pub fn save(&self, path: &Path) -> AnonymizerResult<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|err| AnonymizerError::serialization(path, err))?;
        fs::write(path, raw).map_err(|err| AnonymizerError::io(path, err))
    }

    /// Iterates over every text region: paragraphs first, then each table
    /// cell in row-major order.
    pub fn regions(&self) -> impl Iterator<Item = &String> {
        self.paragraphs.iter().chain(
            self.tables
                .iter()
                .flat_map(|table| table.rows.iter())
                .flat_map(|row| row.iter()),
        )
    }

    /// Mutable view over every text region, in the same order as
    /// [`Document::regions`].
    pub fn regions_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.paragraphs.iter_mut().chain(
            self.tables
                .iter_mut()
                .flat_map(|table| table.rows.iter_mut())
                .flat_map(|row| row.iter_mut()),
        )
    }

    /// Concatenates all region text, newline-separated.
    pub fn full_text(&self) -> String {
        self.regions().cloned().collect::<Vec<_>>().join("\n")
    }
}
