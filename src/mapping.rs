//! Durable original↔pseudonym mapping.
//!
//! The store is a single JSON document keyed by the original composite key
//! (`<name>_<student_id>`). The restore path derives a reverse index from the
//! forward mapping each run; the reverse view is never persisted.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::IdentityPair;
use crate::error::{AnonymizerError, AnonymizerResult};

/// Default filename of the persisted mapping document.
pub const DEFAULT_MAPPING_FILE: &str = "name_student_id_mapping.json";

/// One original→pseudonym correspondence.
///
/// Entries are immutable once recorded: a run never regenerates the
/// pseudonym of a key it has already written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub original_name: String,
    pub original_student_id: String,
    pub new_name: String,
    pub new_student_id: String,
}

impl MappingEntry {
    /// The original identity this entry anonymized.
    pub fn original(&self) -> IdentityPair {
        IdentityPair::new(&self.original_name, &self.original_student_id)
    }

    /// The pseudonym this entry assigned.
    pub fn pseudonym(&self) -> IdentityPair {
        IdentityPair::new(&self.new_name, &self.new_student_id)
    }
}

/// The full mapping accumulated over one anonymization batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingStore {
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingStore {
    /// Creates an empty store. The anonymize path always starts from one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from disk.
    ///
    /// Returns [`AnonymizerError::MissingMappingFile`] when the path does not
    /// exist; the restore path surfaces this as a batch-fatal precondition.
    pub fn load(path: &Path) -> AnonymizerResult<Self> {
        if !path.exists() {
            return Err(AnonymizerError::MissingMappingFile(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|err| AnonymizerError::io(path, err))?;
        serde_json::from_str(&raw).map_err(|err| AnonymizerError::serialization(path, err))
    }

    /// Serializes the full store as one document, overwriting any existing
    /// file. Non-ASCII text is written verbatim, never escaped.
    pub fn save(&self, path: &Path) -> AnonymizerResult<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|err| AnonymizerError::serialization(path, err))?;
        fs::write(path, raw).map_err(|err| AnonymizerError::io(path, err))
    }

    /// Records one correspondence, keyed by the original composite key.
    pub fn record(&mut self, original: &IdentityPair, pseudonym: &IdentityPair) {
        self.entries.insert(
            original.composite_key(),
            MappingEntry {
                original_name: original.name.clone(),
                original_student_id: original.student_id.clone(),
                new_name: pseudonym.name.clone(),
                new_student_id: pseudonym.student_id.clone(),
            },
        );
    }

    /// Looks up an entry by original composite key.
    pub fn get(&self, key: &str) -> Option<&MappingEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MappingEntry)> {
        self.entries.iter()
    }

    /// Derives the pseudonym-key → original lookup.
    ///
    /// The reverse view is recomputed from the forward mapping whenever it is
    /// needed; it is never incrementally maintained or persisted.
    pub fn reverse_index(&self) -> HashMap<String, IdentityPair> {
        self.entries
            .values()
            .map(|entry| (entry.pseudonym().composite_key(), entry.original()))
            .collect()
    }
}
