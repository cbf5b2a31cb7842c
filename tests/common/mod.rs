//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all integration tests:
//! document builders and small read-back helpers.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use anonymizer::Document;
use std::path::Path;

/// Reads a document back and returns its concatenated text content.
pub fn document_text(path: &Path) -> String {
    Document::open(path)
        .expect("output should be a readable document")
        .full_text()
}

/// Lists the file names of a directory, sorted for stable assertions.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("directory should be readable")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
