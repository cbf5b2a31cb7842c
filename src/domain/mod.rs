//! Domain models for document anonymization.
//!
//! This module contains the identity pair carried in document filenames and
//! the structured document container the substitution engine operates on.

pub mod document;
pub mod identity;

pub use document::{has_document_extension, Document, Table, DOCUMENT_EXTENSION};
pub use identity::IdentityPair;
