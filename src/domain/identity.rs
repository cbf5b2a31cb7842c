//! Identity pairs and the filename protocol.
//!
//! A document's owner is carried in its filename as
//! `<name>_<student_id>.<ext>`. The first two `_`-separated segments of the
//! stem form the identity pair; anything past the second segment is not part
//! of the pair.

use std::fmt;

use crate::error::AnonymizerError;

/// A (name, student id) pair naming one individual, in either original or
/// pseudonymous form.
///
/// Both fields are non-empty. The student id is numeric-looking but treated
/// as opaque text throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityPair {
    pub name: String,
    pub student_id: String,
}

impl IdentityPair {
    /// Creates a pair from its parts.
    pub fn new(name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
        }
    }

    /// Parses an identity pair from a filename stem.
    ///
    /// Returns [`AnonymizerError::MalformedFilename`] when the stem has fewer
    /// than two `_`-separated segments. Empty segments are rejected: both
    /// fields of a pair are non-empty by contract.
    pub fn from_file_stem(stem: &str) -> Result<Self, AnonymizerError> {
        let mut segments = stem.split('_');
        let name = segments.next().unwrap_or("");
        let student_id = segments.next().unwrap_or("");

        if name.is_empty() || student_id.is_empty() {
            return Err(AnonymizerError::MalformedFilename(stem.to_string()));
        }

        Ok(Self::new(name, student_id))
    }

    /// Composite key addressing the mapping store: `<name>_<student_id>`.
    pub fn composite_key(&self) -> String {
        format!("{}_{}", self.name, self.student_id)
    }

    /// Rebuilds the canonical filename for this pair.
    pub fn to_filename(&self, extension: &str) -> String {
        format!("{}_{}.{}", self.name, self.student_id, extension)
    }
}

impl fmt::Display for IdentityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_segments() {
        let pair = IdentityPair::from_file_stem("김민준_202312345").unwrap();
        assert_eq!(pair.name, "김민준");
        assert_eq!(pair.student_id, "202312345");
    }

    #[test]
    fn test_segments_past_the_second_are_ignored() {
        let pair = IdentityPair::from_file_stem("김민준_202312345_final_v2").unwrap();
        assert_eq!(pair.name, "김민준");
        assert_eq!(pair.student_id, "202312345");
    }

    #[test]
    fn test_single_segment_is_malformed() {
        let err = IdentityPair::from_file_stem("report").unwrap_err();
        assert!(matches!(err, AnonymizerError::MalformedFilename(_)));
    }

    #[test]
    fn test_empty_segments_are_malformed() {
        assert!(IdentityPair::from_file_stem("_202312345").is_err());
        assert!(IdentityPair::from_file_stem("김민준_").is_err());
        assert!(IdentityPair::from_file_stem("").is_err());
    }

    #[test]
    fn test_composite_key_and_filename() {
        let pair = IdentityPair::new("김민준", "202312345");
        assert_eq!(pair.composite_key(), "김민준_202312345");
        assert_eq!(pair.to_filename("docx"), "김민준_202312345.docx");
        assert_eq!(pair.to_string(), pair.composite_key());
    }

    #[test]
    fn test_stem_round_trip() {
        let pair = IdentityPair::new("이서연", "201911111");
        let parsed = IdentityPair::from_file_stem("이서연_201911111").unwrap();
        assert_eq!(pair, parsed);
    }
}
