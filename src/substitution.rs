//! Consistent text substitution across a document's regions.
//!
//! Substitution is a literal, case-sensitive, whole-occurrence substring
//! replace. It is not token or word-boundary aware: a name embedded in a
//! longer word is still replaced, which is an accepted limitation of the
//! filename-derived identity model.

use crate::domain::{Document, IdentityPair};

/// Replacement counts for one substitution pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Occurrences of the name that were replaced.
    pub name_replacements: usize,

    /// Occurrences of the student id that were replaced.
    pub student_id_replacements: usize,
}

impl SubstitutionReport {
    /// Total occurrences replaced across both fields.
    pub fn total(&self) -> usize {
        self.name_replacements + self.student_id_replacements
    }

    /// Returns true if any replacement was applied.
    pub fn has_replacements(&self) -> bool {
        self.total() > 0
    }
}

/// Replaces every occurrence of `from`'s fields with `to`'s across all of the
/// document's text regions.
///
/// Each region (every paragraph, then every table cell) gets the name pass
/// first and the student-id pass second, independently of every other region;
/// a match in one region never affects another. The two passes draw their
/// values from disjoint pools in practice, so no collision handling is
/// applied between them.
pub fn substitute(
    document: &mut Document,
    from: &IdentityPair,
    to: &IdentityPair,
) -> SubstitutionReport {
    let mut report = SubstitutionReport::default();

    for region in document.regions_mut() {
        report.name_replacements += replace_in_region(region, &from.name, &to.name);
        report.student_id_replacements +=
            replace_in_region(region, &from.student_id, &to.student_id);
    }

    report
}

/// Replaces all occurrences of `from` in a single region, returning how many
/// were found.
fn replace_in_region(region: &mut String, from: &str, to: &str) -> usize {
    let occurrences = region.matches(from).count();
    if occurrences > 0 {
        *region = region.replace(from, to);
    }
    occurrences
}
