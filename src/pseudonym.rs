//! Pseudonym generation.
//!
//! Names are one surname plus two given-name syllables drawn from fixed
//! candidate pools; student ids are an admission year plus a five-digit
//! serial. Generation is random with no uniqueness guarantee across calls:
//! two documents in a batch may draw the same pseudonym, and the pipelines
//! accept that risk.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::IdentityPair;

/// Surname candidates for generated names.
const SURNAMES: &[&str] = &[
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황",
    "안", "송", "전", "홍",
];

/// Syllable candidates for the two-syllable given name, sampled with
/// replacement.
const GIVEN_SYLLABLES: &[&str] = &[
    "준", "민", "서", "지", "예", "원", "현", "수", "영", "재", "주", "성", "우", "진", "선", "은",
    "혜", "정", "윤", "태", "동", "민", "석", "준", "윤", "호", "현", "아", "종", "훈",
];

/// Inclusive admission-year range for generated student ids.
const YEAR_RANGE: RangeInclusive<u32> = 2018..=2023;

/// Inclusive serial range; always five digits.
const SERIAL_RANGE: RangeInclusive<u32> = 10000..=99999;

/// Random pseudonym source.
///
/// Owns its RNG so tests can seed deterministic sequences while production
/// use draws from OS entropy.
pub struct PseudonymGenerator {
    rng: StdRng,
}

impl PseudonymGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic generator. Intended for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a random three-syllable name: surname plus two given-name
    /// syllables.
    pub fn generate_name(&mut self) -> String {
        let surname = SURNAMES[self.rng.gen_range(0..SURNAMES.len())];
        let first = GIVEN_SYLLABLES[self.rng.gen_range(0..GIVEN_SYLLABLES.len())];
        let second = GIVEN_SYLLABLES[self.rng.gen_range(0..GIVEN_SYLLABLES.len())];
        format!("{surname}{first}{second}")
    }

    /// Generates a random student id: admission year concatenated with a
    /// five-digit serial, no separator.
    pub fn generate_student_id(&mut self) -> String {
        let year = self.rng.gen_range(YEAR_RANGE);
        let serial = self.rng.gen_range(SERIAL_RANGE);
        format!("{year}{serial}")
    }

    /// Generates a full pseudonym pair.
    pub fn generate_pair(&mut self) -> IdentityPair {
        IdentityPair::new(self.generate_name(), self.generate_student_id())
    }
}

impl Default for PseudonymGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
