//! Generational cohort classification
//!
//! Generation is a pure function of birth year, derived from the survey
//! year and the respondent's age. The birth-year ranges partition the
//! integers with inclusive bounds, so every observation classifies to
//! exactly one cohort and no error case exists.

use serde::{Deserialize, Serialize};

/// Generational cohort of a survey respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Generation {
    /// Born before 1901
    PreWar,
    /// Born 1901-1927
    Greatest,
    /// Born 1928-1945
    Silent,
    /// Born 1946-1964
    BabyBoomer,
    /// Born 1965-1980
    GenX,
    /// Born 1981-1996
    Millennial,
    /// Born after 1996
    GenZ,
}

impl Generation {
    /// The three cohorts the report tracks on the adult-year axis
    pub const TARGETS: [Self; 3] = [Self::BabyBoomer, Self::GenX, Self::Millennial];

    /// Classify a birth year into its generational cohort
    #[must_use]
    pub const fn from_birth_year(birth_year: i32) -> Self {
        match birth_year {
            i32::MIN..=1900 => Self::PreWar,
            1901..=1927 => Self::Greatest,
            1928..=1945 => Self::Silent,
            1946..=1964 => Self::BabyBoomer,
            1965..=1980 => Self::GenX,
            1981..=1996 => Self::Millennial,
            _ => Self::GenZ,
        }
    }

    /// Classify a survey observation from its year and respondent age
    #[must_use]
    pub const fn classify(survey_year: i32, age: i32) -> Self {
        Self::from_birth_year(survey_year - age)
    }

    /// Age-0 baseline year for cohorts tracked on the adult-year axis
    ///
    /// `year - reference_year` gives the cohort's adult-year; values below
    /// 18 fall before the cohort reached adulthood and are excluded from
    /// aligned statistics. Cohorts outside the report's scope have no
    /// baseline.
    #[must_use]
    pub const fn reference_year(self) -> Option<i32> {
        match self {
            Self::BabyBoomer => Some(1964),
            Self::GenX => Some(1980),
            Self::Millennial => Some(1996),
            _ => None,
        }
    }

    /// Whether this cohort is one of the three the report tracks
    #[must_use]
    pub const fn is_target(self) -> bool {
        self.reference_year().is_some()
    }

    /// Human-readable cohort label used as a column header in output tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreWar => "Pre-War",
            Self::Greatest => "Greatest",
            Self::Silent => "Silent",
            Self::BabyBoomer => "Baby Boomer",
            Self::GenX => "Gen X",
            Self::Millennial => "Millennial",
            Self::GenZ => "Gen Z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_exhaustive() {
        // Every integer birth year maps to exactly one cohort; spot-check
        // a wide range around the boundaries.
        for birth_year in 1850..=2030 {
            let generation = Generation::from_birth_year(birth_year);
            let again = Generation::from_birth_year(birth_year);
            assert_eq!(generation, again);
        }
    }

    #[test]
    fn test_boundary_years() {
        assert_eq!(Generation::from_birth_year(1900), Generation::PreWar);
        assert_eq!(Generation::from_birth_year(1901), Generation::Greatest);
        assert_eq!(Generation::from_birth_year(1927), Generation::Greatest);
        assert_eq!(Generation::from_birth_year(1928), Generation::Silent);
        assert_eq!(Generation::from_birth_year(1945), Generation::Silent);
        assert_eq!(Generation::from_birth_year(1946), Generation::BabyBoomer);
        assert_eq!(Generation::from_birth_year(1964), Generation::BabyBoomer);
        assert_eq!(Generation::from_birth_year(1965), Generation::GenX);
        assert_eq!(Generation::from_birth_year(1980), Generation::GenX);
        assert_eq!(Generation::from_birth_year(1981), Generation::Millennial);
        assert_eq!(Generation::from_birth_year(1996), Generation::Millennial);
        assert_eq!(Generation::from_birth_year(1997), Generation::GenZ);
    }

    #[test]
    fn test_classify_from_survey_observation() {
        // A 30-year-old surveyed in 1994 was born in 1964
        assert_eq!(Generation::classify(1994, 30), Generation::BabyBoomer);
        // A 25-year-old surveyed in 2015 was born in 1990
        assert_eq!(Generation::classify(2015, 25), Generation::Millennial);
    }

    #[test]
    fn test_reference_years() {
        assert_eq!(Generation::BabyBoomer.reference_year(), Some(1964));
        assert_eq!(Generation::GenX.reference_year(), Some(1980));
        assert_eq!(Generation::Millennial.reference_year(), Some(1996));
        assert_eq!(Generation::Silent.reference_year(), None);
        assert_eq!(Generation::GenZ.reference_year(), None);
    }

    #[test]
    fn test_targets_are_the_tracked_cohorts() {
        for generation in Generation::TARGETS {
            assert!(generation.is_target());
        }
        assert!(!Generation::PreWar.is_target());
        assert!(!Generation::Greatest.is_target());
    }
}
