//! Survey microdata record model
//!
//! One `MicroRecord` is a single person-year observation from the
//! household survey extract. The income missing-data sentinel is mapped
//! to `None` once, at construction, so downstream stages never see the
//! magic constant.

use crate::models::generation::Generation;

/// Relationship code marking the household reference person
pub const RELATE_HOUSEHOLDER: i32 = 101;

/// Ownership status code marking an owner-occupied dwelling
pub const OWNERSHP_OWNED: i32 = 10;

/// Sentinel the source uses for missing / not-applicable household income
pub const HHINCOME_MISSING: i64 = 99_999_999;

/// One person-year survey observation
#[derive(Debug, Clone, PartialEq)]
pub struct MicroRecord {
    /// Survey year
    pub year: i32,
    /// Respondent age at the survey
    pub age: i32,
    /// Household relationship code (101 = householder)
    pub relate: i32,
    /// Dwelling ownership status code (10 = owned)
    pub ownershp: i32,
    /// Household income; `None` when the source carried the missing sentinel
    pub hh_income: Option<i64>,
    /// Household survey weight
    pub hh_weight: f64,
    /// Person survey weight
    pub person_weight: f64,
}

impl MicroRecord {
    /// Create a record from raw extract fields, mapping the income sentinel
    #[must_use]
    pub fn from_raw(
        year: i32,
        age: i32,
        relate: i32,
        ownershp: i32,
        hh_income: i64,
        hh_weight: f64,
        person_weight: f64,
    ) -> Self {
        Self {
            year,
            age,
            relate,
            ownershp,
            hh_income: (hh_income != HHINCOME_MISSING).then_some(hh_income),
            hh_weight,
            person_weight,
        }
    }

    /// Whether this record is the household reference person
    #[must_use]
    pub fn is_householder(&self) -> bool {
        self.relate == RELATE_HOUSEHOLDER
    }

    /// Whether the household owns its dwelling
    #[must_use]
    pub fn owns_home(&self) -> bool {
        self.ownershp == OWNERSHP_OWNED
    }

    /// Generational cohort of the respondent
    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation::classify(self.year, self.age)
    }
}
