//! Shared sampling and calendar helpers for dimension and fact builders.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Epoch for hire and registration windows.
pub const STAFF_EPOCH: (i32, u32, u32) = (2020, 1, 1);
/// First day facts can fall on; fact dates stay inside the date dimension.
pub const FACT_EPOCH: (i32, u32, u32) = (2023, 1, 1);
/// Fact dates are drawn uniformly from this many days after the epoch.
pub const FACT_WINDOW_DAYS: i64 = 1000;

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, GenerationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| GenerationError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

pub fn staff_epoch() -> Result<NaiveDate, GenerationError> {
    let (year, month, day) = STAFF_EPOCH;
    ymd(year, month, day)
}

pub fn fact_epoch() -> Result<NaiveDate, GenerationError> {
    let (year, month, day) = FACT_EPOCH;
    ymd(year, month, day)
}

/// Integer date key in YYYYMMDD form, the grain of the date dimension.
pub fn date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10000 + date.month() * 100 + date.day()
}

/// A date uniformly drawn from `start + [0, span_days]` (inclusive window).
pub fn random_date(rng: &mut ChaCha8Rng, start: NaiveDate, span_days: i64) -> NaiveDate {
    start + Duration::days(rng.random_range(0..=span_days))
}

/// Weighted categorical over indices 0..weights.len().
pub struct WeightedChoice {
    index: WeightedIndex<f64>,
}

impl WeightedChoice {
    pub fn new(weights: &[f64]) -> Result<Self, GenerationError> {
        let index = WeightedIndex::new(weights)
            .map_err(|err| GenerationError::InvalidDistribution(err.to_string()))?;
        Ok(Self { index })
    }

    pub fn sample(&self, rng: &mut ChaCha8Rng) -> usize {
        self.index.sample(rng)
    }
}

/// Mix the run seed with a table name (FNV-1a) so each table gets its own
/// stream and inserting a table never shifts another table's values.
pub fn table_seed(seed: u64, table: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in table.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn date_key_is_yyyymmdd() {
        let date = ymd(2025, 1, 9).expect("valid date");
        assert_eq!(date_key(date), 20250109);
    }

    #[test]
    fn random_date_stays_inside_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = ymd(2023, 1, 1).expect("valid date");
        for _ in 0..200 {
            let date = random_date(&mut rng, start, 1000);
            assert!(date >= start);
            assert!(date <= start + chrono::Duration::days(1000));
        }
    }

    #[test]
    fn table_seed_differs_per_table() {
        assert_ne!(table_seed(42, "DimPatient"), table_seed(42, "FactBillingDetail"));
        assert_eq!(table_seed(42, "DimPatient"), table_seed(42, "DimPatient"));
    }
}
