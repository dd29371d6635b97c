//! Date dimension: one row per calendar day, all fields derived from the
//! date itself.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use clinicgen_core::DateRow;

use crate::errors::GenerationError;
use crate::sampling::{date_key, ymd};

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Inclusive calendar range covered by the dataset.
pub fn default_range() -> Result<(NaiveDate, NaiveDate), GenerationError> {
    Ok((ymd(2023, 1, 1)?, ymd(2025, 12, 31)?))
}

pub fn build_date_dimension(start: NaiveDate, end: NaiveDate) -> Vec<DateRow> {
    let mut rows = Vec::new();
    let mut date = start;
    while date <= end {
        rows.push(date_row(date));
        date += Duration::days(1);
    }
    rows
}

fn date_row(date: NaiveDate) -> DateRow {
    let month = date.month();
    let weekday = date.weekday();
    let is_weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);

    DateRow {
        date_key: date_key(date),
        date,
        year: date.year(),
        quarter: format!("Q{}", (month - 1) / 3 + 1),
        month,
        month_name: date.format("%B").to_string(),
        month_name_thai: THAI_MONTHS[month as usize - 1],
        day: date.day(),
        day_of_week: weekday.number_from_monday(),
        day_name: date.format("%A").to_string(),
        week_of_year: date.iso_week().week(),
        is_weekend: u8::from(is_weekend),
        // The chain's fiscal year tracks the calendar year.
        fiscal_year: date.year(),
    }
}
