//! Patient dimension: anonymized demographics sampled independently from
//! fixed categorical distributions.

use rand_chacha::ChaCha8Rng;

use clinicgen_core::PatientRow;

use crate::errors::GenerationError;
use crate::sampling::{WeightedChoice, random_date, staff_epoch};

pub const PATIENT_COUNT: u32 = 3000;

/// Registration dates fall in this many days after the staff epoch.
const REGISTRATION_WINDOW_DAYS: i64 = 1800;

const GENDERS: [&str; 2] = ["M", "F"];
const GENDER_WEIGHTS: [f64; 2] = [0.45, 0.55];

const AGE_GROUPS: [&str; 5] = ["0-17", "18-30", "31-45", "46-60", "60+"];
const AGE_WEIGHTS: [f64; 5] = [0.05, 0.25, 0.35, 0.25, 0.10];

const PROVINCES: [&str; 7] = [
    "กรุงเทพมหานคร",
    "เชียงใหม่",
    "ภูเก็ต",
    "สงขลา",
    "ขอนแก่น",
    "ชลบุรี",
    "อื่นๆ",
];
const PROVINCE_WEIGHTS: [f64; 7] = [0.40, 0.10, 0.08, 0.08, 0.10, 0.12, 0.12];

const MEMBERSHIP_LEVELS: [&str; 4] = ["None", "Silver", "Gold", "Platinum"];
const MEMBERSHIP_WEIGHTS: [f64; 4] = [0.60, 0.20, 0.15, 0.05];

pub fn build_patients(
    count: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<PatientRow>, GenerationError> {
    let epoch = staff_epoch()?;
    let gender = WeightedChoice::new(&GENDER_WEIGHTS)?;
    let age_group = WeightedChoice::new(&AGE_WEIGHTS)?;
    let province = WeightedChoice::new(&PROVINCE_WEIGHTS)?;
    let membership = WeightedChoice::new(&MEMBERSHIP_WEIGHTS)?;

    let mut rows = Vec::with_capacity(count as usize);
    for patient_id in 1..=count {
        rows.push(PatientRow {
            patient_id,
            patient_code: format!("PT{patient_id:06}"),
            gender: GENDERS[gender.sample(rng)],
            age_group: AGE_GROUPS[age_group.sample(rng)],
            province: PROVINCES[province.sample(rng)],
            membership_level: MEMBERSHIP_LEVELS[membership.sample(rng)],
            registration_date: random_date(rng, epoch, REGISTRATION_WINDOW_DAYS),
            is_active: 1,
        });
    }

    Ok(rows)
}
