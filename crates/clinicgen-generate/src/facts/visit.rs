//! Patient visit fact: check-in/out, waiting and service durations, and a
//! satisfaction score. Times and durations are drawn independently; the
//! dataset intentionally does not tie check-out to check-in plus waiting.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use clinicgen_core::{Branch, Doctor, Insurance, PatientRow, VisitRow};

use crate::errors::GenerationError;
use crate::facts::BRANCH_WEIGHTS;
use crate::sampling::{FACT_WINDOW_DAYS, WeightedChoice, date_key, fact_epoch, random_date};

pub const VISIT_COUNT: u32 = 12000;

pub const INSURANCE_WEIGHTS: [f64; 6] = [0.45, 0.15, 0.15, 0.10, 0.08, 0.07];

const SATISFACTION_SCORES: [u8; 5] = [1, 2, 3, 4, 5];
const SATISFACTION_WEIGHTS: [f64; 5] = [0.02, 0.05, 0.13, 0.35, 0.45];

pub fn build_visits(
    patients: &[PatientRow],
    branches: &[Branch],
    doctors: &[Doctor],
    insurances: &[Insurance],
    count: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<VisitRow>, GenerationError> {
    let epoch = fact_epoch()?;
    let branch = WeightedChoice::new(&BRANCH_WEIGHTS)?;
    let insurance = WeightedChoice::new(&INSURANCE_WEIGHTS)?;
    let satisfaction = WeightedChoice::new(&SATISFACTION_WEIGHTS)?;

    let mut rows = Vec::with_capacity(count as usize);
    for visit_id in 1..=count {
        let date = random_date(rng, epoch, FACT_WINDOW_DAYS);
        let check_in = format!(
            "{:02}:{:02}",
            rng.random_range(8..=17),
            rng.random_range(0..=59)
        );
        let check_out = format!(
            "{:02}:{:02}",
            rng.random_range(9..=18),
            rng.random_range(0..=59)
        );

        rows.push(VisitRow {
            visit_id,
            visit_date_key: date_key(date),
            patient_id: patients[rng.random_range(0..patients.len())].patient_id,
            branch_id: branches[branch.sample(rng)].branch_id,
            doctor_id: doctors[rng.random_range(0..doctors.len())].doctor_id,
            insurance_id: insurances[insurance.sample(rng)].insurance_id,
            check_in_time: check_in,
            check_out_time: check_out,
            waiting_time_minutes: rng.random_range(5..120),
            service_time_minutes: rng.random_range(15..180),
            satisfaction_score: SATISFACTION_SCORES[satisfaction.sample(rng)],
        });
    }

    Ok(rows)
}
