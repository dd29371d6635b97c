//! Appointment fact: scheduling rows on a 30-minute grid.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use clinicgen_core::{AppointmentRow, AppointmentStatus, Branch, Doctor, PatientRow, Service};

use crate::errors::GenerationError;
use crate::facts::BRANCH_WEIGHTS;
use crate::sampling::{FACT_WINDOW_DAYS, WeightedChoice, date_key, fact_epoch, random_date};

pub const APPOINTMENT_COUNT: u32 = 15000;

const STATUSES: [AppointmentStatus; 4] = [
    AppointmentStatus::Scheduled,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
    AppointmentStatus::NoShow,
];
const STATUS_WEIGHTS: [f64; 4] = [0.15, 0.70, 0.10, 0.05];

pub fn build_appointments(
    patients: &[PatientRow],
    branches: &[Branch],
    doctors: &[Doctor],
    services: &[Service],
    count: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<AppointmentRow>, GenerationError> {
    let epoch = fact_epoch()?;
    let branch = WeightedChoice::new(&BRANCH_WEIGHTS)?;
    let status = WeightedChoice::new(&STATUS_WEIGHTS)?;

    let mut rows = Vec::with_capacity(count as usize);
    for appointment_id in 1..=count {
        let date = random_date(rng, epoch, FACT_WINDOW_DAYS);
        // Slots run 08:00 through 17:30 on the half hour.
        let hour = rng.random_range(8..=17);
        let minute = if rng.random_bool(0.5) { 0 } else { 30 };

        rows.push(AppointmentRow {
            appointment_id,
            appointment_date_key: date_key(date),
            appointment_time: format!("{hour:02}:{minute:02}"),
            patient_id: patients[rng.random_range(0..patients.len())].patient_id,
            branch_id: branches[branch.sample(rng)].branch_id,
            doctor_id: doctors[rng.random_range(0..doctors.len())].doctor_id,
            service_id: services[rng.random_range(0..services.len())].service_id,
            status: STATUSES[status.sample(rng)],
        });
    }

    Ok(rows)
}
