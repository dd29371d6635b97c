use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use clinicgen_core::{BRANCHES, DOCTORS, INSURANCES, PAYMENT_METHODS, SERVICES};

use crate::dimensions::date::{build_date_dimension, default_range};
use crate::dimensions::employee::build_employees;
use crate::dimensions::patient::{PATIENT_COUNT, build_patients};
use crate::errors::GenerationError;
use crate::facts::appointment::{APPOINTMENT_COUNT, build_appointments};
use crate::facts::billing::{BILLING_COUNT, BillingContext, build_billing};
use crate::facts::visit::{VISIT_COUNT, build_visits};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;
use crate::output::dictionary::{DATA_DICTIONARY_FILE, write_data_dictionary};
use crate::sampling::table_seed;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the full dataset.
///
/// Dimensions are built first so fact builders can draw keys from the
/// exact id space of each dimension, then everything is exported in one
/// pass. All randomness flows from the configured seed.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let seed = self.options.seed;
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        info!(seed, out_dir = %out_dir.display(), "generation started");

        let (range_start, range_end) = default_range()?;
        let calendar = build_date_dimension(range_start, range_end);
        let employees = build_employees(&BRANCHES, &mut self.rng_for("DimEmployee"))?;
        let patients = build_patients(PATIENT_COUNT, &mut self.rng_for("DimPatient"))?;

        let appointments = build_appointments(
            &patients,
            &BRANCHES,
            &DOCTORS,
            &SERVICES,
            APPOINTMENT_COUNT,
            &mut self.rng_for("FactAppointment"),
        )?;
        let visits = build_visits(
            &patients,
            &BRANCHES,
            &DOCTORS,
            &INSURANCES,
            VISIT_COUNT,
            &mut self.rng_for("FactPatientVisit"),
        )?;
        let billing = build_billing(
            &BillingContext {
                patients: &patients,
                branches: &BRANCHES,
                doctors: &DOCTORS,
                services: &SERVICES,
                insurances: &INSURANCES,
                payment_methods: &PAYMENT_METHODS,
                visit_count: VISIT_COUNT,
            },
            BILLING_COUNT,
            &mut self.rng_for("FactBillingDetail"),
        )?;

        let mut report = GenerationReport::new(seed);
        export(&out_dir, "DimDate", &calendar, &mut report)?;
        export(&out_dir, "DimBranch", &BRANCHES, &mut report)?;
        export(&out_dir, "DimService", &SERVICES, &mut report)?;
        export(&out_dir, "DimDoctor", &DOCTORS, &mut report)?;
        export(&out_dir, "DimEmployee", &employees, &mut report)?;
        export(&out_dir, "DimPaymentMethod", &PAYMENT_METHODS, &mut report)?;
        export(&out_dir, "DimInsurance", &INSURANCES, &mut report)?;
        export(&out_dir, "DimPatient", &patients, &mut report)?;
        export(&out_dir, "FactAppointment", &appointments, &mut report)?;
        export(&out_dir, "FactPatientVisit", &visits, &mut report)?;
        export(&out_dir, "FactBillingDetail", &billing, &mut report)?;

        let dictionary_bytes = write_data_dictionary(&out_dir)?;
        info!(
            file = DATA_DICTIONARY_FILE,
            bytes = dictionary_bytes,
            "data dictionary written"
        );

        report.bytes_written = report.tables.iter().map(|table| table.bytes).sum::<u64>()
            + dictionary_bytes;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            seed,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }

    fn rng_for(&self, table: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(table_seed(self.options.seed, table))
    }
}

fn export<R: Serialize>(
    out_dir: &Path,
    table: &str,
    rows: &[R],
    report: &mut GenerationReport,
) -> Result<(), GenerationError> {
    let path = out_dir.join(format!("{table}.csv"));
    let bytes = write_table_csv(&path, rows)?;
    info!(table, rows = rows.len(), bytes, "table written");
    report.tables.push(TableReport {
        table: table.to_string(),
        rows: rows.len() as u64,
        bytes,
    });
    Ok(())
}
