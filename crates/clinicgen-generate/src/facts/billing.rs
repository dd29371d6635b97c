//! Billing detail fact, the primary fact table. Each row samples its
//! dimension keys, looks up price, coverage, and fee from the fixture
//! tables, and derives the full financial breakdown.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use clinicgen_core::money::round2;
use clinicgen_core::{
    BillingRow, Branch, Doctor, Insurance, PatientRow, PaymentMethod, PaymentStatus, Service,
    ServiceCategory,
};

use crate::errors::GenerationError;
use crate::facts::BRANCH_WEIGHTS;
use crate::facts::visit::INSURANCE_WEIGHTS;
use crate::sampling::{FACT_WINDOW_DAYS, WeightedChoice, date_key, fact_epoch, random_date};

pub const BILLING_COUNT: u32 = 18000;

/// Share of billing lines tied to a recorded visit; the rest are walk-in
/// sales such as vaccine or package purchases.
const VISIT_LINK_PROBABILITY: f64 = 0.65;

const PAYMENT_METHOD_WEIGHTS: [f64; 8] = [0.15, 0.25, 0.20, 0.10, 0.08, 0.12, 0.05, 0.05];

const PAYMENT_STATUSES: [PaymentStatus; 3] = [
    PaymentStatus::Paid,
    PaymentStatus::Pending,
    PaymentStatus::Cancelled,
];
const PAYMENT_STATUS_WEIGHTS: [f64; 3] = [0.92, 0.05, 0.03];

// Most lines keep a zero discount even when the discount branch is taken;
// the zero entries below are intentional.
const DISCOUNT_CHOICES: [f64; 7] = [0.0, 0.0, 0.0, 5.0, 10.0, 15.0, 20.0];
const DISCOUNT_PROBABILITY: f64 = 0.3;

pub struct BillingContext<'a> {
    pub patients: &'a [PatientRow],
    pub branches: &'a [Branch],
    pub doctors: &'a [Doctor],
    pub services: &'a [Service],
    pub insurances: &'a [Insurance],
    pub payment_methods: &'a [PaymentMethod],
    pub visit_count: u32,
}

pub fn build_billing(
    ctx: &BillingContext<'_>,
    count: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<BillingRow>, GenerationError> {
    let epoch = fact_epoch()?;
    let branch = WeightedChoice::new(&BRANCH_WEIGHTS)?;
    let insurance = WeightedChoice::new(&INSURANCE_WEIGHTS)?;
    let payment_method = WeightedChoice::new(&PAYMENT_METHOD_WEIGHTS)?;
    let payment_status = WeightedChoice::new(&PAYMENT_STATUS_WEIGHTS)?;

    let mut rows = Vec::with_capacity(count as usize);
    for billing_id in 1..=count {
        let visit_id = if rng.random_bool(VISIT_LINK_PROBABILITY) {
            Some(rng.random_range(1..=ctx.visit_count))
        } else {
            None
        };
        let billing_date = random_date(rng, epoch, FACT_WINDOW_DAYS);
        let billing_date_key = date_key(billing_date);
        let patient = &ctx.patients[rng.random_range(0..ctx.patients.len())];
        let branch = &ctx.branches[branch.sample(rng)];
        let doctor = &ctx.doctors[rng.random_range(0..ctx.doctors.len())];
        let service = &ctx.services[rng.random_range(0..ctx.services.len())];
        let insurance = &ctx.insurances[insurance.sample(rng)];
        let method = &ctx.payment_methods[payment_method.sample(rng)];

        // Packages are sold as a single unit.
        let quantity = if service.category == ServiceCategory::HealthPackage {
            1
        } else {
            rng.random_range(1..=3)
        };
        let unit_price = service.base_price * rng.random_range(0.9..=1.1);
        let discount_percent = if rng.random_bool(DISCOUNT_PROBABILITY) {
            DISCOUNT_CHOICES[rng.random_range(0..DISCOUNT_CHOICES.len())]
        } else {
            0.0
        };

        let gross_amount = unit_price * quantity as f64;
        let discount_amount = gross_amount * discount_percent / 100.0;
        let net_amount = gross_amount - discount_amount;
        let insurance_coverage_amount = net_amount * insurance.coverage_percent / 100.0;
        let patient_paid_amount = net_amount - insurance_coverage_amount;
        let payment_fee = patient_paid_amount * method.processing_fee / 100.0;
        let total_cost = service.cost * quantity as f64;
        let gross_profit = net_amount - total_cost - payment_fee;
        let gross_profit_margin = if net_amount > 0.0 {
            gross_profit / net_amount * 100.0
        } else {
            0.0
        };

        rows.push(BillingRow {
            billing_id,
            billing_number: format!("INV{billing_date_key}-{billing_id:06}"),
            billing_date_key,
            visit_id,
            patient_id: patient.patient_id,
            branch_id: branch.branch_id,
            doctor_id: doctor.doctor_id,
            service_id: service.service_id,
            insurance_id: insurance.insurance_id,
            payment_method_id: method.payment_method_id,
            quantity,
            unit_price: round2(unit_price),
            gross_amount: round2(gross_amount),
            discount_percent,
            discount_amount: round2(discount_amount),
            net_amount: round2(net_amount),
            insurance_coverage_amount: round2(insurance_coverage_amount),
            patient_paid_amount: round2(patient_paid_amount),
            payment_fee: round2(payment_fee),
            total_cost: round2(total_cost),
            gross_profit: round2(gross_profit),
            gross_profit_margin: round2(gross_profit_margin),
            payment_status: PAYMENT_STATUSES[payment_status.sample(rng)],
            payment_date: billing_date + chrono::Duration::days(rng.random_range(0..=7)),
        });
    }

    Ok(rows)
}
