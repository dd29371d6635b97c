use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use clinicgen_core::{BRANCHES, DOCTORS, INSURANCES, PAYMENT_METHODS, SERVICES};
use clinicgen_core::{BillingRow, ServiceCategory};
use clinicgen_generate::facts::billing::{BILLING_COUNT, BillingContext, build_billing};
use clinicgen_generate::facts::visit::VISIT_COUNT;
use clinicgen_generate::dimensions::patient::{PATIENT_COUNT, build_patients};
use clinicgen_generate::sampling::table_seed;

const TOLERANCE: f64 = 0.02;

fn build_rows() -> Vec<BillingRow> {
    let mut patient_rng = ChaCha8Rng::seed_from_u64(table_seed(42, "DimPatient"));
    let patients = build_patients(PATIENT_COUNT, &mut patient_rng).expect("build patients");

    let ctx = BillingContext {
        patients: &patients,
        branches: &BRANCHES,
        doctors: &DOCTORS,
        services: &SERVICES,
        insurances: &INSURANCES,
        payment_methods: &PAYMENT_METHODS,
        visit_count: VISIT_COUNT,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(table_seed(42, "FactBillingDetail"));
    build_billing(&ctx, BILLING_COUNT, &mut rng).expect("build billing")
}

#[test]
fn monetary_formulas_hold_within_rounding() {
    for row in build_rows() {
        assert!(
            (row.gross_amount - row.unit_price * row.quantity as f64).abs() <= TOLERANCE,
            "gross amount mismatch on billing {}",
            row.billing_id
        );
        assert!(
            (row.net_amount - (row.gross_amount - row.discount_amount)).abs() <= TOLERANCE,
            "net amount mismatch on billing {}",
            row.billing_id
        );
        assert!(
            (row.patient_paid_amount - (row.net_amount - row.insurance_coverage_amount)).abs()
                <= TOLERANCE,
            "patient paid mismatch on billing {}",
            row.billing_id
        );
        assert!(
            (row.gross_profit - (row.net_amount - row.total_cost - row.payment_fee)).abs()
                <= TOLERANCE,
            "gross profit mismatch on billing {}",
            row.billing_id
        );
    }
}

#[test]
fn insurance_coverage_matches_referenced_plan() {
    for row in build_rows() {
        let insurance = &INSURANCES[row.insurance_id as usize - 1];
        let expected = row.net_amount * insurance.coverage_percent / 100.0;
        assert!(
            (row.insurance_coverage_amount - expected).abs() <= TOLERANCE,
            "coverage mismatch on billing {}",
            row.billing_id
        );
    }
}

#[test]
fn margin_is_zero_for_zero_net_and_self_computable_otherwise() {
    for row in build_rows() {
        if row.net_amount == 0.0 {
            assert_eq!(row.gross_profit_margin, 0.0);
        } else {
            let profit = row.net_amount - row.total_cost - row.payment_fee;
            let expected = profit / row.net_amount * 100.0;
            assert!(
                (row.gross_profit_margin - expected).abs() <= 0.05,
                "margin mismatch on billing {}: {} vs {}",
                row.billing_id,
                row.gross_profit_margin,
                expected
            );
        }
    }
}

#[test]
fn foreign_keys_stay_inside_dimension_id_spaces() {
    let branch_ids: HashSet<u32> = BRANCHES.iter().map(|b| b.branch_id).collect();
    let service_ids: HashSet<u32> = SERVICES.iter().map(|s| s.service_id).collect();
    let doctor_ids: HashSet<u32> = DOCTORS.iter().map(|d| d.doctor_id).collect();
    let insurance_ids: HashSet<u32> = INSURANCES.iter().map(|i| i.insurance_id).collect();
    let method_ids: HashSet<u32> =
        PAYMENT_METHODS.iter().map(|m| m.payment_method_id).collect();

    for row in build_rows() {
        assert!(branch_ids.contains(&row.branch_id));
        assert!(service_ids.contains(&row.service_id));
        assert!(doctor_ids.contains(&row.doctor_id));
        assert!(insurance_ids.contains(&row.insurance_id));
        assert!(method_ids.contains(&row.payment_method_id));
        assert!(row.patient_id >= 1 && row.patient_id <= PATIENT_COUNT);
        if let Some(visit_id) = row.visit_id {
            assert!(visit_id >= 1 && visit_id <= VISIT_COUNT);
        }
    }
}

#[test]
fn health_packages_bill_a_single_unit() {
    let package_ids: HashSet<u32> = SERVICES
        .iter()
        .filter(|s| s.category == ServiceCategory::HealthPackage)
        .map(|s| s.service_id)
        .collect();

    let rows = build_rows();
    let mut package_lines = 0;
    for row in &rows {
        assert!((1..=3).contains(&row.quantity));
        if package_ids.contains(&row.service_id) {
            assert_eq!(row.quantity, 1, "package billing {} not single unit", row.billing_id);
            package_lines += 1;
        }
    }
    assert!(package_lines > 0, "no package lines sampled at all");
}

#[test]
fn discounts_come_from_the_fixed_menu() {
    let allowed = [0.0, 5.0, 10.0, 15.0, 20.0];
    let mut discounted = 0_u32;
    let rows = build_rows();
    for row in &rows {
        assert!(allowed.contains(&row.discount_percent));
        if row.discount_percent > 0.0 {
            discounted += 1;
        }
    }
    // Outer 30% gate times the 4-in-7 non-zero menu: roughly 17% of lines.
    let share = discounted as f64 / rows.len() as f64;
    assert!(share > 0.10 && share < 0.25, "discount share {share} out of band");
}

#[test]
fn billing_numbers_and_payment_dates_follow_the_billing_date() {
    let rows = build_rows();
    let first = &rows[0];
    assert_eq!(first.billing_id, 1);
    assert_eq!(
        first.billing_number,
        format!("INV{}-000001", first.billing_date_key)
    );

    for row in &rows {
        assert_eq!(
            row.billing_number,
            format!("INV{}-{:06}", row.billing_date_key, row.billing_id)
        );
        let billing_date = chrono::NaiveDate::from_ymd_opt(
            (row.billing_date_key / 10000) as i32,
            row.billing_date_key / 100 % 100,
            row.billing_date_key % 100,
        )
        .expect("valid billing date key");
        let offset = (row.payment_date - billing_date).num_days();
        assert!((0..=7).contains(&offset), "payment offset {offset} out of range");
    }
}

#[test]
fn visit_links_are_optional_but_common() {
    let rows = build_rows();
    let linked = rows.iter().filter(|row| row.visit_id.is_some()).count();
    let share = linked as f64 / rows.len() as f64;
    assert!(share > 0.60 && share < 0.70, "visit link share {share} out of band");
}
