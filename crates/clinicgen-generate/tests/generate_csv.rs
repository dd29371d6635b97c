use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use clinicgen_generate::{GenerateOptions, GenerationEngine};

const OUTPUT_FILES: [&str; 12] = [
    "DimDate.csv",
    "DimBranch.csv",
    "DimService.csv",
    "DimDoctor.csv",
    "DimEmployee.csv",
    "DimPaymentMethod.csv",
    "DimInsurance.csv",
    "DimPatient.csv",
    "FactAppointment.csv",
    "FactPatientVisit.csv",
    "FactBillingDetail.csv",
    "DataDictionary.md",
];

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn run_engine(label: &str, seed: u64) -> PathBuf {
    let out_dir = temp_out_dir(label);
    let options = GenerateOptions {
        out_dir: out_dir.clone(),
        seed,
    };
    let result = GenerationEngine::new(options).run().expect("run generation");
    assert_eq!(result.out_dir, out_dir);
    out_dir
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("clinicgen_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

#[test]
fn generate_writes_all_output_files() {
    let out_dir = run_engine("files", 42);
    for name in OUTPUT_FILES {
        assert!(out_dir.join(name).is_file(), "missing output file {name}");
    }
}

#[test]
fn generate_is_byte_identical_for_same_seed() {
    let out_dir_a = run_engine("det_a", 42);
    let out_dir_b = run_engine("det_b", 42);

    for name in OUTPUT_FILES {
        let hash_a = hash_file(&out_dir_a.join(name)).expect("hash run A");
        let hash_b = hash_file(&out_dir_b.join(name)).expect("hash run B");
        assert_eq!(hash_a, hash_b, "{name} should be byte-identical");
    }
}

#[test]
fn generate_differs_for_different_seed() {
    let out_dir_a = run_engine("seed_a", 42);
    let out_dir_b = run_engine("seed_b", 43);

    let hash_a = hash_file(&out_dir_a.join("FactBillingDetail.csv")).expect("hash run A");
    let hash_b = hash_file(&out_dir_b.join("FactBillingDetail.csv")).expect("hash run B");
    assert_ne!(hash_a, hash_b);
}

#[test]
fn generate_respects_row_counts() {
    let out_dir = temp_out_dir("rows");
    let options = GenerateOptions {
        out_dir,
        seed: 42,
    };
    let result = GenerationEngine::new(options).run().expect("run generation");
    let report = &result.report;

    let expected = [
        ("DimDate", 1096_u64),
        ("DimBranch", 8),
        ("DimService", 18),
        ("DimDoctor", 10),
        ("DimEmployee", 68),
        ("DimPaymentMethod", 8),
        ("DimInsurance", 6),
        ("DimPatient", 3000),
        ("FactAppointment", 15000),
        ("FactPatientVisit", 12000),
        ("FactBillingDetail", 18000),
    ];
    for (table, rows) in expected {
        let entry = report.table(table).unwrap_or_else(|| panic!("missing report for {table}"));
        assert_eq!(entry.rows, rows, "row count for {table}");
    }
}

#[test]
fn csv_files_start_with_utf8_bom_and_header() {
    let out_dir = run_engine("bom", 42);

    let bytes = fs::read(out_dir.join("FactBillingDetail.csv")).expect("read billing csv");
    assert_eq!(&bytes[0..3], &[0xEF, 0xBB, 0xBF], "missing UTF-8 BOM");

    let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8 body");
    let header = text.lines().next().expect("header row");
    assert_eq!(
        header,
        "BillingID,BillingNumber,BillingDateKey,VisitID,PatientID,BranchID,DoctorID,\
         ServiceID,InsuranceID,PaymentMethodID,Quantity,UnitPrice,GrossAmount,\
         DiscountPercent,DiscountAmount,NetAmount,InsuranceCoverageAmount,\
         PatientPaidAmount,PaymentFee,TotalCost,GrossProfit,GrossProfitMargin,\
         PaymentStatus,PaymentDate"
    );
}

#[test]
fn thai_text_survives_export() {
    let out_dir = run_engine("thai", 42);
    let text = fs::read_to_string(out_dir.join("DimBranch.csv")).expect("read branch csv");
    assert!(text.contains("คลินิกเซ็นทรัลเวิลด์"));
    assert!(text.contains("กรุงเทพมหานคร"));
}

#[test]
fn data_dictionary_is_the_fixed_document() {
    let out_dir = run_engine("dict", 42);
    let text = fs::read_to_string(out_dir.join("DataDictionary.md")).expect("read dictionary");
    assert!(text.starts_with("# 📚 Medical Clinic Power BI - Data Dictionary"));
    assert!(text.contains("GrossProfit = NetAmount - TotalCost - PaymentFee"));
    assert!(text.contains("**Last Updated:** 2025-01-09"));
}
