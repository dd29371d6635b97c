//! Row types for every table in the star schema.
//!
//! Field order and serde renames pin the exact CSV column names and order
//! the downstream BI import expects; do not reorder fields.

use chrono::NaiveDate;
use serde::Serialize;

use crate::money;

/// One row of the date dimension, one per calendar day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateRow {
    pub date_key: u32,
    pub date: NaiveDate,
    pub year: i32,
    pub quarter: String,
    pub month: u32,
    pub month_name: String,
    pub month_name_thai: &'static str,
    pub day: u32,
    pub day_of_week: u32,
    pub day_name: String,
    pub week_of_year: u32,
    pub is_weekend: u8,
    pub fiscal_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BranchSize {
    Large,
    Medium,
    Small,
}

/// Branch fixture row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Branch {
    #[serde(rename = "BranchID")]
    pub branch_id: u32,
    pub branch_code: &'static str,
    pub branch_name: &'static str,
    pub region: &'static str,
    pub province: &'static str,
    pub district: &'static str,
    pub size: BranchSize,
    pub open_date: &'static str,
    pub square_meter: u32,
    pub num_rooms: u32,
    pub monthly_rent: u32,
    pub is_active: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceCategory {
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Dermatology,
    Dental,
    Orthopedics,
    Laboratory,
    Vaccination,
    #[serde(rename = "Health Package")]
    HealthPackage,
}

/// Medical service fixture row. Service codes are ICD-10.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    #[serde(rename = "ServiceID")]
    pub service_id: u32,
    pub service_code: &'static str,
    pub service_name: &'static str,
    #[serde(rename = "ICD10Description")]
    pub icd10_description: &'static str,
    pub category: ServiceCategory,
    pub sub_category: &'static str,
    #[serde(serialize_with = "money::two_decimals")]
    pub base_price: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub cost: f64,
    pub duration: u32,
}

/// Doctor fixture row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Doctor {
    #[serde(rename = "DoctorID")]
    pub doctor_id: u32,
    pub doctor_code: &'static str,
    pub doctor_name: &'static str,
    pub specialty: &'static str,
    pub license_number: &'static str,
    pub years_of_experience: u32,
    pub education_level: &'static str,
    pub hourly_rate: u32,
    pub status: &'static str,
    pub hire_date: &'static str,
}

/// Staff position, also the staffing template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    Nurse,
    Receptionist,
    Admin,
    Cleaning,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::Nurse => "Nurse",
            Position::Receptionist => "Receptionist",
            Position::Admin => "Admin",
            Position::Cleaning => "Cleaning",
        }
    }

    pub fn department(&self) -> &'static str {
        match self {
            Position::Nurse | Position::Receptionist => "Operations",
            Position::Admin | Position::Cleaning => "Support",
        }
    }

    /// Inclusive monthly salary range in THB.
    pub fn salary_range(&self) -> (u32, u32) {
        match self {
            Position::Nurse => (25000, 35000),
            Position::Receptionist => (18000, 25000),
            Position::Admin => (22000, 30000),
            Position::Cleaning => (12000, 15000),
        }
    }
}

impl BranchSize {
    /// Headcount per position, in generation order.
    pub fn staffing(&self) -> [(Position, u32); 4] {
        match self {
            BranchSize::Large => [
                (Position::Nurse, 6),
                (Position::Receptionist, 3),
                (Position::Admin, 2),
                (Position::Cleaning, 2),
            ],
            BranchSize::Medium => [
                (Position::Nurse, 4),
                (Position::Receptionist, 2),
                (Position::Admin, 1),
                (Position::Cleaning, 1),
            ],
            BranchSize::Small => [
                (Position::Nurse, 2),
                (Position::Receptionist, 1),
                (Position::Admin, 1),
                (Position::Cleaning, 1),
            ],
        }
    }

    pub fn headcount(&self) -> u32 {
        self.staffing().iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRow {
    #[serde(rename = "EmployeeID")]
    pub employee_id: u32,
    pub employee_code: String,
    pub employee_name: String,
    pub position: Position,
    pub department: &'static str,
    #[serde(rename = "BranchID")]
    pub branch_id: u32,
    pub monthly_salary: u32,
    pub hire_date: NaiveDate,
    pub status: &'static str,
}

/// Payment method fixture row. `processing_fee` is a percentage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethod {
    #[serde(rename = "PaymentMethodID")]
    pub payment_method_id: u32,
    pub payment_method_code: &'static str,
    pub payment_method_name: &'static str,
    pub category: &'static str,
    pub is_active: u8,
    #[serde(serialize_with = "money::two_decimals")]
    pub processing_fee: f64,
}

/// Insurance plan fixture row. `coverage_percent` is a percentage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Insurance {
    #[serde(rename = "InsuranceID")]
    pub insurance_id: u32,
    pub insurance_code: &'static str,
    pub insurance_name: &'static str,
    pub company_name: &'static str,
    #[serde(serialize_with = "money::two_decimals")]
    pub coverage_percent: f64,
    pub is_active: u8,
}

/// Anonymized patient row; demographics only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PatientRow {
    #[serde(rename = "PatientID")]
    pub patient_id: u32,
    pub patient_code: String,
    pub gender: &'static str,
    pub age_group: &'static str,
    pub province: &'static str,
    pub membership_level: &'static str,
    pub registration_date: NaiveDate,
    pub is_active: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "No-Show")]
    NoShow,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppointmentRow {
    #[serde(rename = "AppointmentID")]
    pub appointment_id: u32,
    pub appointment_date_key: u32,
    pub appointment_time: String,
    #[serde(rename = "PatientID")]
    pub patient_id: u32,
    #[serde(rename = "BranchID")]
    pub branch_id: u32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: u32,
    #[serde(rename = "ServiceID")]
    pub service_id: u32,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisitRow {
    #[serde(rename = "VisitID")]
    pub visit_id: u32,
    pub visit_date_key: u32,
    #[serde(rename = "PatientID")]
    pub patient_id: u32,
    #[serde(rename = "BranchID")]
    pub branch_id: u32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: u32,
    #[serde(rename = "InsuranceID")]
    pub insurance_id: u32,
    pub check_in_time: String,
    pub check_out_time: String,
    pub waiting_time_minutes: u32,
    pub service_time_minutes: u32,
    pub satisfaction_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Cancelled,
}

/// Billing line item, the primary fact. Monetary fields are rounded to two
/// decimals at construction time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingRow {
    #[serde(rename = "BillingID")]
    pub billing_id: u32,
    pub billing_number: String,
    pub billing_date_key: u32,
    #[serde(rename = "VisitID")]
    pub visit_id: Option<u32>,
    #[serde(rename = "PatientID")]
    pub patient_id: u32,
    #[serde(rename = "BranchID")]
    pub branch_id: u32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: u32,
    #[serde(rename = "ServiceID")]
    pub service_id: u32,
    #[serde(rename = "InsuranceID")]
    pub insurance_id: u32,
    #[serde(rename = "PaymentMethodID")]
    pub payment_method_id: u32,
    pub quantity: u32,
    #[serde(serialize_with = "money::two_decimals")]
    pub unit_price: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub gross_amount: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub discount_percent: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub discount_amount: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub net_amount: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub insurance_coverage_amount: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub patient_paid_amount: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub payment_fee: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub total_cost: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub gross_profit: f64,
    #[serde(serialize_with = "money::two_decimals")]
    pub gross_profit_margin: f64,
    pub payment_status: PaymentStatus,
    pub payment_date: NaiveDate,
}
