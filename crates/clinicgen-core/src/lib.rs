//! Core contracts for Clinicgen.
//!
//! This crate defines the row types of every table in the star schema, the
//! literal fixture dimensions as constant tables, and the money helpers
//! shared by the generation engine and its tests.

pub mod fixtures;
pub mod money;
pub mod tables;

pub use fixtures::{BRANCHES, DOCTORS, INSURANCES, PAYMENT_METHODS, SERVICES};
pub use tables::{
    AppointmentRow, AppointmentStatus, BillingRow, Branch, BranchSize, DateRow, Doctor,
    EmployeeRow, Insurance, PatientRow, PaymentMethod, PaymentStatus, Position, Service,
    ServiceCategory, VisitRow,
};
