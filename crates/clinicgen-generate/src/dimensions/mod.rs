pub mod date;
pub mod employee;
pub mod patient;
