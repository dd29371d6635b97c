pub mod csv;
pub mod dictionary;
