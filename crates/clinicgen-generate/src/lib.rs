//! Generation engine for the clinic star-schema dataset.
//!
//! One linear pipeline: dimension builders, fact builders, export. No
//! state is shared between tables beyond the dimensions the facts sample
//! their keys from, and every random draw is derived from the run seed.

pub mod dimensions;
pub mod engine;
pub mod errors;
pub mod facts;
pub mod model;
pub mod output;
pub mod sampling;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
