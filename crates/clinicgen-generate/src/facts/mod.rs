pub mod appointment;
pub mod billing;
pub mod visit;

/// Branch traffic shares, heaviest in Bangkok, in branch id order.
pub const BRANCH_WEIGHTS: [f64; 8] = [0.20, 0.18, 0.15, 0.12, 0.11, 0.09, 0.08, 0.07];
