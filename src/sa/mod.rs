//! Simulated Annealing (SA) for N-Queens.
//!
//! A single random board is perturbed one queen at a time. Improving moves
//! are always kept; a worsening move by `delta` conflicts is kept with
//! probability `exp(-delta / T)`, where the temperature `T` decays
//! geometrically every iteration. Rejected moves are undone in place.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
