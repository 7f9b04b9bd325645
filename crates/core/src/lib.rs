//! Deterministic listing assistance for the rental marketplace.
//!
//! Pure decision logic with no I/O: keyword-based category suggestion,
//! location-aware daily price suggestion, and the great-circle distance
//! helper the pricing rules depend on.

pub mod classification;
pub mod error;
pub mod geo;
pub mod pricing;
