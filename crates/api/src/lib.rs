//! RentEverything ML service library.
//!
//! Exposes config, error handling, extractors, routes and the shared router
//! builder so integration tests and the binary entrypoint use the same
//! wiring.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
