//! Core business logic for linkup.

pub mod authz;
pub mod services;

pub use services::*;
