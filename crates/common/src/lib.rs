//! Common utilities and shared types for linkup.
//!
//! This crate provides foundational components used across all linkup crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//! - **Relative time**: Human-readable timestamps via [`relative_time`]
//!
//! # Example
//!
//! ```no_run
//! use linkup_common::{Config, IdGenerator, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID: {}", id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod relative_time;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
pub use relative_time::relative_time;
