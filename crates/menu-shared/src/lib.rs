//! # Menu Shared
//! 
//! Configuration, telemetry, and small helpers shared by the menu crates.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
