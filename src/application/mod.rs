// src/application/mod.rs
//
// Application Layer
//
// - Boundary between adapters (the CLI) and services
// - Translates between DTOs and domain values
// - Every command reads a fresh snapshot from the record store

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
