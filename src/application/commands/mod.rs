// src/application/commands/mod.rs
//
// Command Handlers
//
// - Commands are thin adapters between the CLI and services
// - Commands accept DTOs, return DTOs
// - Commands NEVER contain business logic

pub mod match_commands;
pub mod player_commands;
pub mod statistics_commands;

pub use match_commands::*;
pub use player_commands::*;
pub use statistics_commands::*;
