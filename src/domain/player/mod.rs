pub mod entity;
pub mod invariants;

pub use entity::Player;
pub use invariants::{validate_new_player, validate_player};
