use serde::{Deserialize, Serialize};

/// A registered member of the community.
/// The display name is the whole identity; matches refer to players by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    /// Surrounding whitespace is dropped so " Ana" and "Ana" are the same player.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: name.trim().to_string(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
