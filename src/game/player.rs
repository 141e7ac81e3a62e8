use std::fmt;

/// Seat of a player in the two-element roster. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Position in the roster
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player one"),
            PlayerId::Two => write!(f, "player two"),
        }
    }
}

/// A participant: display name plus the marker drawn in occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: char,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: char) -> Self {
        Player {
            name: name.into(),
            marker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> char {
        self.marker
    }
}
