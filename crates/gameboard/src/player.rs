//! Player records and the active-player pointer.

use crate::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A named participant holding one mark for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

/// Which of the two players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Seat {
    /// Plays X and moves first.
    #[default]
    One,
    /// Plays O.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn toggle(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into a two-element player array.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// Fixed mark of the seat.
    pub fn mark(self) -> Mark {
        match self {
            Seat::One => Mark::X,
            Seat::Two => Mark::O,
        }
    }
}
