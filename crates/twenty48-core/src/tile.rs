//! Newly spawned tiles and where they land.

use std::fmt;

/// Largest storable exponent. Merges saturate here.
pub const MAX_EXPONENT: u8 = 0xF;

/// Exponent of the 2048 tile.
pub const WIN_EXPONENT: u8 = 11;

/// A tile the generator can place: a 2 or a 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    Two = 1,
    Four = 2,
}

impl Tile {
    /// Both spawnable tiles, in the order the searches try them.
    pub const ALL: [Tile; 2] = [Tile::Two, Tile::Four];

    /// Stored exponent (1 for a 2, 2 for a 4).
    #[inline]
    pub const fn exponent(self) -> u8 {
        self as u8
    }

    /// Displayed value.
    #[inline]
    pub const fn value(self) -> u32 {
        1 << self.exponent()
    }

    /// Probability that the random generator draws this tile.
    #[inline]
    pub const fn weight(self) -> f32 {
        match self {
            Tile::Two => 0.9,
            Tile::Four => 0.1,
        }
    }

    /// Map a stored exponent back to a spawnable tile.
    #[inline]
    pub const fn from_exponent(exponent: u8) -> Option<Tile> {
        match exponent {
            1 => Some(Tile::Two),
            2 => Some(Tile::Four),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A tile together with the cell it was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Which tile.
    pub tile: Tile,
    /// Cell index, row-major from the top-left corner.
    pub position: usize,
}
