use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// One of the four tile edges, clockwise from north-east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DiagDirection {
    NorthEast = 0,
    SouthEast = 1,
    SouthWest = 2,
    NorthWest = 3,
}

impl DiagDirection {
    pub const ALL: [DiagDirection; 4] = [
        DiagDirection::NorthEast,
        DiagDirection::SouthEast,
        DiagDirection::SouthWest,
        DiagDirection::NorthWest,
    ];

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    pub fn reverse(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// NE/SW run along X, SE/NW along Y.
    pub fn axis(self) -> Axis {
        match self {
            DiagDirection::NorthEast | DiagDirection::SouthWest => Axis::X,
            DiagDirection::SouthEast | DiagDirection::NorthWest => Axis::Y,
        }
    }

    /// Tile offset `(dx, dy)` of the neighbour across this edge.
    pub fn offset(self) -> (i32, i32) {
        match self {
            DiagDirection::NorthEast => (-1, 0),
            DiagDirection::SouthEast => (0, 1),
            DiagDirection::SouthWest => (1, 0),
            DiagDirection::NorthWest => (0, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Tile owner. Companies are `0..MAX_COMPANIES`, the rest are sentinels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
pub struct Owner(pub u8);

impl Owner {
    /// Width of the owner field in `Tile::m1`.
    pub const FIELD_WIDTH: u32 = 5;
    pub const MAX_COMPANIES: u8 = 8;
    pub const TOWN: Owner = Owner(0x0F);
    pub const NONE: Owner = Owner(0x10);
    pub const WATER: Owner = Owner(0x11);

    pub fn is_company(self) -> bool {
        self.0 < Self::MAX_COMPANIES
    }
}
