//! Enumerations stored in the railway tile layout.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::map::Axis;

// =============================================================================
// Tile discriminants
// =============================================================================

/// Top two bits of `m5` on a railway tile. Checked before any other bit of
/// the tile is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RailTileType {
    Normal = 0x00,
    Signals = 0x40,
    Unused = 0x80,
    DepotWaypoint = 0xC0,
}

impl RailTileType {
    pub const MASK: u8 = 0xC0;

    pub fn from_m5(m5: u8) -> Self {
        match m5 & Self::MASK {
            0x00 => RailTileType::Normal,
            0x40 => RailTileType::Signals,
            0x80 => RailTileType::Unused,
            _ => RailTileType::DepotWaypoint,
        }
    }

    /// Normal and signal tiles carry a track bit set in `m5`.
    pub fn has_track_bits(self) -> bool {
        matches!(self, RailTileType::Normal | RailTileType::Signals)
    }
}

/// Subtype of a `RailTileType::DepotWaypoint` tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RailTileSubtype {
    Depot = 0x00,
    Waypoint = 0x04,
}

impl RailTileSubtype {
    pub const MASK: u8 = 0x3C;

    pub fn from_m5(m5: u8) -> Option<Self> {
        match m5 & Self::MASK {
            0x00 => Some(RailTileSubtype::Depot),
            0x04 => Some(RailTileSubtype::Waypoint),
            _ => None,
        }
    }
}

// =============================================================================
// Rail types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RailType {
    Rail = 0,
    Electric = 1,
    Monorail = 2,
    Maglev = 3,
}

impl RailType {
    pub const ALL: [RailType; 4] = [
        RailType::Rail,
        RailType::Electric,
        RailType::Monorail,
        RailType::Maglev,
    ];

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }
}

// =============================================================================
// Tracks
// =============================================================================

/// A single piece of track within a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Track {
    /// Along the X axis (north-east to south-west).
    X = 0,
    /// Along the Y axis (north-west to south-east).
    Y = 1,
    Upper = 2,
    Lower = 3,
    Left = 4,
    Right = 5,
}

impl Track {
    pub const ALL: [Track; 6] = [
        Track::X,
        Track::Y,
        Track::Upper,
        Track::Lower,
        Track::Left,
        Track::Right,
    ];

    pub fn to_bits(self) -> TrackBits {
        TrackBits::from_bits_truncate(1 << self as u8)
    }

    /// Straight track running along `axis`.
    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Track::X,
            Axis::Y => Track::Y,
        }
    }
}

bitflags! {
    /// Set of tracks present on a tile, one bit per `Track`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TrackBits: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const UPPER = 1 << 2;
        const LOWER = 1 << 3;
        const LEFT = 1 << 4;
        const RIGHT = 1 << 5;

        const CROSS = Self::X.bits() | Self::Y.bits();
        const HORZ = Self::UPPER.bits() | Self::LOWER.bits();
        const VERT = Self::LEFT.bits() | Self::RIGHT.bits();
        const THREE_WAY_NE = Self::X.bits() | Self::UPPER.bits() | Self::RIGHT.bits();
        const THREE_WAY_SE = Self::Y.bits() | Self::LOWER.bits() | Self::RIGHT.bits();
        const THREE_WAY_SW = Self::X.bits() | Self::LOWER.bits() | Self::LEFT.bits();
        const THREE_WAY_NW = Self::Y.bits() | Self::UPPER.bits() | Self::LEFT.bits();
        const ALL = Self::CROSS.bits() | Self::HORZ.bits() | Self::VERT.bits();
    }
}

impl TrackBits {
    /// Width of the track bit field in `m5`.
    pub const FIELD_WIDTH: u32 = 6;

    /// Individual tracks in the set, in `Track` order.
    pub fn tracks(self) -> impl Iterator<Item = Track> {
        Track::ALL
            .into_iter()
            .filter(move |track| self.contains(track.to_bits()))
    }
}

// =============================================================================
// Signals
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SignalType {
    Normal = 0,
    /// Presignal block entry.
    Entry = 1,
    /// Presignal block exit.
    Exit = 2,
    /// Presignal inter-block.
    Combo = 3,
}

impl SignalType {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(SignalType::Normal),
            1 => Some(SignalType::Entry),
            2 => Some(SignalType::Exit),
            3 => Some(SignalType::Combo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SignalVariant {
    Electric = 0,
    Semaphore = 1,
}
