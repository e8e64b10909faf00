use serde::{Deserialize, Serialize};

use crate::map::{Axis, DiagDirection, Owner, TileIndex, TileMap, TileType};

use super::types::{
    RailTileSubtype, RailTileType, RailType, SignalType, SignalVariant, Track, TrackBits,
};

/// Decoded railway tile.
///
/// Built by reading the discriminant bits first, so each variant only carries
/// the fields that are meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailTile {
    Normal {
        owner: Owner,
        rail_type: RailType,
        tracks: TrackBits,
    },
    Signals {
        owner: Owner,
        rail_type: RailType,
        tracks: TrackBits,
        signal_type: SignalType,
        variant: SignalVariant,
    },
    Depot {
        owner: Owner,
        rail_type: RailType,
        direction: DiagDirection,
    },
    Waypoint {
        owner: Owner,
        rail_type: RailType,
        axis: Axis,
        index: u16,
        custom_sprite: bool,
    },
}

impl RailTile {
    pub fn owner(&self) -> Owner {
        match *self {
            RailTile::Normal { owner, .. }
            | RailTile::Signals { owner, .. }
            | RailTile::Depot { owner, .. }
            | RailTile::Waypoint { owner, .. } => owner,
        }
    }

    pub fn rail_type(&self) -> RailType {
        match *self {
            RailTile::Normal { rail_type, .. }
            | RailTile::Signals { rail_type, .. }
            | RailTile::Depot { rail_type, .. }
            | RailTile::Waypoint { rail_type, .. } => rail_type,
        }
    }

    /// Tracks a train can use on this tile. Depots and waypoints have a
    /// single straight track along their axis.
    pub fn tracks(&self) -> TrackBits {
        match *self {
            RailTile::Normal { tracks, .. } | RailTile::Signals { tracks, .. } => tracks,
            RailTile::Depot { direction, .. } => Track::from_axis(direction.axis()).to_bits(),
            RailTile::Waypoint { axis, .. } => Track::from_axis(axis).to_bits(),
        }
    }
}

impl TileMap {
    /// Decode a railway tile, or `None` if the tile is not railway or uses an
    /// unassigned layout.
    pub fn rail_tile(&self, t: TileIndex) -> Option<RailTile> {
        if !self.is_tile_type(t, TileType::Railway) {
            return None;
        }
        let owner = self.tile_owner(t);
        let rail_type = self.rail_type(t);
        let tile = match self.rail_tile_type(t) {
            RailTileType::Normal => RailTile::Normal {
                owner,
                rail_type,
                tracks: self.track_bits(t),
            },
            RailTileType::Signals => RailTile::Signals {
                owner,
                rail_type,
                tracks: self.track_bits(t),
                signal_type: self.signal_type(t),
                variant: self.signal_variant(t),
            },
            RailTileType::Unused => return None,
            RailTileType::DepotWaypoint => match self.rail_tile_subtype(t)? {
                RailTileSubtype::Depot => RailTile::Depot {
                    owner,
                    rail_type,
                    direction: self.rail_depot_direction(t),
                },
                RailTileSubtype::Waypoint => RailTile::Waypoint {
                    owner,
                    rail_type,
                    axis: self.rail_waypoint_axis(t),
                    index: self.waypoint_index(t),
                    custom_sprite: self.has_custom_waypoint_sprite(t),
                },
            },
        };
        Some(tile)
    }

    /// Overwrite `t` with the layout for `rail`.
    pub fn set_rail_tile(&mut self, t: TileIndex, rail: RailTile) {
        match rail {
            RailTile::Normal {
                owner,
                rail_type,
                tracks,
            } => self.make_rail_normal(t, owner, tracks, rail_type),
            RailTile::Signals {
                owner,
                rail_type,
                tracks,
                signal_type,
                variant,
            } => {
                self.make_rail_normal(t, owner, tracks, rail_type);
                self.add_signals(t, signal_type, variant);
            }
            RailTile::Depot {
                owner,
                rail_type,
                direction,
            } => self.make_rail_depot(t, owner, direction, rail_type),
            RailTile::Waypoint {
                owner,
                rail_type,
                axis,
                index,
                custom_sprite,
            } => {
                self.make_rail_waypoint(t, owner, axis, rail_type, index);
                if custom_sprite {
                    self.set_custom_waypoint_sprite(t);
                }
            }
        }
    }
}
