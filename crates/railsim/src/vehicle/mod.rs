//! Vehicles, reduced to what the depot checks need.
//!
//! Type-specific state lives in `VehicleKind`, so reading road vehicle fields
//! from a train is impossible rather than merely wrong.

use bevy::prelude::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::ROAD_VEH_STATE_IN_DEPOT;
use crate::map::TileIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Train,
    Road,
    Ship,
    Aircraft,
    Special,
    Disaster,
}

bitflags! {
    /// Vehicle status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct VehicleStatus: u8 {
        const HIDDEN = 0x01;
        const STOPPED = 0x02;
        const UNCLICKABLE = 0x04;
        const DEFAULT_PALETTE = 0x08;
        const TRAIN_SLOWING = 0x10;
        const SHADOW = 0x20;
        const AIRCRAFT_BROKEN = 0x40;
        const CRASHED = 0x80;
    }
}

/// Road vehicle specific state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadVehicle {
    /// Position within the road tile's movement table, or
    /// `ROAD_VEH_STATE_IN_DEPOT`.
    pub state: u8,
    pub frame: u8,
    pub blocked_ctr: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Train,
    Road(RoadVehicle),
    Ship,
    Aircraft,
    Special,
    Disaster,
}

#[derive(Component, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub tile: TileIndex,
    pub status: VehicleStatus,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(tile: TileIndex, kind: VehicleKind) -> Self {
        Self {
            tile,
            status: VehicleStatus::empty(),
            kind,
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        match self.kind {
            VehicleKind::Train => VehicleType::Train,
            VehicleKind::Road(_) => VehicleType::Road,
            VehicleKind::Ship => VehicleType::Ship,
            VehicleKind::Aircraft => VehicleType::Aircraft,
            VehicleKind::Special => VehicleType::Special,
            VehicleKind::Disaster => VehicleType::Disaster,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.status.contains(VehicleStatus::STOPPED)
    }
}

/// True when the road vehicle `v` is inside a depot.
///
/// Panics if `v` is not a road vehicle.
pub fn is_road_veh_in_depot(v: &Vehicle) -> bool {
    match v.kind {
        VehicleKind::Road(road) => road.state == ROAD_VEH_STATE_IN_DEPOT,
        _ => panic!("{:?} is not a road vehicle", v.vehicle_type()),
    }
}

/// True when the road vehicle `v` is inside a depot and stopped.
pub fn is_road_veh_in_depot_stopped(v: &Vehicle) -> bool {
    is_road_veh_in_depot(v) && v.is_stopped()
}
