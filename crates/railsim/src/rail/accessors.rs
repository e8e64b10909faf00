//! Railway tile layout on top of `TileMap`.
//!
//! | field                 | bits        | valid on                 |
//! |-----------------------|-------------|--------------------------|
//! | rail tile type        | m5 6..8     | railway                  |
//! | track bits            | m5 0..6     | normal, signals          |
//! | depot direction       | m5 0..2     | depot                    |
//! | waypoint axis         | m5 bit 0    | waypoint                 |
//! | depot/waypoint subtype| m5 2..6     | depot/waypoint           |
//! | waypoint index        | m2          | waypoint                 |
//! | rail type             | m3 0..4     | railway (and others)     |
//! | rail type on bridge   | m3 4..8     | tunnel/bridge            |
//! | custom waypoint sprite| m3 bit 4    | waypoint                 |
//! | signal type           | m4 0..2     | signals                  |
//! | signal variant        | m4 bit 2    | signals                  |
//! | rail type at crossing | m4 0..4     | road (level crossing)    |

use crate::bitmath::Bits;
use crate::map::{Axis, DiagDirection, Owner, TileIndex, TileMap, TileType};

use super::types::{
    RailTileSubtype, RailTileType, RailType, SignalType, SignalVariant, Track, TrackBits,
};

impl TileMap {
    // -----------------------------------------------------------------------
    // Discriminants
    // -----------------------------------------------------------------------

    pub fn rail_tile_type(&self, t: TileIndex) -> RailTileType {
        assert!(
            self.is_tile_type(t, TileType::Railway),
            "{t:?} is not a railway tile"
        );
        RailTileType::from_m5(self.tile(t).m5)
    }

    /// Subtype of a depot/waypoint tile, `None` for unknown subtype bits.
    pub fn rail_tile_subtype(&self, t: TileIndex) -> Option<RailTileSubtype> {
        assert_eq!(
            self.rail_tile_type(t),
            RailTileType::DepotWaypoint,
            "{t:?} is not a depot or waypoint"
        );
        RailTileSubtype::from_m5(self.tile(t).m5)
    }

    pub fn is_rail_depot(&self, t: TileIndex) -> bool {
        self.is_tile_type(t, TileType::Railway)
            && self.rail_tile_type(t) == RailTileType::DepotWaypoint
            && self.rail_tile_subtype(t) == Some(RailTileSubtype::Depot)
    }

    pub fn is_rail_waypoint(&self, t: TileIndex) -> bool {
        self.is_tile_type(t, TileType::Railway)
            && self.rail_tile_type(t) == RailTileType::DepotWaypoint
            && self.rail_tile_subtype(t) == Some(RailTileSubtype::Waypoint)
    }

    // -----------------------------------------------------------------------
    // Rail types
    // -----------------------------------------------------------------------

    pub fn rail_type(&self, t: TileIndex) -> RailType {
        decode_rail_type(t, self.tile(t).m3.gb(0, 4))
    }

    pub fn set_rail_type(&mut self, t: TileIndex, r: RailType) {
        self.tile_mut(t).m3.sb(0, 4, r as u8);
    }

    /// Rail type of the track crossing a road tile.
    pub fn rail_type_crossing(&self, t: TileIndex) -> RailType {
        assert!(
            self.is_tile_type(t, TileType::Road),
            "{t:?} is not a level crossing"
        );
        decode_rail_type(t, self.tile(t).m4.gb(0, 4))
    }

    pub fn set_rail_type_crossing(&mut self, t: TileIndex, r: RailType) {
        assert!(
            self.is_tile_type(t, TileType::Road),
            "{t:?} is not a level crossing"
        );
        self.tile_mut(t).m4.sb(0, 4, r as u8);
    }

    /// Rail type of the track on a bridge.
    pub fn rail_type_on_bridge(&self, t: TileIndex) -> RailType {
        assert!(
            self.is_tile_type(t, TileType::TunnelBridge),
            "{t:?} is not a bridge"
        );
        decode_rail_type(t, self.tile(t).m3.gb(4, 4))
    }

    pub fn set_rail_type_on_bridge(&mut self, t: TileIndex, r: RailType) {
        assert!(
            self.is_tile_type(t, TileType::TunnelBridge),
            "{t:?} is not a bridge"
        );
        self.tile_mut(t).m3.sb(4, 4, r as u8);
    }

    // -----------------------------------------------------------------------
    // Track bits (normal and signal tiles)
    // -----------------------------------------------------------------------

    pub fn track_bits(&self, t: TileIndex) -> TrackBits {
        self.assert_has_track_bits(t);
        TrackBits::from_bits_truncate(self.tile(t).m5.gb(0, TrackBits::FIELD_WIDTH))
    }

    pub fn set_track_bits(&mut self, t: TileIndex, bits: TrackBits) {
        self.assert_has_track_bits(t);
        self.tile_mut(t)
            .m5
            .sb(0, TrackBits::FIELD_WIDTH, bits.bits());
    }

    fn assert_has_track_bits(&self, t: TileIndex) {
        let ty = self.rail_tile_type(t);
        assert!(ty.has_track_bits(), "{t:?} is a {ty:?} rail tile without track bits");
    }

    // -----------------------------------------------------------------------
    // Depots and waypoints
    // -----------------------------------------------------------------------

    pub fn rail_depot_direction(&self, t: TileIndex) -> DiagDirection {
        assert!(self.is_rail_depot(t), "{t:?} is not a rail depot");
        DiagDirection::ALL[self.tile(t).m5.gb(0, 2) as usize]
    }

    pub fn rail_waypoint_axis(&self, t: TileIndex) -> Axis {
        assert!(self.is_rail_waypoint(t), "{t:?} is not a rail waypoint");
        if self.tile(t).m5.has_bit(0) {
            Axis::Y
        } else {
            Axis::X
        }
    }

    pub fn rail_waypoint_track(&self, t: TileIndex) -> Track {
        Track::from_axis(self.rail_waypoint_axis(t))
    }

    pub fn rail_waypoint_bits(&self, t: TileIndex) -> TrackBits {
        self.rail_waypoint_track(t).to_bits()
    }

    pub fn waypoint_index(&self, t: TileIndex) -> u16 {
        assert!(self.is_rail_waypoint(t), "{t:?} is not a rail waypoint");
        self.tile(t).m2
    }

    pub fn has_custom_waypoint_sprite(&self, t: TileIndex) -> bool {
        assert!(self.is_rail_waypoint(t), "{t:?} is not a rail waypoint");
        self.tile(t).m3.has_bit(4)
    }

    pub fn set_custom_waypoint_sprite(&mut self, t: TileIndex) {
        assert!(self.is_rail_waypoint(t), "{t:?} is not a rail waypoint");
        self.tile_mut(t).m3.set_bit(4);
    }

    pub fn clear_custom_waypoint_sprite(&mut self, t: TileIndex) {
        assert!(self.is_rail_waypoint(t), "{t:?} is not a rail waypoint");
        self.tile_mut(t).m3.clr_bit(4);
    }

    // -----------------------------------------------------------------------
    // Signals
    // -----------------------------------------------------------------------

    pub fn signal_type(&self, t: TileIndex) -> SignalType {
        self.assert_signals(t);
        match self.tile(t).m4.gb(0, 2) {
            0 => SignalType::Normal,
            1 => SignalType::Entry,
            2 => SignalType::Exit,
            _ => SignalType::Combo,
        }
    }

    pub fn set_signal_type(&mut self, t: TileIndex, s: SignalType) {
        self.assert_signals(t);
        self.tile_mut(t).m4.sb(0, 2, s as u8);
    }

    pub fn signal_variant(&self, t: TileIndex) -> SignalVariant {
        self.assert_signals(t);
        if self.tile(t).m4.has_bit(2) {
            SignalVariant::Semaphore
        } else {
            SignalVariant::Electric
        }
    }

    pub fn set_signal_variant(&mut self, t: TileIndex, v: SignalVariant) {
        self.assert_signals(t);
        self.tile_mut(t).m4.sb(2, 1, v as u8);
    }

    /// Turn a plain track tile into a signal tile. Track bits are kept.
    pub fn add_signals(&mut self, t: TileIndex, s: SignalType, v: SignalVariant) {
        assert_eq!(
            self.rail_tile_type(t),
            RailTileType::Normal,
            "{t:?} cannot take signals"
        );
        self.tile_mut(t).m5.sb(6, 2, RailTileType::Signals as u8 >> 6);
        self.set_signal_type(t, s);
        self.set_signal_variant(t, v);
    }

    /// Turn a signal tile back into a plain track tile. Track bits are kept.
    pub fn remove_signals(&mut self, t: TileIndex) {
        self.assert_signals(t);
        let tile = self.tile_mut(t);
        tile.m4.sb(0, 3, 0);
        tile.m5.sb(6, 2, RailTileType::Normal as u8 >> 6);
    }

    fn assert_signals(&self, t: TileIndex) {
        assert_eq!(
            self.rail_tile_type(t),
            RailTileType::Signals,
            "{t:?} has no signals"
        );
    }

    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    pub fn make_rail_normal(&mut self, t: TileIndex, o: Owner, bits: TrackBits, r: RailType) {
        self.make_railway(t, o, r);
        let m5 = &mut self.tile_mut(t).m5;
        *m5 = RailTileType::Normal as u8;
        m5.sb(0, TrackBits::FIELD_WIDTH, bits.bits());
    }

    pub fn make_rail_depot(&mut self, t: TileIndex, o: Owner, d: DiagDirection, r: RailType) {
        self.make_railway(t, o, r);
        self.tile_mut(t).m5 =
            RailTileType::DepotWaypoint as u8 | RailTileSubtype::Depot as u8 | d as u8;
    }

    pub fn make_rail_waypoint(
        &mut self,
        t: TileIndex,
        o: Owner,
        a: Axis,
        r: RailType,
        index: u16,
    ) {
        self.make_railway(t, o, r);
        let tile = self.tile_mut(t);
        tile.m2 = index;
        tile.m5 = RailTileType::DepotWaypoint as u8 | RailTileSubtype::Waypoint as u8 | a as u8;
    }

    /// Shared prologue: railway type, owner, m2..m4 reset, rail type in m3.
    fn make_railway(&mut self, t: TileIndex, o: Owner, r: RailType) {
        self.set_tile_type(t, TileType::Railway);
        self.set_tile_owner(t, o);
        let tile = self.tile_mut(t);
        tile.m2 = 0;
        tile.m3 = r as u8;
        tile.m4 = 0;
        tile.m5 = 0;
    }
}

fn decode_rail_type(t: TileIndex, bits: u8) -> RailType {
    RailType::from_bits(bits).unwrap_or_else(|| panic!("{t:?} has invalid rail type {bits}"))
}
