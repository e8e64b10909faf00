//! Railway tiles.
//!
//! A railway tile reuses the generic `Tile` bytes as a tagged union: the top
//! two bits of `m5` select between plain track, track with signals, and
//! depot/waypoint, and the remaining bits mean different things per variant.
//! The accessors on `TileMap` assert the tag before touching a
//! variant-specific field; `RailTile` is the decoded form.

mod accessors;
mod types;
mod view;


pub use types::*;
pub use view::RailTile;
