use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::config;

/// Tile kinds addressable from a map descriptor, keyed by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Block,
    Building,
    Shoulder,
    Road,
    Sidewalk,
    SidewalkBottom,
}

impl TileKind {
    /// Resolve a descriptor tile id. An unknown id is a configuration
    /// error and fails map construction.
    pub fn from_id(id: u8) -> Result<Self, String> {
        match id {
            0 => Ok(TileKind::Block),
            1 => Ok(TileKind::Building),
            2 => Ok(TileKind::Shoulder),
            3 => Ok(TileKind::Road),
            4 => Ok(TileKind::Sidewalk),
            5 => Ok(TileKind::SidewalkBottom),
            _ => Err(format!("unknown tile id {id} in map descriptor")),
        }
    }
}

/// One descriptor row: an explicit run of tile ids, or a single id
/// repeated across the full map width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileRow {
    pub tiles: Vec<u8>,
    pub repeat: bool,
}

impl TileRow {
    pub fn repeated(id: u8) -> Self {
        Self {
            tiles: vec![id],
            repeat: true,
        }
    }
}

/// Legal movement window in grid units. Computed once at map load and
/// shared read-only by every traffic update and player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneBounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub col: u32,
    pub row: u32,
}

/// Street layout for one session: the tile grid plus the derived gameplay
/// geometry (movement window, player start, collectible rows).
#[derive(Debug, Clone)]
pub struct GameMap {
    pub bounds: LaneBounds,
    pub start_point: Vec2,
    pub pickup_row: i32,
    pub delivery_row: i32,
    pub tiles: Vec<Tile>,
}

impl GameMap {
    pub fn new(rows: &[TileRow]) -> Result<Self, String> {
        let columns = config::BOUNDS_X_MAX as u32;
        let mut tiles = Vec::new();

        for (row_idx, row) in rows.iter().enumerate() {
            if row.repeat {
                let id = *row
                    .tiles
                    .first()
                    .ok_or_else(|| format!("repeat row {row_idx} has no tile id"))?;
                let kind = TileKind::from_id(id)?;
                for col in 0..columns {
                    tiles.push(Tile {
                        kind,
                        col,
                        row: row_idx as u32,
                    });
                }
            } else {
                for (col, &id) in row.tiles.iter().enumerate() {
                    tiles.push(Tile {
                        kind: TileKind::from_id(id)?,
                        col: col as u32,
                        row: row_idx as u32,
                    });
                }
            }
        }

        Ok(Self {
            bounds: LaneBounds {
                x_min: config::BOUNDS_X_MIN,
                x_max: config::BOUNDS_X_MAX,
                y_min: config::BOUNDS_Y_MIN,
                y_max: config::BOUNDS_Y_MAX,
            },
            start_point: Vec2::new(config::PLAYER_START_X, config::PLAYER_START_Y),
            pickup_row: config::PICKUP_ROW,
            delivery_row: config::DELIVERY_ROW,
            tiles,
        })
    }

    /// The standard street: buildings and the pickup sidewalk up top, two
    /// banks of traffic lanes split by a median, the delivery curb at the
    /// bottom.
    pub fn default_descriptor() -> Vec<TileRow> {
        vec![
            TileRow::repeated(1), // buildings
            TileRow::repeated(4), // pickup sidewalk
            TileRow::repeated(2), // shoulder
            TileRow::repeated(3), // lanes 3..=6
            TileRow::repeated(3),
            TileRow::repeated(3),
            TileRow::repeated(3),
            TileRow::repeated(2), // median
            TileRow::repeated(3), // lanes 8..=11
            TileRow::repeated(3),
            TileRow::repeated(3),
            TileRow::repeated(3),
            TileRow::repeated(5), // delivery curb
        ]
    }
}
