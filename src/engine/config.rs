/// Nominal fixed timestep: 60 Hz
pub const TICK_RATE: f32 = 60.0;
pub const DT: f32 = 1.0 / TICK_RATE;

/// Lane grid steps in pixels: one column / one row of the street grid
pub const LANE_STEP_X: f32 = 101.0;
pub const LANE_STEP_Y: f32 = 83.0;

/// Spatial index cell size (px). Half a cell on each side of an entity is
/// covered at insertion time, so a single-cell query behaves like a radius
/// search of roughly one cell.
pub const CELL_SIZE: f32 = 250.0;

/// Legal movement window in grid units. x covers the walkable columns,
/// y covers every row from the pickup sidewalk down to the delivery curb.
pub const BOUNDS_X_MIN: i32 = 0;
pub const BOUNDS_X_MAX: i32 = 11;
pub const BOUNDS_Y_MIN: i32 = 0;
pub const BOUNDS_Y_MAX: i32 = 12;

/// Collectible spawn rows (grid units)
pub const PICKUP_ROW: i32 = 1;
pub const DELIVERY_ROW: i32 = 12;
/// Spawn columns exclude both outside edges
pub const ITEM_COL_MIN: i32 = 1;
pub const ITEM_COL_MAX: i32 = 10;

// --- Player ---

pub const PLAYER_START_X: f32 = 505.0;
pub const PLAYER_START_Y: f32 = 980.0;
pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 75.0;
pub const PLAYER_HIT_OFFSET_X: f32 = 21.0;
pub const PLAYER_HIT_OFFSET_Y: f32 = 51.0;
pub const START_LIVES: u32 = 3;

// --- Session pacing ---

/// "Day N" banner duration (2 s at 60 Hz)
pub const DAY_BANNER_TICKS: i32 = 2 * 60;
/// How long a held coffee stays warm (15 s at 60 Hz)
pub const COFFEE_TIMER_TICKS: i32 = 15 * 60;
/// Coworkers wanting coffee on day 1; grows by one per day
pub const START_QUOTA: u32 = 2;

// --- Collectibles ---

pub const COFFEE_WIDTH: f32 = 70.0;
pub const COFFEE_HEIGHT: f32 = 55.0;
pub const COFFEE_VALUE: u32 = 100;
pub const OFFICE_WIDTH: f32 = 83.0;
pub const OFFICE_HEIGHT: f32 = 101.0;
pub const OFFICE_VALUE: u32 = 1000;
pub const ITEM_HIT_OFFSET_X: f32 = 0.0;
pub const ITEM_HIT_OFFSET_Y: f32 = 57.0;

// --- Traffic ---

/// Respawn column for left-to-right vehicles, one step off-screen
pub const TRAFFIC_START_X: f32 = -LANE_STEP_X;
pub const TRAFFIC_HEIGHT: f32 = 57.0;
pub const TRAFFIC_HIT_OFFSET_Y: f32 = 57.0;
/// Extra off-screen margin before a wide right-to-left vehicle wraps.
/// Tuned against the visible window; not derived from the lane step.
pub const WIDE_WRAP_MARGIN: f32 = 202.0;

pub const HATCH_WIDTH: f32 = 96.0;
pub const SEDAN_WIDTH: f32 = 96.0;
pub const COUPE_WIDTH: f32 = 126.0;
pub const VAN_WIDTH: f32 = 126.0;
pub const SEMI_WIDTH: f32 = 238.0;
/// Cab/trailer hit-box trim for the long trucks
pub const SEMI_HIT_OFFSET_X: f32 = 5.0;
pub const SEMI_REVERSE_HIT_OFFSET_X: f32 = 58.0;

// --- Archetype Profiles ---

use crate::entities::traffic::Archetype;

#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    pub width: f32,
    pub height: f32,
    pub hit_offset_x: f32,
    pub hit_offset_y: f32,
}

pub fn archetype_profile(archetype: Archetype) -> ArchetypeProfile {
    match archetype {
        Archetype::Hatch => ArchetypeProfile {
            width: HATCH_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: 0.0,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
        Archetype::Sedan => ArchetypeProfile {
            width: SEDAN_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: 0.0,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
        Archetype::Coupe => ArchetypeProfile {
            width: COUPE_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: 0.0,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
        Archetype::Van => ArchetypeProfile {
            width: VAN_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: 0.0,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
        Archetype::Semi => ArchetypeProfile {
            width: SEMI_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: SEMI_HIT_OFFSET_X,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
        Archetype::SemiReverse => ArchetypeProfile {
            width: SEMI_WIDTH,
            height: TRAFFIC_HEIGHT,
            hit_offset_x: SEMI_REVERSE_HIT_OFFSET_X,
            hit_offset_y: TRAFFIC_HIT_OFFSET_Y,
        },
    }
}
