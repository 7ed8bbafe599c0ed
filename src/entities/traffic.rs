use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::config::{self, ArchetypeProfile};
use crate::entities::HitRect;
use crate::map::LaneBounds;

/// Traffic category: fixes a vehicle's footprint, hit-box trim and
/// wrap-around rule. Direction of travel is carried by the sign of the
/// vehicle's speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    Hatch,
    Sedan,
    Coupe,
    Van,
    Semi,
    SemiReverse,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Hatch => "Hatch",
            Archetype::Sedan => "Sedan",
            Archetype::Coupe => "Coupe",
            Archetype::Van => "Van",
            Archetype::Semi => "Semi",
            Archetype::SemiReverse => "SemiReverse",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Traffic {
    pub archetype: Archetype,
    pub pos: Vec2,
    /// Pre-scaled at construction: grid columns per dt-unit × lane step,
    /// so integration is a plain `x += speed * dt`.
    pub speed: f32,
}

impl Traffic {
    /// `col`/`row` in grid units, `speed` in grid columns per dt-unit.
    pub fn new(archetype: Archetype, col: f32, row: f32, speed: f32) -> Self {
        Self {
            archetype,
            pos: Vec2::new(col * config::LANE_STEP_X, row * config::LANE_STEP_Y),
            speed: speed * config::LANE_STEP_X,
        }
    }

    pub fn profile(&self) -> ArchetypeProfile {
        config::archetype_profile(self.archetype)
    }

    pub fn hit_rect(&self) -> HitRect {
        let profile = self.profile();
        HitRect::new(
            self.pos.x + profile.hit_offset_x,
            self.pos.y + profile.hit_offset_y,
            profile.width,
            profile.height,
        )
    }

    /// Advance one tick along the lane. The wrap test runs before
    /// integration, so a vehicle never stays outside its lane window.
    ///
    /// The respawn offsets differ per archetype width so a wrapping
    /// vehicle never pops into view mid-screen; the thresholds are tuned,
    /// not derived.
    pub fn update(&mut self, dt: f32, bounds: &LaneBounds) {
        let profile = self.profile();
        let min_px = bounds.x_min as f32 * config::LANE_STEP_X;
        let max_px = bounds.x_max as f32 * config::LANE_STEP_X;

        match self.archetype {
            Archetype::Hatch | Archetype::Coupe => {
                if self.pos.x > max_px {
                    self.pos.x = config::TRAFFIC_START_X;
                } else {
                    self.pos.x += self.speed * dt;
                }
            }
            Archetype::Semi => {
                // Respawn trails by the full truck length
                if self.pos.x > max_px {
                    self.pos.x = config::TRAFFIC_START_X - profile.width;
                } else {
                    self.pos.x += self.speed * dt;
                }
            }
            Archetype::Sedan => {
                if self.pos.x < min_px - config::LANE_STEP_X {
                    self.pos.x = (bounds.x_max + 1) as f32 * config::LANE_STEP_X;
                } else {
                    self.pos.x += self.speed * dt;
                }
            }
            Archetype::Van | Archetype::SemiReverse => {
                if self.pos.x < min_px - (profile.width + config::WIDE_WRAP_MARGIN) {
                    self.pos.x = max_px;
                } else {
                    self.pos.x += self.speed * dt;
                }
            }
        }
    }
}

/// The fixed rush-hour roster: four banks of lanes between the sidewalks,
/// columns and speeds in grid units.
pub fn rush_hour_roster() -> Vec<Traffic> {
    use Archetype::*;

    let roster: [(Archetype, f32, f32, f32); 25] = [
        (Hatch, 7.0, 11.0, 1.0),
        (Hatch, 4.0, 11.0, 1.0),
        (Hatch, 1.0, 11.0, 1.0),
        (Hatch, -2.0, 11.0, 1.0),
        (Sedan, 4.33, 10.0, -2.0),
        (Sedan, 8.66, 10.0, -2.0),
        (Sedan, 12.99, 10.0, -2.0),
        (Coupe, 8.0, 9.0, 4.0),
        (Coupe, 2.0, 9.0, 4.0),
        (Van, 2.0, 8.0, -4.0),
        (Van, 5.55, 8.0, -4.0),
        (Van, 9.1, 8.0, -4.0),
        (Van, 12.65, 8.0, -4.0),
        (Semi, 2.0, 6.0, 3.0),
        (Semi, -1.0, 6.0, 3.0),
        (Semi, -4.0, 6.0, 3.0),
        (SemiReverse, 8.0, 5.0, -3.0),
        (SemiReverse, 3.0, 5.0, -3.0),
        (SemiReverse, 0.0, 5.0, -3.0),
        (Semi, 8.0, 4.0, 1.0),
        (Semi, 3.0, 4.0, 1.0),
        (Semi, 0.0, 4.0, 1.0),
        (SemiReverse, 8.0, 3.0, -4.0),
        (SemiReverse, 3.0, 3.0, -4.0),
        (SemiReverse, 0.0, 3.0, -4.0),
    ];

    roster
        .iter()
        .map(|&(archetype, col, row, speed)| Traffic::new(archetype, col, row, speed))
        .collect()
}
