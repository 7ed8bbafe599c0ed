use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::engine::config;
use crate::entities::HitRect;
use crate::map::LaneBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub lives: u32,
    pub has_coffee: bool,
    /// Deliveries completed toward today's quota
    pub delivered: u32,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        Self {
            pos: start,
            lives: config::START_LIVES,
            has_coffee: false,
            delivered: 0,
        }
    }

    pub fn hit_rect(&self) -> HitRect {
        HitRect::new(
            self.pos.x + config::PLAYER_HIT_OFFSET_X,
            self.pos.y + config::PLAYER_HIT_OFFSET_Y,
            config::PLAYER_WIDTH,
            config::PLAYER_HEIGHT,
        )
    }

    /// One lane step in the given direction. A step that would leave the
    /// legal window is dropped, leaving the position unchanged.
    pub fn step(&mut self, direction: Direction, bounds: &LaneBounds) {
        match direction {
            Direction::Up => {
                self.pos.y = checked_move(
                    self.pos.y - config::LANE_STEP_Y,
                    bounds.y_min,
                    bounds.y_max,
                    config::LANE_STEP_Y,
                    self.pos.y,
                );
            }
            Direction::Down => {
                self.pos.y = checked_move(
                    self.pos.y + config::LANE_STEP_Y,
                    bounds.y_min,
                    bounds.y_max,
                    config::LANE_STEP_Y,
                    self.pos.y,
                );
            }
            Direction::Left => {
                self.pos.x = checked_move(
                    self.pos.x - config::LANE_STEP_X,
                    bounds.x_min,
                    bounds.x_max,
                    config::LANE_STEP_X,
                    self.pos.x,
                );
            }
            Direction::Right => {
                self.pos.x = checked_move(
                    self.pos.x + config::LANE_STEP_X,
                    bounds.x_min,
                    bounds.x_max,
                    config::LANE_STEP_X,
                    self.pos.x,
                );
            }
        }
    }

    /// Back to the map's start point. Lives and delivery progress are
    /// handled by the death sequence, not here.
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
    }
}

/// Target position if it stays inside `[min*step, max*step)`, the current
/// one otherwise.
fn checked_move(target: f32, min: i32, max: i32, step: f32, current: f32) -> f32 {
    if target >= min as f32 * step && target < max as f32 * step {
        target
    } else {
        current
    }
}
