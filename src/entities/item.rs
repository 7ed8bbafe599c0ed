use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::engine::config;
use crate::entities::HitRect;
use crate::map::GameMap;

/// Collectible kind: the coffee to pick up on the far sidewalk, or the
/// home office it has to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Coffee,
    HomeOffice,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Coffee => "Coffee",
            ItemKind::HomeOffice => "HomeOffice",
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            ItemKind::Coffee => config::COFFEE_VALUE,
            ItemKind::HomeOffice => config::OFFICE_VALUE,
        }
    }

    fn size(&self) -> (f32, f32) {
        match self {
            ItemKind::Coffee => (config::COFFEE_WIDTH, config::COFFEE_HEIGHT),
            ItemKind::HomeOffice => (config::OFFICE_WIDTH, config::OFFICE_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
}

impl Item {
    /// Place at a random column of the kind's row: coffees on the pickup
    /// sidewalk, offices on the delivery curb. Edge columns are excluded.
    pub fn spawn(id: u32, kind: ItemKind, map: &GameMap, rng: &mut ChaChaRng) -> Self {
        let col = rng.gen_range(config::ITEM_COL_MIN..=config::ITEM_COL_MAX) as f32;
        let row = match kind {
            ItemKind::Coffee => map.pickup_row,
            ItemKind::HomeOffice => map.delivery_row,
        } as f32;
        Self {
            id,
            kind,
            pos: Vec2::new(col * config::LANE_STEP_X, row * config::LANE_STEP_Y),
        }
    }

    pub fn hit_rect(&self) -> HitRect {
        let (width, height) = self.kind.size();
        HitRect::new(
            self.pos.x + config::ITEM_HIT_OFFSET_X,
            self.pos.y + config::ITEM_HIT_OFFSET_Y,
            width,
            height,
        )
    }
}
