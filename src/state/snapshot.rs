use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    Player,
    Traffic,
    Coffee,
    HomeOffice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: u32,
    pub entity_type: EntityType,
    pub x: f32,
    pub y: f32,
    pub extra: Option<EntityExtra>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityExtra {
    Player {
        lives: u32,
        has_coffee: bool,
        delivered: u32,
    },
    Traffic {
        archetype: String,
    },
}

/// Serializable view of one tick, consumed by the host's renderer and HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub mode: String,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub coffee_quota: u32,
    pub coffee_timer: i32,
    pub day_timer: i32,
    pub entities: Vec<EntitySnapshot>,
}
