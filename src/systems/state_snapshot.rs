use crate::entities::item::ItemKind;
use crate::entities::world::World;
use crate::state::session::SessionState;
use crate::state::snapshot::{EntityExtra, EntitySnapshot, EntityType, StateSnapshot};

/// Build a serializable StateSnapshot from the current world and session.
pub fn build(world: &World, session: &SessionState, tick: u64) -> StateSnapshot {
    let mut entities = Vec::new();

    entities.push(EntitySnapshot {
        id: 0,
        entity_type: EntityType::Player,
        x: world.player.pos.x,
        y: world.player.pos.y,
        extra: Some(EntityExtra::Player {
            lives: world.player.lives,
            has_coffee: world.player.has_coffee,
            delivered: world.player.delivered,
        }),
    });

    for (slot, vehicle) in world.traffic.iter().enumerate() {
        entities.push(EntitySnapshot {
            id: slot as u32,
            entity_type: EntityType::Traffic,
            x: vehicle.pos.x,
            y: vehicle.pos.y,
            extra: Some(EntityExtra::Traffic {
                archetype: vehicle.archetype.as_str().to_string(),
            }),
        });
    }

    for item in &world.items {
        entities.push(EntitySnapshot {
            id: item.id,
            entity_type: match item.kind {
                ItemKind::Coffee => EntityType::Coffee,
                ItemKind::HomeOffice => EntityType::HomeOffice,
            },
            x: item.pos.x,
            y: item.pos.y,
            extra: None,
        });
    }

    StateSnapshot {
        tick,
        mode: session.mode.as_str().to_string(),
        level: session.level,
        score: session.score,
        lives: world.player.lives,
        coffee_quota: session.coffee_quota,
        coffee_timer: session.coffee_timer,
        day_timer: session.day_timer,
        entities,
    }
}
