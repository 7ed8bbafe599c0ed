use rand_chacha::ChaChaRng;

use crate::entities::item::ItemKind;
use crate::entities::world::World;
use crate::entities::{EntityRef, HitRect};
use crate::events::game_events::GameEvent;
use crate::map::GameMap;
use crate::spatial::SpatialIndex;
use crate::state::session::SessionState;
use crate::systems::interaction;

pub struct CollisionResult {
    pub events: Vec<GameEvent>,
}

/// Strict AABB overlap between two hit rectangles. Touching edges do not
/// count; all four comparisons are strict.
pub fn overlaps(a: &HitRect, b: &HitRect) -> bool {
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

/// Test the player against the candidates indexed near their position and
/// dispatch the matching interaction for each overlap.
///
/// Candidates come exclusively from the spatial index, which must have
/// been rebuilt this tick: an entity whose position diverged from its
/// last insertion silently escapes detection until the next rebuild.
pub fn run(
    world: &mut World,
    session: &mut SessionState,
    index: &SpatialIndex<EntityRef>,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
) -> CollisionResult {
    let mut result = CollisionResult { events: Vec::new() };

    let candidates: Vec<EntityRef> = index
        .query(world.player.pos.x, world.player.pos.y)
        .to_vec();

    for candidate in candidates {
        // Re-read the player rect each time: a death mid-pass moves the
        // player back to the start point.
        let player_rect = world.player.hit_rect();

        match candidate {
            EntityRef::Traffic(slot) => {
                let Some(vehicle) = world.traffic.get(slot).copied() else {
                    continue;
                };
                if overlaps(&player_rect, &vehicle.hit_rect()) {
                    interaction::hit_traffic(world, session, map, rng, tick, &mut result.events);
                }
            }
            EntityRef::Item(id) => {
                // The item may already be gone if an earlier candidate
                // consumed it.
                let Some(item) = world.item(id).copied() else {
                    continue;
                };
                if overlaps(&player_rect, &item.hit_rect()) {
                    match item.kind {
                        ItemKind::Coffee => interaction::collect_coffee(
                            world,
                            session,
                            id,
                            map,
                            rng,
                            tick,
                            &mut result.events,
                        ),
                        ItemKind::HomeOffice => interaction::deliver_coffee(
                            world,
                            session,
                            id,
                            map,
                            rng,
                            tick,
                            &mut result.events,
                        ),
                    }
                }
            }
        }
    }

    result
}
