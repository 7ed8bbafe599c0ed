use log::{debug, info};
use rand_chacha::ChaChaRng;

use crate::entities::item::ItemKind;
use crate::entities::world::World;
use crate::events::game_events::{
    CoffeeCollectedEvent, DayStartedEvent, DeathCause, DeliveryEvent, GameEvent, GameOverEvent,
    PlayerDiedEvent, SoundEvent, SoundId,
};
use crate::map::GameMap;
use crate::state::session::{Mode, SessionState};

/// Coffee pickup: flag the player as carrying, swap the collectible for a
/// delivery target on the far curb and bank the pickup score.
pub fn collect_coffee(
    world: &mut World,
    session: &mut SessionState,
    item_id: u32,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let Some(item) = world.item(item_id).copied() else {
        return;
    };
    let value = item.kind.value();

    events.push(GameEvent::Sound(SoundEvent {
        sound: SoundId::PickupBell,
        looped: false,
        tick,
    }));
    world.player.has_coffee = true;
    world.remove_item(item_id);
    session.add_score(value);
    world.spawn_item(ItemKind::HomeOffice, map, rng);

    events.push(GameEvent::CoffeeCollected(CoffeeCollectedEvent {
        item_id,
        value,
        tick,
    }));
}

/// Delivery: clear the carry flag, refresh the carry window, restock a
/// coffee on the far sidewalk and advance the daily quota. Reaching the
/// quota rolls the session into the next day.
///
/// Delivery is not gated on actually holding a coffee; an empty-handed
/// visit to the office still counts.
pub fn deliver_coffee(
    world: &mut World,
    session: &mut SessionState,
    item_id: u32,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let Some(item) = world.item(item_id).copied() else {
        return;
    };
    let value = item.kind.value();

    world.player.has_coffee = false;
    session.reset_coffee_timer();
    world.remove_item(item_id);
    session.add_score(value);
    world.spawn_item(ItemKind::Coffee, map, rng);

    if world.player.delivered < session.coffee_quota {
        world.player.delivered += 1;
    }
    events.push(GameEvent::Delivery(DeliveryEvent {
        item_id,
        value,
        delivered: world.player.delivered,
        quota: session.coffee_quota,
        tick,
    }));

    if world.player.delivered == session.coffee_quota {
        world.player.delivered = 0;
        session.level_up();
        info!("quota met, advancing to day {}", session.level);
        events.push(GameEvent::DayStarted(DayStartedEvent {
            level: session.level,
            quota: session.coffee_quota,
            tick,
        }));
    }
}

/// Traffic hit: crash sounds, then the shared death sequence.
pub fn hit_traffic(
    world: &mut World,
    session: &mut SessionState,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    events.push(GameEvent::Sound(SoundEvent {
        sound: SoundId::Crash,
        looped: false,
        tick,
    }));
    events.push(GameEvent::Sound(SoundEvent {
        sound: SoundId::Hit,
        looped: false,
        tick,
    }));
    kill_player(
        world,
        session,
        map,
        rng,
        tick,
        DeathCause::TrafficCollision,
        events,
    );
}

/// Shared death sequence for traffic hits and expired coffees: one life
/// down, stage reset, carry state cleared. A session already in `Over`
/// ignores further deaths.
pub fn kill_player(
    world: &mut World,
    session: &mut SessionState,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
    cause: DeathCause,
    events: &mut Vec<GameEvent>,
) {
    if session.mode == Mode::Over {
        return;
    }

    world.player.lives = world.player.lives.saturating_sub(1);
    world.reset_stage(map, rng);
    world.player.has_coffee = false;
    session.reset_coffee_timer();

    debug!(
        "player died ({cause:?}), {} lives remaining",
        world.player.lives
    );
    events.push(GameEvent::PlayerDied(PlayerDiedEvent {
        cause,
        lives_remaining: world.player.lives,
        tick,
    }));

    if world.player.lives == 0 {
        session.mode = Mode::Over;
        events.push(GameEvent::Sound(SoundEvent {
            sound: SoundId::SadTrombone,
            looped: false,
            tick,
        }));
        events.push(GameEvent::Sound(SoundEvent {
            sound: SoundId::Boo,
            looped: false,
            tick,
        }));
        events.push(GameEvent::GameOver(GameOverEvent {
            final_score: session.score,
            days_survived: session.level - 1,
            tick,
        }));
        info!("game over at score {}", session.score);
    }
}
