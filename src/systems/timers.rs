use rand_chacha::ChaChaRng;

use crate::entities::world::World;
use crate::events::game_events::{DeathCause, GameEvent};
use crate::map::GameMap;
use crate::state::session::{Mode, SessionState};
use crate::systems::interaction;

pub struct TimerResult {
    pub events: Vec<GameEvent>,
}

/// Advance the mode-driven countdowns.
///
/// The day banner timer runs while the session is in `Day` and flips to
/// `Play` at zero, re-arming itself for the next day. The coffee timer
/// runs while playing with a coffee in hand; letting it expire triggers
/// the same death sequence as a traffic hit.
pub fn run(
    world: &mut World,
    session: &mut SessionState,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
) -> TimerResult {
    let mut result = TimerResult { events: Vec::new() };

    match session.mode {
        Mode::Day => {
            session.day_timer -= 1;
            if session.day_timer <= 0 {
                session.mode = Mode::Play;
                session.reset_day_timer();
            }
        }
        Mode::Play => {
            if world.player.has_coffee {
                session.coffee_timer -= 1;
                if session.coffee_timer <= 0 {
                    interaction::kill_player(
                        world,
                        session,
                        map,
                        rng,
                        tick,
                        DeathCause::CoffeeExpired,
                        &mut result.events,
                    );
                }
            }
        }
        Mode::New | Mode::Over => {}
    }

    result
}
