use log::info;
use rand_chacha::ChaChaRng;

use crate::entities::player::Direction;
use crate::entities::world::World;
use crate::events::game_events::{DayStartedEvent, GameEvent, SoundEvent, SoundId};
use crate::map::GameMap;
use crate::state::session::{Mode, SessionState};

/// Commands the host queues between frames, consumed at the start of each
/// tick. Movement only lands while the session is in `Play`; `Start` and
/// `Restart` are honored from `New` and `Over` respectively. Anything
/// else is silently dropped, never queued for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Move(Direction),
    Start,
    Restart,
}

pub struct InputResult {
    pub events: Vec<GameEvent>,
}

/// Drain and apply all queued commands.
pub fn run(
    world: &mut World,
    session: &mut SessionState,
    commands: &mut Vec<SessionCommand>,
    map: &GameMap,
    rng: &mut ChaChaRng,
    tick: u64,
) -> InputResult {
    let queued: Vec<SessionCommand> = std::mem::take(commands);
    let mut result = InputResult { events: Vec::new() };

    for command in queued {
        match command {
            SessionCommand::Move(direction) => {
                if session.mode == Mode::Play {
                    world.player.step(direction, &map.bounds);
                }
            }
            SessionCommand::Start => {
                if session.mode == Mode::New {
                    session.mode = Mode::Day;
                    info!("session started");
                    result.events.push(GameEvent::Sound(SoundEvent {
                        sound: SoundId::TrafficAmbience,
                        looped: true,
                        tick,
                    }));
                    result.events.push(GameEvent::DayStarted(DayStartedEvent {
                        level: session.level,
                        quota: session.coffee_quota,
                        tick,
                    }));
                }
            }
            SessionCommand::Restart => {
                if session.mode == Mode::Over {
                    *session = SessionState::new();
                    *world = World::new(map, rng);
                    session.mode = Mode::Day;
                    info!("session restarted");
                    result.events.push(GameEvent::DayStarted(DayStartedEvent {
                        level: session.level,
                        quota: session.coffee_quota,
                        tick,
                    }));
                }
            }
        }
    }

    result
}
