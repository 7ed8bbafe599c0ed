use crosstown::engine::config;
use crosstown::engine::simulation::Simulation;
use crosstown::entities::item::ItemKind;
use crosstown::entities::player::Direction;
use crosstown::events::game_events::{DeathCause, GameEvent, SoundId};
use crosstown::state::session::Mode;
use crosstown::systems::input_system::SessionCommand;

fn sounds(events: &[GameEvent]) -> Vec<SoundId> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::Sound(s) => Some(s.sound),
            _ => None,
        })
        .collect()
}

// --- Collection protocol ---

#[test]
fn coffee_pickup_scores_and_spawns_an_office() {
    let mut sim = Simulation::new_with_seed(3);
    sim.session.mode = Mode::Play;

    let coffee = sim.world.items[0];
    assert_eq!(coffee.kind, ItemKind::Coffee);
    sim.world.player.pos = coffee.pos;
    sim.tick(config::DT);

    assert!(sim.world.player.has_coffee);
    assert_eq!(sim.session.score, config::COFFEE_VALUE);
    assert_eq!(sim.world.items.len(), 1);
    assert_eq!(sim.world.items[0].kind, ItemKind::HomeOffice);
    assert_eq!(
        sim.world.items[0].pos.y,
        sim.map.delivery_row as f32 * config::LANE_STEP_Y
    );

    let events = sim.drain_events();
    assert!(sounds(&events).contains(&SoundId::PickupBell));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::CoffeeCollected(c) if c.value == config::COFFEE_VALUE))
    );
}

#[test]
fn delivery_scores_resets_the_carry_timer_and_restocks_coffee() {
    let mut sim = Simulation::new_with_seed(3);
    sim.session.mode = Mode::Play;

    sim.world.player.pos = sim.world.items[0].pos;
    sim.tick(config::DT); // pickup
    let timer_after_pickup = sim.session.coffee_timer;
    assert!(timer_after_pickup < config::COFFEE_TIMER_TICKS);

    sim.world.player.pos = sim.world.items[0].pos;
    sim.tick(config::DT); // delivery

    assert!(!sim.world.player.has_coffee);
    assert_eq!(sim.session.coffee_timer, config::COFFEE_TIMER_TICKS);
    assert_eq!(
        sim.session.score,
        config::COFFEE_VALUE + config::OFFICE_VALUE
    );
    assert_eq!(sim.world.player.delivered, 1);
    assert_eq!(sim.session.mode, Mode::Play);
    assert_eq!(sim.world.items.len(), 1);
    assert_eq!(sim.world.items[0].kind, ItemKind::Coffee);
}

#[test]
fn meeting_the_quota_levels_up_and_starts_the_next_day() {
    let mut sim = Simulation::new_with_seed(5);
    sim.session.mode = Mode::Play;
    assert_eq!(sim.session.coffee_quota, 2);

    // Two full pickup/delivery rounds.
    for _ in 0..2 {
        sim.world.player.pos = sim.world.items[0].pos;
        sim.tick(config::DT);
        sim.world.player.pos = sim.world.items[0].pos;
        sim.tick(config::DT);
    }

    assert_eq!(sim.session.level, 2);
    assert_eq!(sim.session.coffee_quota, 3);
    assert_eq!(sim.world.player.delivered, 0);
    assert_eq!(sim.session.mode, Mode::Day);

    let events = sim.drain_events();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::DayStarted(d) if d.level == 2 && d.quota == 3))
    );
}

// --- Death protocol ---

#[test]
fn traffic_collision_costs_a_life_and_resets_the_stage() {
    let mut sim = Simulation::new_with_seed(4);
    sim.session.mode = Mode::Play;

    sim.world.player.pos = sim.world.traffic[0].pos;
    sim.tick(config::DT);

    assert_eq!(sim.world.player.lives, config::START_LIVES - 1);
    assert_eq!(sim.session.mode, Mode::Play);
    assert_eq!(sim.world.player.pos, sim.map.start_point);
    assert!(!sim.world.player.has_coffee);
    assert_eq!(sim.world.items.len(), 1);
    assert_eq!(sim.world.items[0].kind, ItemKind::Coffee);

    let events = sim.drain_events();
    let cues = sounds(&events);
    assert!(cues.contains(&SoundId::Crash));
    assert!(cues.contains(&SoundId::Hit));
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PlayerDied(d) if d.cause == DeathCause::TrafficCollision && d.lives_remaining == 2
    )));
}

#[test]
fn death_does_not_reset_traffic() {
    let mut sim = Simulation::new_with_seed(4);
    sim.session.mode = Mode::Play;

    // Let the street flow for a while first.
    for _ in 0..120 {
        sim.tick(config::DT);
    }
    let positions: Vec<f32> = sim.world.traffic.iter().map(|v| v.pos.x).collect();

    sim.world.player.pos = sim.world.traffic[3].pos;
    sim.tick(config::DT);

    assert_eq!(sim.world.player.lives, config::START_LIVES - 1);
    // The slow hatchbacks are hundreds of ticks away from their wrap
    // threshold here: one more integration step, never a reposition.
    for slot in 0..4 {
        let vehicle = &sim.world.traffic[slot];
        assert!(
            (vehicle.pos.x - positions[slot]).abs()
                <= vehicle.speed.abs() * config::DT + f32::EPSILON
        );
    }
    assert_eq!(sim.world.traffic.len(), 25);
}

#[test]
fn last_life_ends_the_session() {
    let mut sim = Simulation::new_with_seed(4);
    sim.session.mode = Mode::Play;
    sim.world.player.lives = 1;

    sim.world.player.pos = sim.world.traffic[0].pos;
    sim.tick(config::DT);

    assert_eq!(sim.world.player.lives, 0);
    assert_eq!(sim.session.mode, Mode::Over);

    let events = sim.drain_events();
    let cues = sounds(&events);
    assert!(cues.contains(&SoundId::SadTrombone));
    assert!(cues.contains(&SoundId::Boo));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver(g) if g.days_survived == 0))
    );
}

#[test]
fn no_further_deaths_once_over() {
    let mut sim = Simulation::new_with_seed(4);
    sim.session.mode = Mode::Play;
    sim.world.player.lives = 1;
    sim.world.player.pos = sim.world.traffic[0].pos;
    sim.tick(config::DT);
    assert_eq!(sim.session.mode, Mode::Over);
    sim.drain_events();

    // Park the player on a vehicle again: collisions are gated off and
    // lives stay clamped at zero.
    sim.world.player.pos = sim.world.traffic[1].pos;
    for _ in 0..10 {
        sim.tick(config::DT);
    }
    assert_eq!(sim.world.player.lives, 0);
    assert!(
        !sim
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerDied(_)))
    );
}

#[test]
fn expired_coffee_triggers_the_death_sequence() {
    let mut sim = Simulation::new_with_seed(6);
    sim.session.mode = Mode::Play;
    sim.world.player.has_coffee = true;
    sim.session.coffee_timer = 1;

    sim.tick(config::DT);

    assert_eq!(sim.world.player.lives, config::START_LIVES - 1);
    assert!(!sim.world.player.has_coffee);
    assert_eq!(sim.session.coffee_timer, config::COFFEE_TIMER_TICKS);
    assert_eq!(sim.world.player.pos, sim.map.start_point);
    assert!(sim.drain_events().iter().any(|e| matches!(
        e,
        GameEvent::PlayerDied(d) if d.cause == DeathCause::CoffeeExpired
    )));
}

#[test]
fn coffee_timer_only_runs_while_carrying() {
    let mut sim = Simulation::new_with_seed(6);
    sim.session.mode = Mode::Play;

    for _ in 0..50 {
        sim.tick(config::DT);
    }
    assert_eq!(sim.session.coffee_timer, config::COFFEE_TIMER_TICKS);
}

// --- Mode machine ---

#[test]
fn start_moves_new_to_day_and_loops_the_ambience() {
    let mut sim = Simulation::new_with_seed(1);
    assert_eq!(sim.session.mode, Mode::New);

    sim.push_command(SessionCommand::Start);
    sim.tick(config::DT);
    assert_eq!(sim.session.mode, Mode::Day);

    let events = sim.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::Sound(s) if s.sound == SoundId::TrafficAmbience && s.looped
    )));
}

#[test]
fn day_banner_expires_into_play() {
    let mut sim = Simulation::new_with_seed(1);
    sim.push_command(SessionCommand::Start);

    for _ in 0..config::DAY_BANNER_TICKS + 5 {
        sim.tick(config::DT);
    }

    assert_eq!(sim.session.mode, Mode::Play);
    assert_eq!(sim.session.day_timer, config::DAY_BANNER_TICKS);
}

#[test]
fn movement_is_ignored_outside_play() {
    let mut sim = Simulation::new_with_seed(1);
    let start = sim.world.player.pos;

    sim.push_command(SessionCommand::Move(Direction::Up));
    sim.tick(config::DT);
    assert_eq!(sim.world.player.pos, start);

    sim.push_command(SessionCommand::Start);
    sim.tick(config::DT);
    sim.push_command(SessionCommand::Move(Direction::Up));
    sim.tick(config::DT); // still on the day banner
    assert_eq!(sim.world.player.pos, start);
}

#[test]
fn movement_applies_in_play_and_respects_bounds() {
    let mut sim = Simulation::new_with_seed(1);
    sim.session.mode = Mode::Play;
    let start = sim.world.player.pos;

    sim.push_command(SessionCommand::Move(Direction::Up));
    sim.tick(config::DT);
    assert_eq!(sim.world.player.pos.y, start.y - config::LANE_STEP_Y);

    // The start row is the last legal row: stepping down is a wall.
    sim.push_command(SessionCommand::Move(Direction::Down));
    sim.tick(config::DT);
    sim.push_command(SessionCommand::Move(Direction::Down));
    sim.tick(config::DT);
    assert_eq!(sim.world.player.pos.y, start.y);
}

#[test]
fn restart_rebuilds_the_session_from_over() {
    let mut sim = Simulation::new_with_seed(4);
    sim.session.mode = Mode::Play;

    // Earn some score, then lose the last life.
    sim.world.player.pos = sim.world.items[0].pos;
    sim.tick(config::DT);
    assert!(sim.session.score > 0);
    sim.world.player.lives = 1;
    sim.world.player.pos = sim.world.traffic[0].pos;
    sim.tick(config::DT);
    assert_eq!(sim.session.mode, Mode::Over);

    sim.push_command(SessionCommand::Restart);
    sim.tick(config::DT);

    assert_eq!(sim.session.mode, Mode::Day);
    assert_eq!(sim.session.level, 1);
    assert_eq!(sim.session.score, 0);
    assert_eq!(sim.world.player.lives, config::START_LIVES);
    assert_eq!(sim.world.items.len(), 1);
    assert_eq!(sim.world.items[0].kind, ItemKind::Coffee);
    // Fresh roster, advanced by at most the one motion step of this tick.
    assert!((sim.world.traffic[0].pos.x - 7.0 * config::LANE_STEP_X).abs() < 5.0);
}

#[test]
fn restart_is_ignored_outside_over() {
    let mut sim = Simulation::new_with_seed(4);
    sim.push_command(SessionCommand::Restart);
    sim.tick(config::DT);
    assert_eq!(sim.session.mode, Mode::New);
}

// --- Invariants across event sequences ---

#[test]
fn score_never_decreases_and_lives_never_increase() {
    let mut sim = Simulation::new_with_seed(9);
    sim.session.mode = Mode::Play;
    // Keep the quota out of reach so deliveries never roll the session
    // into the day banner mid-scenario.
    sim.session.coffee_quota = 100;

    let mut last_score = 0;
    let mut last_lives = config::START_LIVES;

    for t in 0..600u32 {
        // Collect or deliver every 50 ticks, get run over twice.
        if t % 50 == 0 {
            sim.world.player.pos = sim.world.items[0].pos;
        }
        if t == 220 || t == 440 {
            sim.world.player.pos = sim.world.traffic[7].pos;
        }

        let snapshot = sim.tick(config::DT);
        assert!(snapshot.score >= last_score, "score regressed at tick {t}");
        assert!(snapshot.lives <= last_lives, "lives grew at tick {t}");
        last_score = snapshot.score;
        last_lives = snapshot.lives;
    }

    assert!(last_score > 0);
    assert_eq!(last_lives, config::START_LIVES - 2);
}

// --- Snapshots ---

#[test]
fn snapshot_lists_every_entity() {
    let sim = Simulation::new_with_seed(2);
    let snapshot = sim.build_snapshot();

    assert_eq!(snapshot.mode, "New");
    // player + 25 vehicles + 1 coffee
    assert_eq!(snapshot.entities.len(), 27);
    assert!(serde_json::to_string(&snapshot).is_ok());
}
