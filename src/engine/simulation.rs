use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::engine::config;
use crate::entities::EntityRef;
use crate::entities::world::World;
use crate::events::game_events::GameEvent;
use crate::map::{GameMap, TileRow};
use crate::spatial::SpatialIndex;
use crate::state::session::{Mode, SessionState};
use crate::state::snapshot::StateSnapshot;
use crate::systems;
use crate::systems::input_system::SessionCommand;

/// Top-level simulation context.
///
/// Owns the entity collections, the session state machine and the spatial
/// index, and runs the systems in a fixed per-tick order: input, motion,
/// index rebuild, collision, timers. The order is load-bearing.
/// Collision candidates come from the index rebuilt the same tick, so
/// querying before the rebuild would let moved entities escape detection.
///
/// Single-threaded by construction: the host drives one `tick` per frame
/// and nothing else touches the state in between.
pub struct Simulation {
    pub world: World,
    pub session: SessionState,
    pub map: GameMap,
    pub index: SpatialIndex<EntityRef>,
    pub rng: ChaChaRng,
    pub seed: u64,
    pub tick: u64,
    pub command_queue: Vec<SessionCommand>,
    pending_events: Vec<GameEvent>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::new_with_seed(42)
    }

    pub fn new_with_seed(seed: u64) -> Self {
        // The built-in descriptor always parses
        let map = GameMap::new(&GameMap::default_descriptor()).unwrap();
        Self::from_parts(map, seed)
    }

    /// Build over a custom map descriptor. A malformed descriptor is a
    /// configuration error and fails construction; there is no runtime
    /// recovery path.
    pub fn with_descriptor(rows: &[TileRow], seed: u64) -> Result<Self, String> {
        let map = GameMap::new(rows)?;
        Ok(Self::from_parts(map, seed))
    }

    fn from_parts(map: GameMap, seed: u64) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let world = World::new(&map, &mut rng);
        Self {
            world,
            session: SessionState::new(),
            map,
            index: SpatialIndex::new(config::CELL_SIZE),
            rng,
            seed,
            tick: 0,
            command_queue: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn push_command(&mut self, command: SessionCommand) {
        self.command_queue.push(command);
    }

    /// Drain all pending game events (sound cues included).
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Build a snapshot without advancing the simulation.
    pub fn build_snapshot(&self) -> StateSnapshot {
        systems::state_snapshot::build(&self.world, &self.session, self.tick)
    }

    /// Advance one timestep. `dt` is the frame-time multiplier supplied by
    /// the host loop; it scales motion only, timers count whole ticks.
    pub fn tick(&mut self, dt: f32) -> StateSnapshot {
        let input = systems::input_system::run(
            &mut self.world,
            &mut self.session,
            &mut self.command_queue,
            &self.map,
            &mut self.rng,
            self.tick,
        );
        self.pending_events.extend(input.events);

        systems::motion::run(&mut self.world.traffic, dt, &self.map.bounds);

        self.rebuild_index();

        if self.session.mode == Mode::Play {
            let collisions = systems::collision::run(
                &mut self.world,
                &mut self.session,
                &self.index,
                &self.map,
                &mut self.rng,
                self.tick,
            );
            self.pending_events.extend(collisions.events);
        }

        let timers = systems::timers::run(
            &mut self.world,
            &mut self.session,
            &self.map,
            &mut self.rng,
            self.tick,
        );
        self.pending_events.extend(timers.events);

        self.tick += 1;
        self.build_snapshot()
    }

    /// Re-register every entity at its current position. Buckets from the
    /// previous tick are dropped first so no stale membership survives.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, vehicle) in self.world.traffic.iter().enumerate() {
            self.index
                .insert(vehicle.pos.x, vehicle.pos.y, EntityRef::Traffic(slot));
        }
        for item in &self.world.items {
            self.index
                .insert(item.pos.x, item.pos.y, EntityRef::Item(item.id));
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
