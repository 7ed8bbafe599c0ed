use rand_chacha::ChaChaRng;

use crate::entities::item::{Item, ItemKind};
use crate::entities::player::Player;
use crate::entities::traffic::{self, Traffic};
use crate::map::GameMap;

/// Typed entity collections for one session. The traffic roster is created
/// once and only repositioned by its own wrap rules; collectibles churn
/// through pickup and delivery; the player is unique.
pub struct World {
    pub player: Player,
    pub traffic: Vec<Traffic>,
    pub items: Vec<Item>,
    next_item_id: u32,
}

impl World {
    pub fn new(map: &GameMap, rng: &mut ChaChaRng) -> Self {
        let mut world = Self {
            player: Player::new(map.start_point),
            traffic: traffic::rush_hour_roster(),
            items: Vec::new(),
            next_item_id: 0,
        };
        world.spawn_item(ItemKind::Coffee, map, rng);
        world
    }

    pub fn spawn_item(&mut self, kind: ItemKind, map: &GameMap, rng: &mut ChaChaRng) -> u32 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(Item::spawn(id, kind, map, rng));
        id
    }

    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Stage reset after a death: player back to the start point, the
    /// collectibles replaced by a single fresh coffee. Traffic keeps
    /// rolling untouched.
    pub fn reset_stage(&mut self, map: &GameMap, rng: &mut ChaChaRng) {
        self.player.reset(map.start_point);
        self.items.clear();
        self.spawn_item(ItemKind::Coffee, map, rng);
    }
}
