use serde::{Deserialize, Serialize};

/// Sound assets the host's audio port knows how to play. The simulation
/// only requests playback; it never observes playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundId {
    PickupBell,
    Crash,
    Hit,
    SadTrombone,
    Boo,
    TrafficAmbience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundEvent {
    pub sound: SoundId,
    /// true = keep looping until the host decides otherwise
    pub looped: bool,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeCollectedEvent {
    pub item_id: u32,
    pub value: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub item_id: u32,
    pub value: u32,
    pub delivered: u32,
    pub quota: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStartedEvent {
    pub level: u32,
    pub quota: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    TrafficCollision,
    CoffeeExpired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDiedEvent {
    pub cause: DeathCause,
    pub lives_remaining: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOverEvent {
    pub final_score: u32,
    pub days_survived: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundEvent),
    CoffeeCollected(CoffeeCollectedEvent),
    Delivery(DeliveryEvent),
    DayStarted(DayStartedEvent),
    PlayerDied(PlayerDiedEvent),
    GameOver(GameOverEvent),
}
