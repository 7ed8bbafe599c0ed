pub mod collision;
pub mod input_system;
pub mod interaction;
pub mod motion;
pub mod state_snapshot;
pub mod timers;
