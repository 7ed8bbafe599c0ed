pub mod game_events;
