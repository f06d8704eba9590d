pub mod club;
pub mod competition;
pub mod game;
pub mod player;
pub mod stats;
pub mod team;
