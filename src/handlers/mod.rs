pub mod backend_health_handler;
pub mod club_handler;
pub mod game_handler;
pub mod player_handler;
pub mod summary_handler;
pub mod team_handler;
