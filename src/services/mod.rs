pub mod club_service;
pub mod game_service;
pub mod player_service;
pub mod summary_service;
pub mod team_service;

pub use club_service::ClubService;
pub use game_service::GameService;
pub use player_service::PlayerService;
pub use summary_service::SummaryService;
pub use team_service::TeamService;
