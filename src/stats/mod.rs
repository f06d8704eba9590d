pub mod aggregator;
pub mod merge;

pub use aggregator::{classify_game, summarize_games};
pub use merge::{merge_games, sort_games_asc, sort_games_desc};
