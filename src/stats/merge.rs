use std::collections::HashSet;

use crate::models::game::Game;

/// Merge two result sets keeping the first occurrence of each game id.
///
/// A fixture fetched once per side shows up in both halves; the earlier
/// half wins, so callers pass their preferred records first.
pub fn merge_games(primary: Vec<Game>, secondary: Vec<Game>) -> Vec<Game> {
    let mut seen: HashSet<String> = HashSet::with_capacity(primary.len() + secondary.len());
    let mut merged: Vec<Game> = Vec::with_capacity(primary.len() + secondary.len());
    for game in primary.into_iter().chain(secondary) {
        if seen.insert(game.id.clone()) {
            merged.push(game);
        }
    }
    merged
}

/// Newest first. Games without a playable date sort last, and the sort is
/// stable so equal dates keep their merge order.
pub fn sort_games_desc(games: &mut [Game]) {
    games.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Oldest first, still with dateless games last.
pub fn sort_games_asc(games: &mut [Game]) {
    games.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(a_date), Some(b_date)) => a_date.cmp(b_date),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
