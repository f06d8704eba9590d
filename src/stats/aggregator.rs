use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::game::{Game, GameSide};
use crate::models::stats::{MatchResult, StatsSummary};

/// Classify one game from the perspective of the scoped team ids.
///
/// Returns the result together with goals scored and conceded, or `None`
/// when the game is not completed or neither side belongs to the scope.
/// When both sides are in scope (an intra-club fixture) the home side is
/// the perspective.
pub fn classify_game(game: &Game, team_ids: &HashSet<String>) -> Option<(MatchResult, i32, i32)> {
    if !game.status.is_completed() {
        return None;
    }

    let (scored, conceded) = if in_scope(&game.home_team, team_ids) {
        (game.home_team.score_or_zero(), game.away_team.score_or_zero())
    } else if in_scope(&game.away_team, team_ids) {
        (game.away_team.score_or_zero(), game.home_team.score_or_zero())
    } else {
        return None;
    };

    let result = match scored.cmp(&conceded) {
        Ordering::Greater => MatchResult::Win,
        Ordering::Less => MatchResult::Loss,
        Ordering::Equal => MatchResult::Draw,
    };
    Some((result, scored, conceded))
}

fn in_scope(side: &GameSide, team_ids: &HashSet<String>) -> bool {
    side.id.as_ref().map_or(false, |id| team_ids.contains(id))
}

/// Fold a batch of games into a standings summary for the scoped team ids.
///
/// The same fold serves a single team (a one-element scope) and a whole
/// club (the roster's team ids). Games that do not classify are skipped
/// rather than failing the batch.
pub fn summarize_games(games: &[Game], team_ids: &HashSet<String>) -> StatsSummary {
    let mut summary = StatsSummary::default();

    for game in games {
        if let Some((result, scored, conceded)) = classify_game(game, team_ids) {
            summary.games_played += 1;
            summary.goals_for += scored;
            summary.goals_against += conceded;
            match result {
                MatchResult::Win => summary.wins += 1,
                MatchResult::Loss => summary.losses += 1,
                MatchResult::Draw => summary.draws += 1,
            }
        }
    }

    summary.goal_difference = summary.goals_for - summary.goals_against;
    summary.win_percentage = if summary.games_played > 0 {
        f64::from(summary.wins) / f64::from(summary.games_played) * 100.0
    } else {
        0.0
    };
    summary
}
