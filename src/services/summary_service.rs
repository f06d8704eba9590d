use std::collections::{HashMap, HashSet};

use chrono::{Duration, Utc};

use crate::models::game::Game;
use crate::models::stats::{SummaryGame, SummarySection, WeeklySummary};
use crate::models::team::{Team, TeamType};
use crate::stats::classify_game;
use crate::store::{CollectionQuery, DocumentStore, StoreError};

const SUMMARY_WINDOW_DAYS: i64 = 7;

/// Weekly results rollup for the home club, sectioned by squad bracket.
pub struct SummaryService {
    store: DocumentStore,
    home_club: String,
}

impl SummaryService {
    pub fn new(store: DocumentStore, home_club: String) -> Self {
        Self { store, home_club }
    }

    /// Results from the last seven days, grouped Senior then Junior then
    /// Midweek/Masters. Fixtures that did not finish inside the window
    /// stay out of the rollup.
    pub async fn weekly_summary(&self) -> Result<WeeklySummary, StoreError> {
        let end_date = Utc::now();
        let start_date = end_date - Duration::days(SUMMARY_WINDOW_DAYS);

        let games_query = CollectionQuery::new("games")
            .filter_gte("date", start_date)
            .filter_lte("date", end_date)
            .order_by_asc("date");
        let roster_query =
            CollectionQuery::new("teams").filter_eq("club", self.home_club.as_str());

        let (games, roster): (Vec<Game>, Vec<Team>) = futures::try_join!(
            self.store.fetch_all(&games_query),
            self.store.fetch_all(&roster_query),
        )?;

        let brackets: HashMap<String, TeamType> = roster
            .into_iter()
            .map(|team| (team.id, team.team_type))
            .collect();
        let scope: HashSet<String> = brackets.keys().cloned().collect();

        let mut by_bracket: HashMap<TeamType, Vec<SummaryGame>> = HashMap::new();
        let mut total_games = 0;
        for game in games {
            if let Some((result, _, _)) = classify_game(&game, &scope) {
                if let Some(team_type) = club_side_bracket(&game, &brackets) {
                    total_games += 1;
                    by_bracket
                        .entry(team_type)
                        .or_default()
                        .push(SummaryGame { game, result });
                }
            }
        }

        let sections: Vec<SummarySection> = TeamType::all()
            .into_iter()
            .filter_map(|team_type| {
                by_bracket
                    .remove(&team_type)
                    .map(|games| SummarySection { team_type, games })
            })
            .collect();

        tracing::info!(
            "Weekly summary covers {} games across {} sections",
            total_games,
            sections.len()
        );

        Ok(WeeklySummary {
            start_date,
            end_date,
            total_games,
            sections,
        })
    }
}

/// Bracket of the club's own side. The home side wins for intra-club
/// fixtures, mirroring how those games are classified.
fn club_side_bracket(game: &Game, brackets: &HashMap<String, TeamType>) -> Option<TeamType> {
    [&game.home_team, &game.away_team]
        .into_iter()
        .find_map(|side| side.id.as_ref().and_then(|id| brackets.get(id).copied()))
}
