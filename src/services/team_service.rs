use std::collections::HashSet;

use crate::models::competition::Competition;
use crate::models::game::Game;
use crate::models::stats::StatsSummary;
use crate::models::team::{Team, TeamsQuery};
use crate::services::game_service::{GameService, DEFAULT_FEED_LIMIT};
use crate::stats::summarize_games;
use crate::store::{CollectionQuery, DocumentStore, StoreError};

/// Team directory, per-team standings, and the competition catalogue.
pub struct TeamService {
    store: DocumentStore,
}

impl TeamService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Teams matching the optional bracket, gender, and competition
    /// filters. Filter values are matched verbatim against the stored
    /// records, so an unknown bracket simply returns nothing.
    pub async fn get_teams(&self, filters: &TeamsQuery) -> Result<Vec<Team>, StoreError> {
        let mut query = CollectionQuery::new("teams");
        if let Some(team_type) = &filters.team_type {
            query = query.filter_eq("type", team_type.as_str());
        }
        if let Some(gender) = &filters.gender {
            query = query.filter_eq("gender", gender.as_str());
        }
        if let Some(comp_id) = filters.comp_id {
            query = query.filter_eq("comp_id", comp_id);
        }
        self.store.fetch_all(&query).await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Option<Team>, StoreError> {
        self.store.fetch_one("teams", team_id).await
    }

    /// Season-to-date standings for one team, including result points.
    /// `None` when the team id is unknown.
    pub async fn get_team_stats(
        &self,
        team_id: &str,
    ) -> Result<Option<StatsSummary>, StoreError> {
        if self.get_team(team_id).await?.is_none() {
            return Ok(None);
        }

        let games = GameService::fetch_games_by_side(
            &self.store,
            "home_team.id",
            "away_team.id",
            team_id,
        )
        .await?;

        let scope = HashSet::from([team_id.to_string()]);
        Ok(Some(summarize_games(&games, &scope).with_points()))
    }

    /// Latest games for one team, newest first. `None` when the team id
    /// is unknown.
    pub async fn get_team_games(
        &self,
        team_id: &str,
        limit: Option<i64>,
    ) -> Result<Option<Vec<Game>>, StoreError> {
        if self.get_team(team_id).await?.is_none() {
            return Ok(None);
        }

        let mut games = GameService::fetch_games_by_side(
            &self.store,
            "home_team.id",
            "away_team.id",
            team_id,
        )
        .await?;
        games.truncate(limit.unwrap_or(DEFAULT_FEED_LIMIT).max(0) as usize);
        Ok(Some(games))
    }

    /// Every competition the club fields a side in.
    pub async fn get_competitions(&self) -> Result<Vec<Competition>, StoreError> {
        self.store
            .fetch_all(&CollectionQuery::new("competitions"))
            .await
    }
}
