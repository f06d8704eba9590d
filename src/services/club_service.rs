use std::collections::HashSet;

use crate::models::club::Club;
use crate::models::game::Game;
use crate::models::stats::StatsSummary;
use crate::models::team::Team;
use crate::services::game_service::{GameService, DEFAULT_FEED_LIMIT};
use crate::stats::summarize_games;
use crate::store::{CollectionQuery, DocumentStore, StoreError};

/// Club directory plus club-wide rollups across the roster.
pub struct ClubService {
    store: DocumentStore,
}

impl ClubService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub async fn get_clubs(&self) -> Result<Vec<Club>, StoreError> {
        self.store.fetch_all(&CollectionQuery::new("clubs")).await
    }

    pub async fn get_club(&self, club_id: &str) -> Result<Option<Club>, StoreError> {
        self.store.fetch_one("clubs", club_id).await
    }

    /// Teams registered under the club.
    pub async fn get_club_teams(&self, club_id: &str) -> Result<Vec<Team>, StoreError> {
        let query = CollectionQuery::new("teams").filter_eq("club", club_id);
        self.store.fetch_all(&query).await
    }

    /// Season-to-date rollup across every roster team.
    ///
    /// Games are fetched by the club label on either side, then attributed
    /// through the roster's team ids so opponent records never leak into
    /// the club's numbers. `None` when the club id is unknown.
    pub async fn get_club_stats(
        &self,
        club_id: &str,
    ) -> Result<Option<StatsSummary>, StoreError> {
        if self.get_club(club_id).await?.is_none() {
            return Ok(None);
        }

        let (roster, games) = futures::try_join!(
            self.get_club_teams(club_id),
            GameService::fetch_games_by_side(
                &self.store,
                "home_team.club",
                "away_team.club",
                club_id,
            ),
        )?;

        let team_ids: HashSet<String> = roster.into_iter().map(|team| team.id).collect();
        Ok(Some(summarize_games(&games, &team_ids)))
    }

    /// Latest games across the whole club, newest first. `None` when the
    /// club id is unknown.
    pub async fn get_club_games(
        &self,
        club_id: &str,
        limit: Option<i64>,
    ) -> Result<Option<Vec<Game>>, StoreError> {
        if self.get_club(club_id).await?.is_none() {
            return Ok(None);
        }

        let mut games = GameService::fetch_games_by_side(
            &self.store,
            "home_team.club",
            "away_team.club",
            club_id,
        )
        .await?;
        games.truncate(limit.unwrap_or(DEFAULT_FEED_LIMIT).max(0) as usize);
        Ok(Some(games))
    }
}
