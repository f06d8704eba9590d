use chrono::{Duration, Utc};

use crate::models::game::{Game, GamesFeedQuery};
use crate::stats::{merge_games, sort_games_asc, sort_games_desc};
use crate::store::{CollectionQuery, DocumentStore, QueryValue, StoreError};

/// Fallback page size for game feeds.
pub const DEFAULT_FEED_LIMIT: i64 = 10;

/// Horizon for the upcoming feed when the caller gives none.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

// Widest window a caller can request. Keeps the horizon arithmetic
// inside chrono's representable range whatever `days` arrives.
const MAX_UPCOMING_DAYS: i64 = 365;

// The hosted backend caps IN filters at ten operands, so scoped feeds
// chunk their team id lists.
const IN_FILTER_CHUNK: usize = 10;

/// Read side of the games collection.
///
/// A fixture is stored once but can be reached from either side of the
/// record, so every fetch merges a home query with an away query and
/// deduplicates on game id.
pub struct GameService {
    store: DocumentStore,
}

impl GameService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Every game where either side matches `value` on the given field
    /// pair, deduplicated and newest first.
    pub(crate) async fn fetch_games_by_side(
        store: &DocumentStore,
        home_field: &str,
        away_field: &str,
        value: &str,
    ) -> Result<Vec<Game>, StoreError> {
        let home = CollectionQuery::new("games").filter_eq(home_field, value);
        let away = CollectionQuery::new("games").filter_eq(away_field, value);

        let (home_games, away_games) = futures::try_join!(
            store.fetch_all::<Game>(&home),
            store.fetch_all::<Game>(&away),
        )?;

        let mut games = merge_games(home_games, away_games);
        sort_games_desc(&mut games);
        Ok(games)
    }

    /// Fixtures inside the upcoming window, soonest first.
    pub async fn get_upcoming_games(
        &self,
        query: &GamesFeedQuery,
    ) -> Result<Vec<Game>, StoreError> {
        let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);
        let days = query
            .days
            .unwrap_or(DEFAULT_UPCOMING_DAYS)
            .clamp(0, MAX_UPCOMING_DAYS);
        let now = Utc::now();
        let horizon = now + Duration::days(days);

        let window = move |base: CollectionQuery| {
            base.filter_gte("date", now)
                .filter_lte("date", horizon)
                .order_by_asc("date")
                .limit(limit)
        };

        let mut games = match query.team_id_list() {
            Some(team_ids) => self.fetch_scoped(&team_ids, window).await?,
            None => {
                self.store
                    .fetch_all::<Game>(&window(CollectionQuery::new("games")))
                    .await?
            }
        };

        sort_games_asc(&mut games);
        games.truncate(limit.max(0) as usize);
        Ok(games)
    }

    /// Completed fixtures, newest first.
    pub async fn get_recent_results(
        &self,
        query: &GamesFeedQuery,
    ) -> Result<Vec<Game>, StoreError> {
        let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);
        let completed = |base: CollectionQuery| base.filter_eq("status", "completed");

        let mut games = match query.team_id_list() {
            Some(team_ids) => self.fetch_scoped(&team_ids, completed).await?,
            None => {
                self.store
                    .fetch_all::<Game>(&completed(CollectionQuery::new("games")))
                    .await?
            }
        };

        sort_games_desc(&mut games);
        games.truncate(limit.max(0) as usize);
        Ok(games)
    }

    /// Run the shaped query once per side for each id chunk and merge
    /// everything. A game matching several chunks is still returned once.
    async fn fetch_scoped<F>(
        &self,
        team_ids: &[String],
        shape: F,
    ) -> Result<Vec<Game>, StoreError>
    where
        F: Fn(CollectionQuery) -> CollectionQuery,
    {
        let mut games: Vec<Game> = Vec::new();
        for chunk in team_ids.chunks(IN_FILTER_CHUNK) {
            let operands: Vec<QueryValue> =
                chunk.iter().cloned().map(QueryValue::from).collect();
            let home = shape(
                CollectionQuery::new("games").filter_in("home_team.id", operands.clone()),
            );
            let away =
                shape(CollectionQuery::new("games").filter_in("away_team.id", operands));

            let (home_games, away_games) = futures::try_join!(
                self.store.fetch_all::<Game>(&home),
                self.store.fetch_all::<Game>(&away),
            )?;

            games = merge_games(games, merge_games(home_games, away_games));
        }
        Ok(games)
    }
}
