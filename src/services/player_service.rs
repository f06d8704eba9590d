use crate::models::player::{Player, TopScorersQuery};
use crate::store::{CollectionQuery, DocumentStore, StoreError};

/// Fallback page size for the scorer board.
pub const DEFAULT_SCORER_LIMIT: i64 = 10;

/// Player records keyed by accumulated season stats.
pub struct PlayerService {
    store: DocumentStore,
}

impl PlayerService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Players with at least `min_goals`, highest scorers first. Players
    /// without a stats block are never indexed under the goal threshold,
    /// so they stay off the board even at zero.
    pub async fn get_top_scorers(
        &self,
        query: &TopScorersQuery,
    ) -> Result<Vec<Player>, StoreError> {
        let min_goals = query.min_goals.unwrap_or(0);
        let limit = query.limit.unwrap_or(DEFAULT_SCORER_LIMIT);

        let scorers = CollectionQuery::new("players")
            .filter_gte("stats.goals", min_goals)
            .order_by_desc("stats.goals")
            .limit(limit);
        self.store.fetch_all(&scorers).await
    }
}
