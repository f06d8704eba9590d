use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::store::document::Document;
use crate::store::error::StoreError;
use crate::store::query::{CollectionQuery, Filter, OrderBy, QueryValue, SortDirection};
use crate::utils::dates;

/// In-memory document backend with the same filter/order/limit semantics
/// as the hosted store. Serves demo mode and the integration test harness.
///
/// Clones share the underlying collections, mirroring how the hosted
/// client shares one connection handle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<BTreeMap<String, BTreeMap<String, Map<String, Value>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, minting an id when the record does not carry
    /// one. Returns the id the document is stored under.
    pub fn insert(&self, collection: &str, document: Value) -> String {
        let mut fields = match document {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };

        let id = fields
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        fields.remove("id");

        self.collections
            .write()
            .expect("store lock poisoned")
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        id
    }

    pub fn run_query(&self, query: &CollectionQuery) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().expect("store lock poisoned");
        let Some(collection) = collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<Document> = collection
            .iter()
            .filter(|(_, fields)| query.filters.iter().all(|filter| matches_filter(fields, filter)))
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect();

        if let Some(order) = &query.order_by {
            sort_documents(&mut matched, order);
        }
        if let Some(limit) = query.limit {
            matched.truncate(limit.max(0) as usize);
        }

        Ok(matched)
    }

    pub fn get_document(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections
            .read()
            .expect("store lock poisoned")
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|fields| Document::new(id.to_string(), fields.clone()))
    }
}

fn lookup_path<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = fields.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn matches_filter(fields: &Map<String, Value>, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(path, expected) => lookup_path(fields, path)
            .and_then(|actual| compare(actual, expected))
            .map_or(false, |ordering| ordering == Ordering::Equal),
        Filter::In(path, allowed) => lookup_path(fields, path).map_or(false, |actual| {
            allowed
                .iter()
                .any(|candidate| compare(actual, candidate) == Some(Ordering::Equal))
        }),
        Filter::Gte(path, bound) => lookup_path(fields, path)
            .and_then(|actual| compare(actual, bound))
            .map_or(false, |ordering| ordering != Ordering::Less),
        Filter::Lte(path, bound) => lookup_path(fields, path)
            .and_then(|actual| compare(actual, bound))
            .map_or(false, |ordering| ordering != Ordering::Greater),
    }
}

/// Order a stored JSON value against a typed operand. A missing or
/// mistyped field never matches, which is what the hosted store does for
/// range filters over absent fields.
fn compare(actual: &Value, expected: &QueryValue) -> Option<Ordering> {
    match expected {
        QueryValue::Str(s) => actual.as_str().map(|a| a.cmp(s.as_str())),
        QueryValue::Int(n) => actual.as_f64().and_then(|a| a.partial_cmp(&(*n as f64))),
        QueryValue::Double(d) => actual.as_f64().and_then(|a| a.partial_cmp(d)),
        QueryValue::Bool(b) => actual.as_bool().map(|a| a.cmp(b)),
        QueryValue::Timestamp(ts) => dates::normalize_date(actual).map(|a| a.cmp(ts)),
    }
}

fn sort_documents(documents: &mut [Document], order: &OrderBy) {
    documents.sort_by(|a, b| {
        let ordering = compare_stored(
            lookup_path(&a.fields, &order.field),
            lookup_path(&b.fields, &order.field),
        );
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Total order over stored values: absent fields sort first, dates by
/// instant regardless of their stored shape, then numbers, strings and
/// booleans.
fn compare_stored(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            if let (Some(da), Some(db)) = (dates::normalize_date(a), dates::normalize_date(b)) {
                return da.cmp(&db);
            }
            if let (Some(na), Some(nb)) = (a.as_f64(), b.as_f64()) {
                return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
            }
            if let (Some(sa), Some(sb)) = (a.as_str(), b.as_str()) {
                return sa.cmp(sb);
            }
            if let (Some(ba), Some(bb)) = (a.as_bool(), b.as_bool()) {
                return ba.cmp(&bb);
            }
            Ordering::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert(
            "games",
            json!({
                "id": "g1",
                "date": "2025-04-05T14:00:00Z",
                "status": "completed",
                "home_team": { "id": "t1", "score": 3 }
            }),
        );
        store.insert(
            "games",
            json!({
                "id": "g2",
                "date": "2025-04-12T14:00:00Z",
                "status": "scheduled",
                "home_team": { "id": "t1" }
            }),
        );
        store.insert(
            "games",
            json!({
                "id": "g3",
                "date": "2025-04-19T14:00:00Z",
                "status": "completed",
                "home_team": { "id": "t2", "score": 1 }
            }),
        );
        store
    }

    #[test]
    fn equality_filters_follow_dotted_paths() {
        let store = seeded_store();
        let query = CollectionQuery::new("games").filter_eq("home_team.id", "t1");

        let documents = store.run_query(&query).unwrap();
        let ids: Vec<&str> = documents.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }

    #[test]
    fn range_filters_skip_documents_without_the_field() {
        let store = seeded_store();
        store.insert("games", json!({ "id": "dateless", "status": "scheduled" }));

        let bound = Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap();
        let query = CollectionQuery::new("games").filter_gte("date", bound);

        let documents = store.run_query(&query).unwrap();
        let ids: Vec<&str> = documents.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids, vec!["g2", "g3"]);
    }

    #[test]
    fn membership_filters_match_any_listed_value() {
        let store = seeded_store();
        let query = CollectionQuery::new("games").filter_in(
            "home_team.id",
            vec![QueryValue::from("t2"), QueryValue::from("t9")],
        );

        let documents = store.run_query(&query).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "g3");
    }

    #[test]
    fn ordering_and_limit_apply_after_filtering() {
        let store = seeded_store();
        let query = CollectionQuery::new("games")
            .filter_eq("status", "completed")
            .order_by_desc("date")
            .limit(1);

        let documents = store.run_query(&query).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "g3");
    }

    #[test]
    fn numeric_ordering_uses_numeric_comparison() {
        let store = MemoryStore::new();
        for (id, goals) in [("p1", 2), ("p2", 11), ("p3", 5)] {
            store.insert("players", json!({ "id": id, "stats": { "goals": goals } }));
        }

        let query = CollectionQuery::new("players").order_by_desc("stats.goals");
        let documents = store.run_query(&query).unwrap();
        let ids: Vec<&str> = documents.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p1"]);
    }

    #[test]
    fn insert_mints_an_id_when_missing() {
        let store = MemoryStore::new();
        let id = store.insert("clubs", json!({ "name": "Mentone Hockey Club" }));
        assert!(!id.is_empty());
        assert!(store.get_document("clubs", &id).is_some());
    }

    #[test]
    fn unknown_collections_return_empty_results() {
        let store = MemoryStore::new();
        let documents = store.run_query(&CollectionQuery::new("missing")).unwrap();
        assert!(documents.is_empty());
    }
}
