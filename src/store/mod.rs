pub mod document;
pub mod error;
pub mod firestore;
pub mod memory;
pub mod query;
pub mod seed;

pub use document::Document;
pub use error::StoreError;
pub use firestore::FirestoreClient;
pub use memory::MemoryStore;
pub use query::{CollectionQuery, Filter, OrderBy, QueryValue, SortDirection};

use serde::de::DeserializeOwned;

/// Backend-agnostic handle the services query through.
///
/// Production talks to Firestore over REST; demo mode and the test
/// harness run against the in-memory store with the same query
/// semantics.
#[derive(Clone)]
pub enum DocumentStore {
    Firestore(FirestoreClient),
    Memory(MemoryStore),
}

impl DocumentStore {
    pub async fn run_query(&self, query: &CollectionQuery) -> Result<Vec<Document>, StoreError> {
        match self {
            Self::Firestore(client) => client.run_query(query).await,
            Self::Memory(store) => store.run_query(query),
        }
    }

    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        match self {
            Self::Firestore(client) => client.get_document(collection, id).await,
            Self::Memory(store) => Ok(store.get_document(collection, id)),
        }
    }

    /// Run a query and decode every row into `T`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        query: &CollectionQuery,
    ) -> Result<Vec<T>, StoreError> {
        let documents = self.run_query(query).await?;
        documents
            .into_iter()
            .map(|document| document.decode())
            .collect()
    }

    /// Point lookup decoded into `T`, `None` when the document is absent.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        match self.get_document(collection, id).await? {
            Some(document) => Ok(Some(document.decode()?)),
            None => Ok(None),
        }
    }
}

impl From<FirestoreClient> for DocumentStore {
    fn from(client: FirestoreClient) -> Self {
        Self::Firestore(client)
    }
}

impl From<MemoryStore> for DocumentStore {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}
