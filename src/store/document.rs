use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::store::error::StoreError;

/// A fetched record: its opaque identifier plus the flattened field map.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Deserialize into a model type with the document identifier merged
    /// into the field map, overriding any stale `id` field the record
    /// happens to carry.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let mut merged = self.fields.clone();
        merged.insert("id".to_string(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}
