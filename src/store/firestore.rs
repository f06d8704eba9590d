use chrono::SecondsFormat;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Map, Value};
use url::Url;

use crate::store::document::Document;
use crate::store::error::StoreError;
use crate::store::query::{CollectionQuery, Filter, QueryValue, SortDirection};

/// Client for the Firestore REST API.
///
/// Collection queries are translated into `structuredQuery` payloads for
/// `documents:runQuery`, and the typed value envelopes in responses are
/// flattened back into plain JSON field maps before decoding.
#[derive(Clone)]
pub struct FirestoreClient {
    endpoint: String,
    project_id: String,
    database_id: String,
    api_key: Option<SecretString>,
    client: Client,
}

impl FirestoreClient {
    pub fn new(
        endpoint: String,
        project_id: String,
        database_id: String,
        api_key: Option<SecretString>,
    ) -> Result<Self, StoreError> {
        // Surface a bad endpoint at startup instead of on the first query
        Url::parse(&endpoint)?;

        Ok(Self {
            endpoint,
            project_id,
            database_id,
            api_key,
            client: Client::new(),
        })
    }

    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database_id
        )
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/v1/{}:runQuery",
            self.endpoint.trim_end_matches('/'),
            self.documents_root()
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.documents_root(),
            collection,
            id
        )
    }

    fn with_api_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.expose_secret())]),
            None => request,
        }
    }

    /// Run a collection query and return the matching documents.
    pub async fn run_query(&self, query: &CollectionQuery) -> Result<Vec<Document>, StoreError> {
        let payload = json!({ "structuredQuery": build_structured_query(query) });

        tracing::debug!("Running Firestore query against '{}'", query.collection);

        let request = self.with_api_key(self.client.post(self.run_query_url()).json(&payload));
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(
                "Firestore query against '{}' failed with {}: {}",
                query.collection,
                status,
                body
            );
            return Err(StoreError::UnexpectedStatus { status, body });
        }

        // runQuery streams one JSON object per result; rows without a
        // `document` key carry read metadata only.
        let rows: Vec<Value> = response.json().await?;
        let mut documents = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(doc) = row.get("document") {
                documents.push(decode_document(doc)?);
            }
        }

        Ok(documents)
    }

    /// Point lookup by document id. Unknown ids map to `None`.
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let request = self.with_api_key(self.client.get(self.document_url(collection, id)));
        let response = request.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(
                "Firestore lookup of {}/{} failed with {}: {}",
                collection,
                id,
                status,
                body
            );
            return Err(StoreError::UnexpectedStatus { status, body });
        }

        let doc: Value = response.json().await?;
        decode_document(&doc).map(Some)
    }
}

fn build_structured_query(query: &CollectionQuery) -> Value {
    let mut structured = Map::new();
    structured.insert(
        "from".to_string(),
        json!([{ "collectionId": query.collection }]),
    );

    let mut filters: Vec<Value> = query.filters.iter().map(encode_filter).collect();
    if filters.len() == 1 {
        structured.insert("where".to_string(), filters.remove(0));
    } else if !filters.is_empty() {
        structured.insert(
            "where".to_string(),
            json!({ "compositeFilter": { "op": "AND", "filters": filters } }),
        );
    }

    if let Some(order) = &query.order_by {
        let direction = match order.direction {
            SortDirection::Ascending => "ASCENDING",
            SortDirection::Descending => "DESCENDING",
        };
        structured.insert(
            "orderBy".to_string(),
            json!([{ "field": { "fieldPath": order.field }, "direction": direction }]),
        );
    }

    if let Some(limit) = query.limit {
        structured.insert("limit".to_string(), json!(limit));
    }

    Value::Object(structured)
}

fn encode_filter(filter: &Filter) -> Value {
    let (field, op, value) = match filter {
        Filter::Eq(field, value) => (field, "EQUAL", encode_value(value)),
        Filter::Gte(field, value) => (field, "GREATER_THAN_OR_EQUAL", encode_value(value)),
        Filter::Lte(field, value) => (field, "LESS_THAN_OR_EQUAL", encode_value(value)),
        Filter::In(field, values) => {
            let members: Vec<Value> = values.iter().map(encode_value).collect();
            (
                field,
                "IN",
                json!({ "arrayValue": { "values": members } }),
            )
        }
    };

    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": op,
            "value": value
        }
    })
}

fn encode_value(value: &QueryValue) -> Value {
    match value {
        QueryValue::Str(s) => json!({ "stringValue": s }),
        // integerValue travels as a decimal string
        QueryValue::Int(n) => json!({ "integerValue": n.to_string() }),
        QueryValue::Double(d) => json!({ "doubleValue": d }),
        QueryValue::Bool(b) => json!({ "booleanValue": b }),
        QueryValue::Timestamp(ts) => {
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
        }
    }
}

/// Extract the trailing resource-name segment as the document id and
/// flatten every field envelope.
fn decode_document(doc: &Value) -> Result<Document, StoreError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::MalformedResponse("document without a name".to_string()))?;
    let id = name.rsplit('/').next().unwrap_or(name).to_string();

    let mut fields = Map::new();
    if let Some(raw_fields) = doc.get("fields").and_then(Value::as_object) {
        for (key, envelope) in raw_fields {
            fields.insert(key.clone(), flatten_value(envelope));
        }
    }

    Ok(Document::new(id, fields))
}

/// Collapse one Firestore typed value envelope into plain JSON.
fn flatten_value(envelope: &Value) -> Value {
    let Some(map) = envelope.as_object() else {
        return Value::Null;
    };

    if let Some(s) = map.get("stringValue") {
        return s.clone();
    }
    if let Some(raw) = map.get("integerValue") {
        if let Some(n) = raw.as_str().and_then(|s| s.parse::<i64>().ok()) {
            return json!(n);
        }
        return raw.clone();
    }
    if let Some(d) = map.get("doubleValue") {
        return d.clone();
    }
    if let Some(b) = map.get("booleanValue") {
        return b.clone();
    }
    if let Some(ts) = map.get("timestampValue") {
        return ts.clone();
    }
    if let Some(nested) = map.get("mapValue") {
        let mut flattened = Map::new();
        if let Some(inner) = nested.get("fields").and_then(Value::as_object) {
            for (key, value) in inner {
                flattened.insert(key.clone(), flatten_value(value));
            }
        }
        return Value::Object(flattened);
    }
    if let Some(array) = map.get("arrayValue") {
        let items = array
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(flatten_value).collect())
            .unwrap_or_default();
        return Value::Array(items);
    }
    if let Some(reference) = map.get("referenceValue") {
        // references reduce to the referenced document id
        if let Some(path) = reference.as_str() {
            return Value::String(path.rsplit('/').next().unwrap_or(path).to_string());
        }
    }

    Value::Null
}
