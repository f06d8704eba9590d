use chrono::{DateTime, Utc};

/// Typed operand for query filters. The hosted backend distinguishes value
/// kinds on the wire, so filters carry an explicit tag instead of a raw
/// JSON value. Timestamps in particular must not degrade to strings.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Double(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::Timestamp(value)
    }
}

/// A single filter over a dotted field path.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, QueryValue),
    In(String, Vec<QueryValue>),
    Gte(String, QueryValue),
    Lte(String, QueryValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

/// Collection-scoped query: filters, optional single-field order, optional
/// result cap. Built by services, translated by the active backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionQuery {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<i64>,
}

impl CollectionQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.filters.push(Filter::Eq(field.into(), value.into()));
        self
    }

    pub fn filter_in(mut self, field: impl Into<String>, values: Vec<QueryValue>) -> Self {
        self.filters.push(Filter::In(field.into(), values));
        self
    }

    pub fn filter_gte(mut self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.filters.push(Filter::Gte(field.into(), value.into()));
        self
    }

    pub fn filter_lte(mut self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.filters.push(Filter::Lte(field.into(), value.into()));
        self
    }

    pub fn order_by_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction: SortDirection::Ascending,
        });
        self
    }

    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction: SortDirection::Descending,
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
