use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of value held by a series or query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Real numbers compared by absolute difference
    Numeric,
    /// UTC instants compared by absolute elapsed seconds
    Timestamp,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A single dynamically typed value, as read from a file or the command line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(f64),
    Timestamp(DateTime<Utc>),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Timestamp(_) => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            Self::Numeric(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Numeric(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

/// A homogeneous, ordered reference series
///
/// All entries share one [`ValueKind`]; positions are zero-based and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Series {
    Numeric(Vec<f64>),
    Timestamp(Vec<DateTime<Utc>>),
}

impl Series {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Timestamp(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Self::Numeric(v) => v.get(index).copied().map(Value::Numeric),
            Self::Timestamp(v) => v.get(index).copied().map(Value::Timestamp),
        }
    }

    /// Entries as dynamically typed values, in order
    #[must_use]
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            Self::Numeric(v) => v.iter().copied().map(Value::Numeric).collect(),
            Self::Timestamp(v) => v.iter().copied().map(Value::Timestamp).collect(),
        }
    }

    /// Build a series from values that must all share one kind.
    ///
    /// Returns `None` if the values mix kinds. An empty input yields an empty
    /// numeric series.
    #[must_use]
    pub fn from_values(values: &[Value]) -> Option<Self> {
        match values.first().map(Value::kind) {
            None | Some(ValueKind::Numeric) => values
                .iter()
                .map(Value::as_numeric)
                .collect::<Option<Vec<_>>>()
                .map(Self::Numeric),
            Some(ValueKind::Timestamp) => values
                .iter()
                .map(Value::as_timestamp)
                .collect::<Option<Vec<_>>>()
                .map(Self::Timestamp),
        }
    }
}
