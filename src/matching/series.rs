use chrono::{DateTime, Utc};

use crate::core::query::{Located, Query};
use crate::core::types::{Series, Value, ValueKind};
use crate::matching::locator::{LocateError, Locator};

impl Locator {
    /// Locate dynamically typed query values in a dynamically typed series.
    ///
    /// # Errors
    ///
    /// Returns `LocateError::TypeMismatch` if any query value differs in kind
    /// from the series, or `LocateError::InvalidInput` as for
    /// [`Locator::locate`].
    pub fn locate_series(
        &self,
        reference: &Series,
        query: &Query<Value>,
    ) -> Result<Located, LocateError> {
        match reference {
            Series::Numeric(values) => {
                let query = typed_query(query, ValueKind::Numeric, Value::as_numeric)?;
                self.locate(values, &query)
            }
            Series::Timestamp(values) => {
                let query: Query<DateTime<Utc>> =
                    typed_query(query, ValueKind::Timestamp, Value::as_timestamp)?;
                self.locate(values, &query)
            }
        }
    }
}

/// Locate with the default [`Locator`]
///
/// # Errors
///
/// See [`Locator::locate_series`].
pub fn locate_series(reference: &Series, query: &Query<Value>) -> Result<Located, LocateError> {
    Locator::new().locate_series(reference, query)
}

fn typed_query<T>(
    query: &Query<Value>,
    reference: ValueKind,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<Query<T>, LocateError> {
    let convert = |value: &Value| {
        extract(value).ok_or_else(|| LocateError::TypeMismatch {
            reference,
            query: value.kind(),
        })
    };

    match query {
        Query::One(value) => convert(value).map(Query::One),
        Query::Many(values) => values
            .iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()
            .map(Query::Many),
    }
}
