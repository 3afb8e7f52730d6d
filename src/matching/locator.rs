use thiserror::Error;

use crate::core::query::{Located, Query};
use crate::core::types::ValueKind;
use crate::matching::distance::Distance;
use crate::matching::sorted::SortedIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Type mismatch: cannot compare {query} query against {reference} reference series")]
    TypeMismatch {
        reference: ValueKind,
        query: ValueKind,
    },
}

impl LocateError {
    pub(crate) fn empty_reference() -> Self {
        Self::InvalidInput("reference series is empty".to_string())
    }
}

/// Default product of reference length and query count above which
/// [`ScanStrategy::Auto`] builds a [`SortedIndex`]
pub const DEFAULT_SORTED_THRESHOLD: usize = 65_536;

/// How a [`Locator`] searches the reference series
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Linear scan for small inputs, sorted index for large ones
    #[default]
    Auto,
    /// Scan all reference entries for every query value
    Linear,
    /// Sort the reference once and binary-search each query value
    Sorted,
}

/// Configuration for the [`Locator`]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LocatorConfig {
    pub strategy: ScanStrategy,
    /// Work size (`reference.len() * query.len()`) at which `Auto` switches to `Sorted`
    pub sorted_threshold: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::Auto,
            sorted_threshold: DEFAULT_SORTED_THRESHOLD,
        }
    }
}

/// Nearest-match lookup with a configurable search strategy
///
/// All strategies return identical results, including the first-occurrence
/// tie-break.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: LocatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Strategy that will actually run for the given input sizes
    #[must_use]
    pub fn resolve_strategy(&self, reference_len: usize, query_len: usize) -> ScanStrategy {
        match self.config.strategy {
            ScanStrategy::Auto => {
                if reference_len.saturating_mul(query_len) > self.config.sorted_threshold {
                    ScanStrategy::Sorted
                } else {
                    ScanStrategy::Linear
                }
            }
            other => other,
        }
    }

    /// Locate the nearest reference entry for every query value.
    ///
    /// # Errors
    ///
    /// Returns `LocateError::InvalidInput` if the reference is empty or a
    /// distance is undefined (NaN).
    pub fn locate<T>(&self, reference: &[T], query: &Query<T>) -> Result<Located, LocateError>
    where
        T: Distance + PartialOrd + Clone,
    {
        match (
            self.config.strategy,
            self.resolve_strategy(reference.len(), query.len()),
        ) {
            (ScanStrategy::Sorted, _) => SortedIndex::new(reference)?.locate(query),
            // Auto falls back to the scan for references the index cannot hold
            (ScanStrategy::Auto, ScanStrategy::Sorted) => match SortedIndex::new(reference) {
                Ok(index) => index.locate(query),
                Err(_) => locate(reference, query),
            },
            _ => locate(reference, query),
        }
    }
}

/// Locate the nearest reference entry for a single value or a sequence of values.
///
/// Scans the reference in index order; on equal distances the lowest index wins.
/// The result has the same shape as `query`.
///
/// # Errors
///
/// Returns `LocateError::InvalidInput` if `reference` is empty or any distance
/// is NaN.
///
/// # Examples
///
/// ```
/// use sciutil::{locate, Located, Query};
///
/// let reference = [5.0, 3.0, 3.0, 8.0];
/// assert_eq!(locate(&reference, &Query::One(3.0)).unwrap(), Located::One(1));
/// assert_eq!(
///     locate(&reference, &Query::Many(vec![7.0, 0.0])).unwrap(),
///     Located::Many(vec![3, 1])
/// );
/// ```
pub fn locate<T: Distance>(reference: &[T], query: &Query<T>) -> Result<Located, LocateError> {
    match query {
        Query::One(value) => nearest_index(reference, value).map(Located::One),
        Query::Many(values) => nearest_indices(reference, values).map(Located::Many),
    }
}

/// Index of the reference entry nearest to `value`
///
/// # Errors
///
/// Returns `LocateError::InvalidInput` if `reference` is empty or any distance
/// is NaN.
pub fn nearest_index<T: Distance>(reference: &[T], value: &T) -> Result<usize, LocateError> {
    let mut entries = reference.iter().enumerate();

    let Some((_, first)) = entries.next() else {
        return Err(LocateError::empty_reference());
    };

    let mut best_index = 0;
    let mut best_distance = checked_distance(first, value, 0)?;

    for (i, candidate) in entries {
        let distance = checked_distance(candidate, value, i)?;
        // Strict comparison keeps the first minimum
        if distance < best_distance {
            best_index = i;
            best_distance = distance;
        }
    }

    Ok(best_index)
}

/// Indices of the reference entries nearest to each of `values`, in order
///
/// # Errors
///
/// Returns `LocateError::InvalidInput` if `reference` is empty or any distance
/// is NaN.
pub fn nearest_indices<T: Distance>(
    reference: &[T],
    values: &[T],
) -> Result<Vec<usize>, LocateError> {
    if reference.is_empty() {
        return Err(LocateError::empty_reference());
    }
    values
        .iter()
        .map(|value| nearest_index(reference, value))
        .collect()
}

fn checked_distance<T: Distance>(
    candidate: &T,
    value: &T,
    index: usize,
) -> Result<f64, LocateError> {
    let distance = candidate.distance(value);
    if distance.is_nan() {
        return Err(LocateError::InvalidInput(format!(
            "distance to reference entry {index} is undefined (NaN)"
        )));
    }
    Ok(distance)
}
