use std::cmp::Ordering;

use crate::core::query::{Located, Query};
use crate::matching::distance::Distance;
use crate::matching::locator::LocateError;

/// A reference series sorted once for repeated nearest-match lookups
///
/// Equal values are collapsed to a single key that remembers the lowest
/// original index, so lookups return exactly what a linear scan in index
/// order would return. Building costs O(N log N); each lookup is O(log N).
///
/// The distance must grow with separation in the sort order (true for
/// absolute difference and elapsed time), so the nearest keys are the two
/// adjacent to a query plus any further keys whose distance rounds to the
/// same value.
#[derive(Debug, Clone)]
pub struct SortedIndex<T> {
    keys: Vec<T>,
    first_index: Vec<usize>,
    len: usize,
}

impl<T> SortedIndex<T>
where
    T: Distance + PartialOrd + Clone,
{
    /// Build the index over `reference`.
    ///
    /// # Errors
    ///
    /// Returns `LocateError::InvalidInput` if `reference` is empty or contains
    /// an entry that cannot be ordered or measured (NaN, infinity).
    pub fn new(reference: &[T]) -> Result<Self, LocateError> {
        if reference.is_empty() {
            return Err(LocateError::empty_reference());
        }

        if let Some(i) = reference
            .iter()
            .position(|v| v.partial_cmp(v).is_none() || v.distance(v) != 0.0)
        {
            return Err(LocateError::InvalidInput(format!(
                "reference entry {i} cannot be ordered"
            )));
        }

        let mut order: Vec<usize> = (0..reference.len()).collect();
        // Stable sort: equal values stay in ascending index order
        order.sort_by(|&a, &b| {
            reference[a]
                .partial_cmp(&reference[b])
                .unwrap_or(Ordering::Equal)
        });

        let mut keys: Vec<T> = Vec::with_capacity(reference.len());
        let mut first_index = Vec::with_capacity(reference.len());
        for i in order {
            let value = &reference[i];
            if keys.last().is_some_and(|last| last == value) {
                continue;
            }
            keys.push(value.clone());
            first_index.push(i);
        }

        Ok(Self {
            keys,
            first_index,
            len: reference.len(),
        })
    }

    /// Length of the original reference series
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values in the reference
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.keys.len()
    }

    /// Original index of the entry nearest to `value`
    ///
    /// # Errors
    ///
    /// Returns `LocateError::InvalidInput` if the distance to `value` is
    /// undefined (NaN query).
    pub fn nearest_index(&self, value: &T) -> Result<usize, LocateError> {
        let split = self.keys.partition_point(|key| key < value);
        let below = split.checked_sub(1);
        let above = (split < self.keys.len()).then_some(split);

        let mut best: Option<f64> = None;
        for pos in [below, above].into_iter().flatten() {
            let distance = self.keys[pos].distance(value);
            if distance.is_nan() {
                return Err(LocateError::InvalidInput(format!(
                    "distance to reference entry {} is undefined (NaN)",
                    self.first_index[pos]
                )));
            }
            best = Some(best.map_or(distance, |d| d.min(distance)));
        }

        let Some(best) = best else {
            return Err(LocateError::empty_reference());
        };

        // Every entry is infinitely far away; a scan would keep the first
        if best.is_infinite() {
            return Ok(0);
        }

        // Keys further out can round to the same f64 distance, which the scan
        // counts as a tie
        let ties_below = below
            .into_iter()
            .flat_map(|start| (0..=start).rev())
            .take_while(|&pos| self.keys[pos].distance(value) == best);
        let ties_above = above
            .into_iter()
            .flat_map(|start| start..self.keys.len())
            .take_while(|&pos| self.keys[pos].distance(value) == best);

        ties_below
            .chain(ties_above)
            .map(|pos| self.first_index[pos])
            .min()
            .ok_or_else(LocateError::empty_reference)
    }

    /// Locate every query value, keeping the query's shape
    ///
    /// # Errors
    ///
    /// Returns `LocateError::InvalidInput` if any distance is undefined.
    pub fn locate(&self, query: &Query<T>) -> Result<Located, LocateError> {
        match query {
            Query::One(value) => self.nearest_index(value).map(Located::One),
            Query::Many(values) => values
                .iter()
                .map(|value| self.nearest_index(value))
                .collect::<Result<Vec<_>, _>>()
                .map(Located::Many),
        }
    }
}
