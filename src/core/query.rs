use serde::{Deserialize, Serialize};

/// The shape of a lookup: one value, or an ordered sequence of values
///
/// The caller picks the shape; it is never inferred from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Query<T> {
    /// Number of query values
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query values in order, regardless of shape
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Apply `f` to every value, keeping the shape
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Query<U> {
        match self {
            Self::One(value) => Query::One(f(value)),
            Self::Many(values) => Query::Many(values.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<Vec<T>> for Query<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// Indices returned by a lookup, in the same shape as the [`Query`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Located {
    One(usize),
    Many(Vec<usize>),
}

impl Located {
    /// Indices in query order, regardless of shape
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        match self {
            Self::One(index) => std::slice::from_ref(index),
            Self::Many(indices) => indices,
        }
    }

    /// The single index of a scalar lookup
    #[must_use]
    pub fn one(&self) -> Option<usize> {
        match self {
            Self::One(index) => Some(*index),
            Self::Many(_) => None,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        match self {
            Self::One(index) => vec![index],
            Self::Many(indices) => indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_shape() {
        let one = Query::One(3.0);
        assert_eq!(one.len(), 1);
        assert_eq!(one.as_slice(), &[3.0]);

        let many: Query<f64> = vec![1.0, 2.0].into();
        assert_eq!(many.len(), 2);
        assert_eq!(many.map(|v| v * 2.0), Query::Many(vec![2.0, 4.0]));

        let empty: Query<f64> = Query::Many(Vec::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_located_json() {
        assert_eq!(serde_json::to_string(&Located::One(4)).unwrap(), "4");
        assert_eq!(
            serde_json::to_string(&Located::Many(vec![0, 2])).unwrap(),
            "[0,2]"
        );
        assert_eq!(Located::One(4).one(), Some(4));
        assert_eq!(Located::Many(vec![1]).one(), None);
        assert_eq!(Located::One(4).into_vec(), vec![4]);
    }
}
