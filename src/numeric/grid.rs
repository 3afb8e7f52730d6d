/// Cell edges for a grid given by its cell centres.
///
/// Returns `centres.len() + 1` edges: the first centre, the midpoint of every
/// neighbouring pair, then the last centre. Suitable for cell-based plots
/// that expect edges rather than centres. Empty input gives an empty output.
///
/// ```
/// use sciutil::numeric::grid::cell_edges;
///
/// assert_eq!(cell_edges(&[0.0, 1.0, 3.0]), vec![0.0, 0.5, 2.0, 3.0]);
/// ```
#[must_use]
pub fn cell_edges(centres: &[f64]) -> Vec<f64> {
    let (Some(&first), Some(&last)) = (centres.first(), centres.last()) else {
        return Vec::new();
    };

    let mut edges = Vec::with_capacity(centres.len() + 1);
    edges.push(first);
    edges.extend(centres.windows(2).map(|w| w[1] - (w[1] - w[0]) * 0.5));
    edges.push(last);
    edges
}

/// [`cell_edges`] applied to both axes of a grid
#[must_use]
pub fn shift_grids(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    (cell_edges(x), cell_edges(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_edges() {
        assert_eq!(cell_edges(&[1.0, 2.0, 4.0, 8.0]), vec![1.0, 1.5, 3.0, 6.0, 8.0]);
        assert_eq!(cell_edges(&[5.0]), vec![5.0, 5.0]);
        assert!(cell_edges(&[]).is_empty());
    }

    #[test]
    fn test_shift_grids() {
        let (x, y) = shift_grids(&[0.0, 10.0], &[-1.0, 1.0, 2.0]);
        assert_eq!(x, vec![0.0, 5.0, 10.0]);
        assert_eq!(y, vec![-1.0, 0.0, 1.5, 2.0]);
    }
}
