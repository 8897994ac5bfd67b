//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (cross-section coordinates).
pub type R2 = Vector2<Scalar>;
/// Dense real matrix with runtime shape.
pub type Matrix = DMatrix<Scalar>;

/// Squared Euclidean distance between two points.
#[inline]
#[must_use]
pub fn squared_distance(a: &R2, b: &R2) -> Scalar {
    (a - b).norm_squared()
}

/// All-pairs squared distances: entry `(i, j)` is `|rows[i] - cols[j]|²`.
#[must_use]
pub fn pairwise_squared_distances(rows: &[R2], cols: &[R2]) -> Matrix {
    Matrix::from_fn(rows.len(), cols.len(), |i, j| squared_distance(&rows[i], &cols[j]))
}

/// Generates `n` linearly spaced samples in [start, stop]; the last sample is exactly `stop`.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pairwise_distances_have_expected_shape_and_values() {
        let a = [R2::new(0.0, 0.0), R2::new(3.0, 0.0)];
        let b = [R2::new(0.0, 4.0)];
        let d = pairwise_squared_distances(&a, &b);
        assert_eq!(d.shape(), (2, 1));
        assert_relative_eq!(d[(0, 0)], 16.0);
        assert_relative_eq!(d[(1, 0)], 25.0);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(-1.0, 1.0, 5);
        assert_eq!(v, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
