use crate::math::{Matrix, Scalar};

/// Magnetic field strength components (A/m) sampled at P points for C operating points.
///
/// Rows follow the evaluation points, columns the current excitation columns. Rows for
/// points where the field is singular hold NaN in every column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap {
    /// x component, P×C.
    pub hx: Matrix,
    /// y component, P×C.
    pub hy: Matrix,
}

impl FieldMap {
    /// Zero field for `points` × `columns`.
    #[must_use]
    pub fn zeros(points: usize, columns: usize) -> Self {
        Self {
            hx: Matrix::zeros(points, columns),
            hy: Matrix::zeros(points, columns),
        }
    }

    /// Number of evaluation points.
    #[must_use]
    pub fn points(&self) -> usize {
        self.hx.nrows()
    }

    /// Number of operating points.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.hx.ncols()
    }

    /// Elementwise magnitude `hypot(hx, hy)`.
    #[must_use]
    pub fn norm(&self) -> Matrix {
        self.hx.zip_map(&self.hy, Scalar::hypot)
    }

    pub(crate) fn mark_singular(&mut self, point: usize) {
        self.hx.row_mut(point).fill(Scalar::NAN);
        self.hy.row_mut(point).fill(Scalar::NAN);
    }
}
