//! Field and inductance evaluation over real conductors plus their images.

use nalgebra::DVector;

use crate::conductor::ConductorSet;
use crate::constants::{inductance_prefactor, DISK_ENERGY_FACTOR};
use crate::fields::{clamped_squared_distance, line_current_field, log_partial_inductance, FieldMap};
use crate::math::{pairwise_squared_distances, Matrix, Scalar, R2};
use crate::mirror::MirrorImageSet;

/// Superposes real conductors and their weighted images.
///
/// Arguments are assumed validated; shape checks live in [`crate::solver::MirrorSolver`].
#[derive(Debug, Clone)]
pub struct FieldInductanceEngine {
    conductors: ConductorSet,
    images: MirrorImageSet,
    pole_distance: Scalar,
    slice_length: Scalar,
}

impl FieldInductanceEngine {
    /// Creates an engine owning the conductor and image sets.
    #[must_use]
    pub fn new(
        conductors: ConductorSet,
        images: MirrorImageSet,
        pole_distance: Scalar,
        slice_length: Scalar,
    ) -> Self {
        Self {
            conductors,
            images,
            pole_distance,
            slice_length,
        }
    }

    /// Original conductors.
    #[must_use]
    pub fn conductors(&self) -> &ConductorSet {
        &self.conductors
    }

    /// Image conductors.
    #[must_use]
    pub fn images(&self) -> &MirrorImageSet {
        &self.images
    }

    /// Field strength at `points` for the N×C current matrix `currents`.
    ///
    /// A point inside a conductor's disk sees that conductor at its radius. A point whose
    /// (clamped) squared distance to any real or image conductor is exactly zero gets NaN
    /// in every column; this only happens at line conductors and their images.
    #[must_use]
    pub fn field_at(&self, points: &[R2], currents: &Matrix) -> FieldMap {
        let columns = currents.ncols();
        let mut field = FieldMap::zeros(points.len(), columns);

        for (row, point) in points.iter().enumerate() {
            let real = self.conductors.iter().enumerate().map(|(n, c)| {
                let displacement = point - c.position;
                let d2 = clamped_squared_distance(displacement.norm_squared(), c.radius());
                (displacement, d2, n, 1.0)
            });
            let mirrored = self.images.iter().map(|img| {
                let displacement = point - img.position;
                (displacement, displacement.norm_squared(), img.source, img.weight)
            });

            let mut singular = false;
            for (displacement, d2, source, weight) in real.chain(mirrored) {
                if d2 == 0.0 {
                    singular = true;
                    break;
                }
                let h = line_current_field(&displacement, d2) * weight;
                for col in 0..columns {
                    let current = currents[(source, col)];
                    field.hx[(row, col)] += h.x * current;
                    field.hy[(row, col)] += h.y * current;
                }
            }
            if singular {
                field.mark_singular(row);
            }
        }
        field
    }

    /// N×N inductance matrix (H) for the configured slice length.
    ///
    /// Sum of the conductor-to-conductor term and the collapsed image term. Diagonal
    /// entries of line conductors are NaN.
    #[must_use]
    pub fn inductance(&self) -> Matrix {
        let prefactor = inductance_prefactor(self.slice_length);
        let pole_sq = self.pole_distance * self.pole_distance;
        let positions = self.conductors.positions();

        let mut d2 = pairwise_squared_distances(&positions, &positions);
        for (i, r) in self.conductors.radii().into_iter().enumerate() {
            d2[(i, i)] = r * r * DISK_ENERGY_FACTOR;
        }
        let mut l = d2.map(|v| log_partial_inductance(prefactor, pole_sq, v));

        if !self.images.is_empty() {
            l += self.image_term(&positions, prefactor, pole_sq);
        }

        for (i, c) in self.conductors.iter().enumerate() {
            if c.is_line() {
                l[(i, i)] = Scalar::NAN;
            }
        }
        l
    }

    /// Image contribution: the N×M conductor-to-image coupling right-multiplied by the
    /// M×N weighted back-reference matrix, accumulated per image so that a singular
    /// coupling only reaches its own (conductor, source) entry.
    fn image_term(&self, positions: &[R2], prefactor: Scalar, pole_sq: Scalar) -> Matrix {
        let n = positions.len();
        let coupling = pairwise_squared_distances(positions, &self.images.positions())
            .map(|v| log_partial_inductance(prefactor, pole_sq, v));
        let mut term = Matrix::zeros(n, n);
        for (m, img) in self.images.iter().enumerate() {
            for i in 0..n {
                term[(i, img.source)] += coupling[(i, m)] * img.weight;
            }
        }
        term
    }

    /// Stored energy (J) per column of `currents`: `½ Iᵀ L I`.
    ///
    /// If the inductance matrix holds any NaN, every column is NaN.
    #[must_use]
    pub fn energy(&self, currents: &Matrix) -> DVector<Scalar> {
        let l = self.inductance();
        if l.iter().any(|v| v.is_nan()) {
            return DVector::from_element(currents.ncols(), Scalar::NAN);
        }
        DVector::from_iterator(
            currents.ncols(),
            currents.column_iter().map(|i| 0.5 * i.dot(&(&l * i))),
        )
    }
}
