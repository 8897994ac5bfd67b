//! High-level entry point: validate once, mirror once, then answer read-only queries.

use nalgebra::DVector;

use crate::boundary::BoundaryCondition;
use crate::conductor::ConductorSet;
use crate::engine::FieldInductanceEngine;
use crate::errors::Result;
use crate::fields::FieldMap;
use crate::math::{Matrix, Scalar, R2};
use crate::mirror::MirrorImageSet;
use crate::validate::{validate_boundary_and_conductors, validate_current_matrix, validate_points};

/// Mirroring-method solver for one boundary description and conductor set.
///
/// Immutable after construction; every query re-validates its own arguments.
#[derive(Debug, Clone)]
pub struct MirrorSolver {
    boundary: BoundaryCondition,
    engine: FieldInductanceEngine,
}

impl MirrorSolver {
    /// Validates the input, generates the image set, and builds the engine.
    pub fn new(boundary: BoundaryCondition, conductors: ConductorSet) -> Result<Self> {
        validate_boundary_and_conductors(&boundary, &conductors)?;
        let images = MirrorImageSet::generate(&boundary, &conductors);
        let engine = FieldInductanceEngine::new(
            conductors,
            images,
            boundary.pole_distance,
            boundary.slice_length,
        );
        Ok(Self { boundary, engine })
    }

    /// Boundary description as supplied.
    #[must_use]
    pub fn boundary(&self) -> &BoundaryCondition {
        &self.boundary
    }

    /// Conductors as supplied.
    #[must_use]
    pub fn conductors(&self) -> &ConductorSet {
        self.engine.conductors()
    }

    /// Generated image conductors.
    #[must_use]
    pub fn images(&self) -> &MirrorImageSet {
        self.engine.images()
    }

    /// Number of real conductors N.
    #[must_use]
    pub fn conductor_count(&self) -> usize {
        self.engine.conductors().len()
    }

    /// Field strength H (A/m) at the points (`x[p]`, `y[p]`) for the N×C current matrix.
    pub fn field_at(&self, x: &[Scalar], y: &[Scalar], currents: &Matrix) -> Result<FieldMap> {
        validate_points(&self.boundary.domain, x, y)?;
        validate_current_matrix(currents, self.conductor_count())?;
        let points: Vec<R2> = x.iter().zip(y).map(|(&px, &py)| R2::new(px, py)).collect();
        Ok(self.engine.field_at(&points, currents))
    }

    /// Field magnitude `hypot(Hx, Hy)` at the given points, P×C.
    pub fn field_norm_at(&self, x: &[Scalar], y: &[Scalar], currents: &Matrix) -> Result<Matrix> {
        self.field_at(x, y, currents).map(|field| field.norm())
    }

    /// Field strength at every conductor center, N×C.
    pub fn field_at_conductors(&self, currents: &Matrix) -> Result<FieldMap> {
        validate_current_matrix(currents, self.conductor_count())?;
        Ok(self.engine.field_at(&self.conductors().positions(), currents))
    }

    /// N×N inductance matrix (H).
    #[must_use]
    pub fn inductance(&self) -> Matrix {
        self.engine.inductance()
    }

    /// Stored magnetic energy (J) for every column of the N×C current matrix.
    ///
    /// A NaN anywhere in the inductance matrix makes every column NaN, even columns that
    /// leave the offending conductor unexcited.
    pub fn energy(&self, currents: &Matrix) -> Result<DVector<Scalar>> {
        validate_current_matrix(currents, self.conductor_count())?;
        Ok(self.engine.energy(currents))
    }
}
