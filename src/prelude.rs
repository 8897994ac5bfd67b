//! Convenience re-exports for building mirroring-method studies.

pub use crate::boundary::{BoundaryCondition, BoundaryKind, Domain};
pub use crate::conductor::{Conductor, ConductorSet};
pub use crate::constants::{inductance_prefactor, DISK_ENERGY_FACTOR, VACUUM_PERMEABILITY};
pub use crate::engine::FieldInductanceEngine;
pub use crate::errors::{ErrorKind, ValidationError};
pub use crate::fields::FieldMap;
pub use crate::math::{linspace, Matrix, Scalar, R2};
pub use crate::mirror::{mirror_steps, MirrorImage, MirrorImageSet};
pub use crate::solver::MirrorSolver;
pub use crate::validate::{validate_boundary_and_conductors, validate_current_matrix, validate_points};
