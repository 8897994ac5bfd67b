//! Physical constants and fixed factors used by the mirroring engine.
//!
//! ## Accuracy
//!
//! The vacuum permeability is taken as the pre-2019 defined value μ₀ = 4π × 10⁻⁷ H/m.
//! The CODATA 2018 measured value (1.25663706212 × 10⁻⁶ H/m) differs in the tenth
//! significant figure, far below the modelling error of a 2D image solution.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m), exactly 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: Scalar = 4.0e-7 * PI;

/// Squared-radius factor e^(−1/2) for the self term of a round conductor.
///
/// Replacing the diagonal squared distance by `r² · e^(−1/2)` adds the ¼ term of the
/// internal inductance of a disk carrying uniform current density.
pub const DISK_ENERGY_FACTOR: Scalar = 0.606_530_659_712_633_4;

/// Prefactor `ℓ · μ₀ / (2π)` of the 2D logarithmic partial inductance for a slice of
/// depth `slice_length` meters.
#[inline]
#[must_use]
pub fn inductance_prefactor(slice_length: Scalar) -> Scalar {
    slice_length * VACUUM_PERMEABILITY / (2.0 * PI)
}
