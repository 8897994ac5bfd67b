use std::f64::consts::PI;

use crate::math::{Scalar, R2};

/// Squared distance used for a real conductor: points inside the disk are pushed out to
/// the radius.
#[inline]
#[must_use]
pub fn clamped_squared_distance(distance_sq: Scalar, radius: Scalar) -> Scalar {
    let radius_sq = radius * radius;
    if distance_sq < radius_sq {
        radius_sq
    } else {
        distance_sq
    }
}

/// Field strength H (A/m) per ampere of a 2D line current seen at `displacement` from it,
/// with `distance_sq` the (possibly clamped) squared distance.
///
/// `H = (−dy, dx) / (2π d²)`. Non-finite when `distance_sq` is zero.
#[inline]
#[must_use]
pub fn line_current_field(displacement: &R2, distance_sq: Scalar) -> R2 {
    let g = 1.0 / (2.0 * PI * distance_sq);
    R2::new(-displacement.y * g, displacement.x * g)
}

/// Regularized 2D partial inductance `prefactor · ½ · ln(p² / d²)` for squared pole distance
/// `pole_distance_sq` and squared separation `distance_sq`.
///
/// Diverges to `+∞` at zero separation.
#[inline]
#[must_use]
pub fn log_partial_inductance(prefactor: Scalar, pole_distance_sq: Scalar, distance_sq: Scalar) -> Scalar {
    prefactor * 0.5 * (pole_distance_sq / distance_sq).ln()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn field_circulates_counter_clockwise() {
        let h = line_current_field(&R2::new(0.005, 0.0), 0.005 * 0.005);
        assert_relative_eq!(h.x, 0.0);
        assert_relative_eq!(h.y, 1.0 / (2.0 * PI * 0.005), max_relative = 1.0e-12);
        let below = line_current_field(&R2::new(0.0, -1.0), 1.0);
        assert!(below.x > 0.0);
    }

    #[test]
    fn clamp_only_applies_inside_the_disk() {
        assert_relative_eq!(clamped_squared_distance(0.25, 1.0), 1.0);
        assert_relative_eq!(clamped_squared_distance(4.0, 1.0), 4.0);
        assert_eq!(clamped_squared_distance(0.0, 0.0), 0.0);
    }

    #[test]
    fn partial_inductance_vanishes_at_the_pole() {
        assert_relative_eq!(log_partial_inductance(2.0e-7, 1.0, 1.0), 0.0);
        assert!(log_partial_inductance(2.0e-7, 1.0, 0.0).is_infinite());
        assert_relative_eq!(
            log_partial_inductance(2.0e-7, 1.0, 0.01),
            2.0e-7 * 10.0_f64.ln(),
            max_relative = 1.0e-12
        );
    }
}
