//! Input checks run before any field or inductance computation.
//!
//! Every check fails fast with the first violation found; nothing is coerced.

use crate::boundary::{BoundaryCondition, Domain};
use crate::conductor::ConductorSet;
use crate::errors::{Result, ValidationError};
use crate::math::{pairwise_squared_distances, Matrix, Scalar, R2};

fn finite(name: &'static str, value: Scalar) -> Result<Scalar> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: Scalar) -> Result<()> {
    if finite(name, value)? > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(name, format!("must be > 0 (got {value})")))
    }
}

fn non_negative(name: &'static str, value: Scalar) -> Result<()> {
    if finite(name, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(name, format!("must be >= 0 (got {value})")))
    }
}

fn validate_domain(domain: &Domain) -> Result<()> {
    finite("x_min", domain.x_min)?;
    finite("x_max", domain.x_max)?;
    finite("y_min", domain.y_min)?;
    finite("y_max", domain.y_max)?;
    if domain.x_min >= domain.x_max {
        return Err(ValidationError::out_of_range("x_min", "must be below x_max"));
    }
    if domain.y_min >= domain.y_max {
        return Err(ValidationError::out_of_range("y_min", "must be below y_max"));
    }
    Ok(())
}

/// Checks the boundary scalars, the domain, and the conductor geometry.
///
/// Conductors must be finite with non-negative diameter, lie inside the domain including
/// their radius, and be pairwise separated: the squared center distance must strictly
/// exceed the squared sum of radii, so touching or coincident disks are rejected.
pub fn validate_boundary_and_conductors(
    bc: &BoundaryCondition,
    conductors: &ConductorSet,
) -> Result<()> {
    non_negative("permeability", bc.permeability)?;
    positive("pole_distance", bc.pole_distance)?;
    positive("slice_length", bc.slice_length)?;
    validate_domain(&bc.domain)?;

    if conductors.is_empty() {
        return Err(ValidationError::NoConductors);
    }

    for (index, c) in conductors.iter().enumerate() {
        finite("conductor x", c.position.x)?;
        finite("conductor y", c.position.y)?;
        non_negative("conductor diameter", c.diameter)?;
        if !bc.domain.contains(&c.position, c.radius()) {
            return Err(ValidationError::ConductorOutsideDomain {
                index,
                x: c.position.x,
                y: c.position.y,
                diameter: c.diameter,
            });
        }
    }

    let positions = conductors.positions();
    let radii = conductors.radii();
    let d2 = pairwise_squared_distances(&positions, &positions);
    for first in 0..positions.len() {
        for second in (first + 1)..positions.len() {
            let reach = radii[first] + radii[second];
            if d2[(first, second)] <= reach * reach {
                return Err(ValidationError::ConductorOverlap { first, second });
            }
        }
    }
    Ok(())
}

/// Checks evaluation coordinates: equal length, finite, inside `domain` (zero radius).
pub fn validate_points(domain: &Domain, x: &[Scalar], y: &[Scalar]) -> Result<()> {
    if x.len() != y.len() {
        return Err(ValidationError::CoordinateMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    for (index, (&px, &py)) in x.iter().zip(y).enumerate() {
        if !px.is_finite() {
            return Err(ValidationError::NonFiniteQuery { name: "x", index });
        }
        if !py.is_finite() {
            return Err(ValidationError::NonFiniteQuery { name: "y", index });
        }
        if !domain.contains(&R2::new(px, py), 0.0) {
            return Err(ValidationError::PointOutsideDomain { index, x: px, y: py });
        }
    }
    Ok(())
}

/// Checks a current excitation: one row per conductor, every entry finite.
pub fn validate_current_matrix(currents: &Matrix, conductor_count: usize) -> Result<()> {
    if currents.nrows() != conductor_count {
        return Err(ValidationError::CurrentRows {
            expected: conductor_count,
            rows: currents.nrows(),
        });
    }
    if let Some(index) = currents.iter().position(|v| !v.is_finite()) {
        return Err(ValidationError::NonFiniteQuery {
            name: "currents",
            index,
        });
    }
    Ok(())
}
