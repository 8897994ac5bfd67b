//! Round conductors in the 2D cross-section.

use crate::errors::{Result, ValidationError};
use crate::math::{Scalar, R2};

/// Round conductor with uniform current density, or an idealized line conductor when
/// `diameter == 0`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductor {
    /// Center position in meters.
    pub position: R2,
    /// Diameter in meters.
    pub diameter: Scalar,
}

impl Conductor {
    /// Creates a conductor centered at (`x`, `y`).
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, diameter: Scalar) -> Self {
        Self {
            position: R2::new(x, y),
            diameter,
        }
    }

    /// Zero-diameter line conductor at (`x`, `y`).
    #[must_use]
    pub fn line(x: Scalar, y: Scalar) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Radius in meters.
    #[must_use]
    pub fn radius(&self) -> Scalar {
        0.5 * self.diameter
    }

    /// True for a zero-radius line conductor.
    #[must_use]
    pub fn is_line(&self) -> bool {
        self.diameter == 0.0
    }
}

/// Ordered, immutable set of conductors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorSet {
    conductors: Vec<Conductor>,
}

impl ConductorSet {
    /// Wraps `conductors` in their given order. Geometry is checked by the validator.
    #[must_use]
    pub fn new(conductors: Vec<Conductor>) -> Self {
        Self { conductors }
    }

    /// Builds a set from parallel coordinate and diameter slices.
    pub fn from_columns(x: &[Scalar], y: &[Scalar], diameter: &[Scalar]) -> Result<Self> {
        let n = x.len();
        if y.len() != n {
            return Err(ValidationError::LengthMismatch {
                name: "y",
                expected: n,
                actual: y.len(),
            });
        }
        if diameter.len() != n {
            return Err(ValidationError::LengthMismatch {
                name: "diameter",
                expected: n,
                actual: diameter.len(),
            });
        }
        let conductors = x
            .iter()
            .zip(y)
            .zip(diameter)
            .map(|((&x, &y), &d)| Conductor::new(x, y, d))
            .collect();
        Ok(Self { conductors })
    }

    /// Number of conductors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conductors.len()
    }

    /// True if the set holds no conductor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conductors.is_empty()
    }

    /// Conductors in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Conductor] {
        &self.conductors
    }

    /// Iterator over the conductors.
    pub fn iter(&self) -> std::slice::Iter<'_, Conductor> {
        self.conductors.iter()
    }

    /// Center positions in order.
    #[must_use]
    pub fn positions(&self) -> Vec<R2> {
        self.conductors.iter().map(|c| c.position).collect()
    }

    /// Radii in order.
    #[must_use]
    pub fn radii(&self) -> Vec<Scalar> {
        self.conductors.iter().map(Conductor::radius).collect()
    }
}

impl<'a> IntoIterator for &'a ConductorSet {
    type Item = &'a Conductor;
    type IntoIter = std::slice::Iter<'a, Conductor>;

    fn into_iter(self) -> Self::IntoIter {
        self.conductors.iter()
    }
}
