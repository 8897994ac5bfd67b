//! Boundary description: topology, core permeability, and the rectangular domain.

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::math::{linspace, Scalar, R2};

/// Arrangement of magnetic boundaries around the domain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Free space, no boundary.
    None,
    /// Single boundary along `x = x_min`.
    XMin,
    /// Single boundary along `x = x_max`.
    XMax,
    /// Single boundary along `y = y_min`.
    YMin,
    /// Single boundary along `y = y_max`.
    YMax,
    /// Two parallel boundaries at `x_min` and `x_max`.
    XX,
    /// Two parallel boundaries at `y_min` and `y_max`.
    YY,
    /// Four boundaries enclosing the whole rectangle.
    XY,
}

impl BoundaryKind {
    /// All supported kinds.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::XMin,
        Self::XMax,
        Self::YMin,
        Self::YMax,
        Self::XX,
        Self::YY,
        Self::XY,
    ];

    /// Lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::XMin => "xmin",
            Self::XMax => "xmax",
            Self::YMin => "ymin",
            Self::YMax => "ymax",
            Self::XX => "xx",
            Self::YY => "yy",
            Self::XY => "xy",
        }
    }

    /// True when the mirror order is used to generate the image lattice.
    #[must_use]
    pub const fn uses_mirror_order(self) -> bool {
        matches!(self, Self::XX | Self::YY | Self::XY)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ValidationError::UnknownBoundaryKind(s.to_owned()))
    }
}

/// Axis-aligned rectangular domain in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Left edge.
    pub x_min: Scalar,
    /// Right edge.
    pub x_max: Scalar,
    /// Bottom edge.
    pub y_min: Scalar,
    /// Top edge.
    pub y_max: Scalar,
}

impl Domain {
    /// Creates a domain from its four edges.
    #[must_use]
    pub const fn new(x_min: Scalar, x_max: Scalar, y_min: Scalar, y_max: Scalar) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> Scalar {
        self.x_max - self.x_min
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.y_max - self.y_min
    }

    /// Geometric center; its coordinates are the two mirror lines.
    #[must_use]
    pub fn center(&self) -> R2 {
        R2::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }

    /// True when the disk of `radius` around `point` lies in the closed rectangle.
    #[must_use]
    pub fn contains(&self, point: &R2, radius: Scalar) -> bool {
        point.x - radius >= self.x_min
            && point.x + radius <= self.x_max
            && point.y - radius >= self.y_min
            && point.y + radius <= self.y_max
    }

    /// Flattened coordinates of an `nx` × `ny` grid spanning the domain edges, x varying fastest.
    #[must_use]
    pub fn sample_grid(&self, nx: usize, ny: usize) -> (Vec<Scalar>, Vec<Scalar>) {
        let xs = linspace(self.x_min, self.x_max, nx);
        let ys = linspace(self.y_min, self.y_max, ny);
        let mut x = Vec::with_capacity(nx * ny);
        let mut y = Vec::with_capacity(nx * ny);
        for &yv in &ys {
            for &xv in &xs {
                x.push(xv);
                y.push(yv);
            }
        }
        (x, y)
    }
}

/// Complete boundary description consumed by the solver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    /// Boundary topology.
    pub kind: BoundaryKind,
    /// Relative permeability of the core material behind the boundaries.
    pub permeability: Scalar,
    /// Reflection generations for two- and four-boundary kinds.
    pub mirror_order: usize,
    /// Reference radius regularizing the self-energy of a 2D line current (m).
    pub pole_distance: Scalar,
    /// Rectangular domain.
    pub domain: Domain,
    /// Out-of-plane depth scaling the 2D inductance to a finite length (m).
    pub slice_length: Scalar,
}

impl BoundaryCondition {
    /// Creates a boundary description with a 1 m pole distance and a 1 m slice (per-meter
    /// inductance).
    #[must_use]
    pub const fn new(
        kind: BoundaryKind,
        domain: Domain,
        permeability: Scalar,
        mirror_order: usize,
    ) -> Self {
        Self {
            kind,
            permeability,
            mirror_order,
            pole_distance: 1.0,
            domain,
            slice_length: 1.0,
        }
    }

    /// Free space over `domain`.
    #[must_use]
    pub const fn free_space(domain: Domain) -> Self {
        Self::new(BoundaryKind::None, domain, 1.0, 0)
    }

    /// Overrides the pole distance.
    #[must_use]
    pub fn with_pole_distance(mut self, pole_distance: Scalar) -> Self {
        self.pole_distance = pole_distance;
        self
    }

    /// Overrides the slice length.
    #[must_use]
    pub fn with_slice_length(mut self, slice_length: Scalar) -> Self {
        self.slice_length = slice_length;
        self
    }

    /// Reflection coefficient `(μ − 1) / (μ + 1)` of a single boundary crossing.
    #[must_use]
    pub fn reflection_coefficient(&self) -> Scalar {
        (self.permeability - 1.0) / (self.permeability + 1.0)
    }
}
