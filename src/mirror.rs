//! Image-conductor generation for planar magnetic boundaries (method of images).
//!
//! Each boundary acts as a mirror. An image is addressed by its step pair `(i, j)`: the
//! number of reflections along x and along y. Per axis, an even step count is a pure
//! translation by `step · extent`, an odd one additionally reflects about the domain's
//! midline. Composing the two axes yields the lattice for the four-boundary case.
//!
//! Every boundary crossing attenuates the image by the reflection coefficient
//! `(μ − 1) / (μ + 1)`; an image of order `max(|i|, |j|)` carries that coefficient to
//! the same power.
//!
//! The four-boundary image count grows as `(2m + 1)²` in the mirror order `m`; use
//! [`MirrorImageSet::expected_len`] to budget large configurations up front.

use crate::boundary::{BoundaryCondition, BoundaryKind};
use crate::conductor::ConductorSet;
use crate::math::{Scalar, R2};

/// Step pairs generated for `kind`, `(0, 0)` excluded.
#[must_use]
pub fn mirror_steps(kind: BoundaryKind, mirror_order: usize) -> Vec<(i64, i64)> {
    let m = mirror_order as i64;
    match kind {
        BoundaryKind::None => Vec::new(),
        BoundaryKind::XMin => vec![(-1, 0)],
        BoundaryKind::XMax => vec![(1, 0)],
        BoundaryKind::YMin => vec![(0, -1)],
        BoundaryKind::YMax => vec![(0, 1)],
        BoundaryKind::XX => (-m..=m).filter(|&i| i != 0).map(|i| (i, 0)).collect(),
        BoundaryKind::YY => (-m..=m).filter(|&j| j != 0).map(|j| (0, j)).collect(),
        BoundaryKind::XY => (-m..=m)
            .flat_map(|i| (-m..=m).map(move |j| (i, j)))
            .filter(|&step| step != (0, 0))
            .collect(),
    }
}

/// Image coordinate along one axis after `step` reflections between two mirrors whose
/// midline is `mid` and separation is `extent`.
#[inline]
fn image_coordinate(coord: Scalar, step: i64, mid: Scalar, extent: Scalar) -> Scalar {
    let base = if step % 2 == 0 { coord } else { 2.0 * mid - coord };
    base + step as Scalar * extent
}

/// Single virtual conductor replicating an original one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorImage {
    /// Image position in meters.
    pub position: R2,
    /// Decay weight applied to the source conductor's current.
    pub weight: Scalar,
    /// Index of the replicated conductor in the original set.
    pub source: usize,
    /// Reflection steps `(i, j)` along x and y.
    pub steps: (i64, i64),
}

impl MirrorImage {
    /// Chebyshev order `max(|i|, |j|)`: the number of boundary crossings represented.
    #[must_use]
    pub fn order(&self) -> u32 {
        let (i, j) = self.steps;
        i.unsigned_abs().max(j.unsigned_abs()) as u32
    }
}

/// Read-only set of image conductors derived from a boundary description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirrorImageSet {
    images: Vec<MirrorImage>,
}

impl MirrorImageSet {
    /// Generates every image of every conductor for `bc`.
    ///
    /// Images are grouped by step pair; within a group they follow conductor order.
    #[must_use]
    pub fn generate(bc: &BoundaryCondition, conductors: &ConductorSet) -> Self {
        let steps = mirror_steps(bc.kind, bc.mirror_order);
        let ratio = bc.reflection_coefficient();
        let mid = bc.domain.center();
        let (width, height) = (bc.domain.width(), bc.domain.height());

        let mut images = Vec::with_capacity(steps.len() * conductors.len());
        for (i, j) in steps {
            let order = i.unsigned_abs().max(j.unsigned_abs());
            let weight = ratio.powi(order as i32);
            for (source, c) in conductors.iter().enumerate() {
                let position = R2::new(
                    image_coordinate(c.position.x, i, mid.x, width),
                    image_coordinate(c.position.y, j, mid.y, height),
                );
                images.push(MirrorImage {
                    position,
                    weight,
                    source,
                    steps: (i, j),
                });
            }
        }
        Self { images }
    }

    /// Number of images `generate` produces for `conductor_count` conductors.
    #[must_use]
    pub fn expected_len(kind: BoundaryKind, mirror_order: usize, conductor_count: usize) -> usize {
        let per_conductor = match kind {
            BoundaryKind::None => 0,
            BoundaryKind::XMin | BoundaryKind::XMax | BoundaryKind::YMin | BoundaryKind::YMax => 1,
            BoundaryKind::XX | BoundaryKind::YY => 2 * mirror_order,
            BoundaryKind::XY => (2 * mirror_order + 1).pow(2) - 1,
        };
        per_conductor * conductor_count
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when there are no images (free space).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images in generation order.
    #[must_use]
    pub fn as_slice(&self) -> &[MirrorImage] {
        &self.images
    }

    /// Iterator over the images.
    pub fn iter(&self) -> std::slice::Iter<'_, MirrorImage> {
        self.images.iter()
    }

    /// Image positions in order.
    #[must_use]
    pub fn positions(&self) -> Vec<R2> {
        self.images.iter().map(|img| img.position).collect()
    }
}

impl<'a> IntoIterator for &'a MirrorImageSet {
    type Item = &'a MirrorImage;
    type IntoIter = std::slice::Iter<'a, MirrorImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
