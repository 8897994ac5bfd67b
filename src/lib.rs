#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and fixed factors.
pub mod constants;
/// Shared mathematical utilities (vectors, matrices, distances).
pub mod math;
/// Error types shared between submodules.
pub mod errors;
/// Boundary topology, permeability, and the rectangular domain.
pub mod boundary;
/// Round and line conductors.
pub mod conductor;
/// Input validation for construction and queries.
pub mod validate;
/// Image-conductor generation (method of images).
pub mod mirror;
/// 2D line-current field kernels and field containers.
pub mod fields;
/// Field and inductance evaluation over conductors and images.
pub mod engine;
/// Validating facade tying the pipeline together.
pub mod solver;

/// Common exports for downstream crates.
pub mod prelude;
