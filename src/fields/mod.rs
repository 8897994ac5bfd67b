//! Field kernels and field result containers for 2D line currents.

mod line;
mod magnetic;

pub use line::{clamped_squared_distance, line_current_field, log_partial_inductance};
pub use magnetic::FieldMap;
