//! Shaders of Glint's ray-tracing pipeline.
//!
//! Each module corresponds to a single pipeline stage and exposes a `main()`
//! entry point:
//!
//! - [`raygen`] runs once per dispatch cell; it casts the primary ray and
//!   stores the traced color,
//! - [`closest_hit`] runs when the ray hits something,
//! - [`miss`] runs when it doesn't.
//!
//! [`trace_ray()`] ties the stages together.

mod bindings;
pub mod closest_hit;
pub mod miss;
pub mod raygen;
mod trace;

pub use self::bindings::*;
pub use self::trace::*;
