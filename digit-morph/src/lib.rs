//! Morphing digit glyphs.
//!
//! Digits (and a blank glyph) are defined as fixed-length sequences of
//! quadratic Bézier control points. Because every glyph shares the same
//! point count, any two can be blended by straight per-point interpolation:
//! [`morph::Morph`] produces intermediate sequences, [`driver::Driver`]
//! maps wall-clock time onto eased progress and publishes frames to a
//! render surface, and [`path::build`] turns any sequence into a
//! [`kurbo::BezPath`] ready to draw.

pub mod driver;
pub mod easing;
pub mod error;
pub mod glyph;
pub mod morph;
pub mod path;

pub use driver::{AnimationHandle, AnimationSpec, Driver, DriverState};
pub use easing::Easing;
pub use error::MorphError;
pub use glyph::{GLYPH_POINTS, Symbol, sequence_for};
pub use morph::{Morph, interpolate};
pub use path::Metrics;
