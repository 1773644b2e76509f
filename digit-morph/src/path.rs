//! Control-point sequences to renderable path geometry.

use kurbo::{Affine, BezPath, Point, Rect, Shape};

use crate::error::MorphError;

/// Nominal glyph advance width in glyph units.
const ADVANCE: f64 = 1164.0;

/// Vertical extent of the glyph coordinate space, y-up. Read once at startup
/// and passed explicitly wherever a transform is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub ascent: f64,
    pub descent: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            ascent: 1536.0,
            descent: -128.0,
        }
    }
}

impl Metrics {
    /// Width-to-height ratio of a glyph box. The host layout uses this to
    /// size the box; the library never measures windows itself.
    pub fn aspect_ratio(&self) -> f64 {
        ADVANCE / (self.ascent - self.descent)
    }

    /// Maps glyph units (y-up, ascent at the top) onto a viewport of the
    /// given pixel height (y-down, origin top-left): flip vertically, scale
    /// to fit, and drop the ascent line onto y = 0.
    pub fn viewport_transform(&self, height: f64) -> Affine {
        let scale = height / (self.ascent - self.descent);
        Affine::translate((0.0, self.ascent * scale)) * Affine::scale_non_uniform(scale, -scale)
    }
}

/// Build a path from a control-point sequence: one `move_to` to the anchor,
/// then each (control, endpoint) pair becomes a quadratic segment.
///
/// Rejects sequences that are too short or of even length — an even count
/// would leave a dangling control point with no endpoint.
pub fn build(points: &[Point]) -> Result<BezPath, MorphError> {
    if points.len() < 3 || points.len() % 2 == 0 {
        return Err(MorphError::MalformedSequence(points.len()));
    }

    let mut path = BezPath::new();
    path.move_to(points[0]);

    for pair in points[1..].chunks_exact(2) {
        path.quad_to(pair[0], pair[1]);
    }

    Ok(path)
}

/// Tight bounding box of a built path. Debug-overlay tooling only.
pub fn bounds(path: &BezPath) -> Rect {
    path.bounding_box()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{self, Symbol};

    #[test]
    fn even_length_is_rejected() {
        let points = vec![Point::ZERO; 4];
        let err = build(&points).unwrap_err();
        assert_eq!(err, MorphError::MalformedSequence(4));
    }

    #[test]
    fn too_short_is_rejected() {
        assert!(build(&[Point::ZERO]).is_err());
        assert!(build(&[]).is_err());
    }

    #[test]
    fn consumes_every_point_as_one_move_plus_quads() {
        let seq = glyph::sequence_for(Symbol::digit(3)).unwrap();
        let path = build(seq).unwrap();

        let elements = path.elements();
        assert_eq!(elements.len(), 1 + (seq.len() - 1) / 2);
        assert!(matches!(elements[0], kurbo::PathEl::MoveTo(p) if p == seq[0]));
        assert!(
            elements[1..]
                .iter()
                .all(|el| matches!(el, kurbo::PathEl::QuadTo(..)))
        );
    }

    #[test]
    fn bounds_contains_all_on_curve_points() {
        let seq = glyph::sequence_for(Symbol::digit(8)).unwrap();
        let path = build(seq).unwrap();
        let bbox = bounds(&path);

        assert!(bbox.contains(seq[0]));
        for pair in seq[1..].chunks_exact(2) {
            assert!(bbox.contains(pair[1]));
        }
    }

    #[test]
    fn viewport_transform_puts_ascent_on_top() {
        let metrics = Metrics::default();
        let transform = metrics.viewport_transform(832.0);

        let top = transform * Point::new(0.0, metrics.ascent);
        let bottom = transform * Point::new(0.0, metrics.descent);

        assert!((top.y - 0.0).abs() < 1e-9);
        assert!((bottom.y - 832.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_ratio_matches_glyph_box() {
        let metrics = Metrics::default();
        assert!((metrics.aspect_ratio() - 1164.0 / 1664.0).abs() < 1e-12);
    }
}
