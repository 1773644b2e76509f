//! Point-wise interpolation between two control-point sequences.

use kurbo::Point;

use crate::error::MorphError;

/// Frozen morph endpoints. Validated once at construction, evaluated many
/// times by the driver.
#[derive(Debug, Clone)]
pub struct Morph {
    start: Vec<Point>,
    end: Vec<Point>,
}

impl Morph {
    /// Endpoints must have equal point counts — positional correspondence
    /// is the whole basis of the blend.
    pub fn new(start: Vec<Point>, end: Vec<Point>) -> Result<Self, MorphError> {
        if start.len() != end.len() {
            return Err(MorphError::LengthMismatch {
                start: start.len(),
                end: end.len(),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &[Point] {
        &self.start
    }

    pub fn end(&self) -> &[Point] {
        &self.end
    }

    /// Interpolated sequence at progress `t`. `t` is clamped to `[0, 1]`;
    /// 0 reproduces the start exactly, 1 the end. Pure — identical inputs
    /// always yield identical output.
    pub fn eval(&self, t: f64) -> Vec<Point> {
        let t = t.clamp(0.0, 1.0);

        self.start
            .iter()
            .zip(&self.end)
            .map(|(s, e)| lerp_point(*s, *e, t))
            .collect()
    }
}

/// One-shot interpolation without a retained [`Morph`]. Same contract:
/// equal lengths required, `t` clamped.
pub fn interpolate(start: &[Point], end: &[Point], t: f64) -> Result<Vec<Point>, MorphError> {
    if start.len() != end.len() {
        return Err(MorphError::LengthMismatch {
            start: start.len(),
            end: end.len(),
        });
    }

    let t = t.clamp(0.0, 1.0);

    Ok(start
        .iter()
        .zip(end)
        .map(|(s, e)| lerp_point(*s, *e, t))
        .collect())
}

/// Linear blend per coordinate. No smoothing across the sequence — visual
/// smoothness comes from the control points themselves.
fn lerp_point(s: Point, e: Point, t: f64) -> Point {
    Point::new(s.x + (e.x - s.x) * t, s.y + (e.y - s.y) * t)
}
