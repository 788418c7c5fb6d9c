use alloc::vec::Vec;

use crate::tables::glyf::{GlyphOutline, OutlinePoint};
use crate::{OutlineBuilder, Rect};

/// A point of a reconstructed contour.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[allow(missing_docs)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    fn lerp(&self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    #[inline]
    fn scale(&self, scale: f32) -> Point {
        Point {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

impl From<OutlinePoint> for Point {
    #[inline]
    fn from(p: OutlinePoint) -> Self {
        Point { x: p.x, y: p.y }
    }
}


/// Converts a single contour into a sequence of quadratic curves.
///
/// Implied on-curve points are inserted between two consecutive off-curve points
/// and explicit control points between two consecutive on-curve points.
/// The result starts and ends with the same on-curve point and should be read
/// as overlapping `(p[i], p[i + 1], p[i + 2])` triples with a step of 2.
///
/// When a contour has no on-curve points at all, it starts at the midpoint
/// between the last and the first points.
///
/// All points are multiplied by `scale`.
pub fn reconstruct_contour(points: &[OutlinePoint], scale: f32) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut contour = Vec::with_capacity(points.len() + 1);
    match points.iter().position(|p| p.on_curve) {
        Some(idx) => {
            contour.extend_from_slice(&points[idx..]);
            contour.extend_from_slice(&points[..idx]);
        }
        None => {
            let first = Point::from(points[0]);
            let last = Point::from(points[points.len() - 1]);
            let start = last.lerp(first, 0.5);
            contour.push(OutlinePoint { x: start.x, y: start.y, on_curve: true });
            contour.extend_from_slice(points);
        }
    }

    let len = contour.len();
    let mut result = Vec::with_capacity(len * 2 + 1);
    for i in 0..=len {
        let curr = contour[i % len];
        let next = contour[(i + 1) % len];
        result.push(Point::from(curr).scale(scale));

        if curr.on_curve == next.on_curve && i < len {
            let mid = Point::from(curr).lerp(Point::from(next), 0.5);
            result.push(mid.scale(scale));
        }
    }

    result
}


impl GlyphOutline {
    /// Returns all contours with implied points reconstructed.
    ///
    /// See [`reconstruct_contour`] for details.
    pub fn reconstructed_contours(&self, scale: f32) -> Vec<Vec<Point>> {
        self.contours()
            .map(|contour| reconstruct_contour(contour, scale))
            .collect()
    }

    /// Outlines the glyph.
    ///
    /// Every contour is emitted as `move_to`, a list of `quad_to` and `close`.
    ///
    /// Returns the glyph bounding box or `None` when the glyph has no outline.
    pub fn outline(&self, builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }

        for contour in self.contours() {
            let points = reconstruct_contour(contour, 1.0);
            let first = match points.first() {
                Some(p) => p,
                None => continue,
            };

            builder.move_to(first.x, first.y);
            for pair in points[1..].chunks_exact(2) {
                builder.quad_to(pair[0].x, pair[0].y, pair[1].x, pair[1].y);
            }
            builder.close();
        }

        Some(self.bbox)
    }
}
