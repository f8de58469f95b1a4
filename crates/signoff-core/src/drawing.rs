//! Signature drawing model: strokes and the drawing that owns them.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a stroke in the order it was started.
///
/// Ids are unique for the lifetime of a [`Drawing`] and strictly
/// increasing, including across [`Drawing::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrokeId(pub u64);

/// One continuous pen-down-to-lift path (series of points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Points in recording order.
    pub points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke from existing points.
    pub fn from_points(id: StrokeId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    /// Get the stroke id.
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All strokes of one signature capture, in render order.
///
/// A drawing is owned by a single capture session and is discarded or
/// replaced wholesale, never merged with another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    strokes: Vec<Stroke>,
    next_id: u64,
}

impl Drawing {
    /// Create a new empty drawing.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            next_id: 0,
        }
    }

    /// Start a new stroke containing exactly `point` and make it the
    /// active one.
    pub fn begin_stroke(&mut self, point: Point) -> StrokeId {
        let id = StrokeId(self.next_id);
        self.next_id += 1;
        self.strokes.push(Stroke {
            id,
            points: vec![point],
        });
        id
    }

    /// Append a point to the most recently started stroke.
    ///
    /// Returns `false` without recording anything when no stroke has
    /// been started yet.
    pub fn append_point(&mut self, point: Point) -> bool {
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.add_point(point);
                true
            }
            None => false,
        }
    }

    /// All strokes, back to front.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get the number of strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the drawing has no strokes at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Whether any stroke carries at least one point.
    ///
    /// This is the flag that gates the surrounding save affordance.
    pub fn has_content(&self) -> bool {
        self.strokes.iter().any(|stroke| !stroke.is_empty())
    }

    /// Remove all strokes. The id sequence keeps counting up so ids
    /// never repeat within the session.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Bounding box of all recorded points, or `None` when no point
    /// has been recorded.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.strokes.iter().flat_map(|stroke| &stroke.points);

        let first = points.next()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;

        for point in points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Some(Rect::new(min_x, min_y, max_x, max_y))
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}
