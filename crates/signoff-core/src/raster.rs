//! Stroke rasterization into dot and bar primitives.
//!
//! The capture surface can only place two kinds of marks: small filled
//! circles and filled rectangles rotated about their center. Each
//! stroke starts with a dot and gets one oriented bar per point pair.
//! A second dot caps the lift-off end, so joints and ends stay round.
//! Primitives are recomputed from the drawing on every render and
//! never stored.

use crate::drawing::{Drawing, Stroke};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default mark width (dot diameter and bar thickness) in surface units.
pub const DEFAULT_INK_WIDTH: f64 = 4.0;

/// A render instruction derived from recorded strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InkPrimitive {
    /// Filled circle capping a stroke end or marking a lone sample.
    Dot { center: Point, diameter: f64 },
    /// Filled rectangle spanning two consecutive samples, rotated by
    /// `angle` radians about its center.
    Bar {
        center: Point,
        length: f64,
        thickness: f64,
        angle: f64,
    },
}

/// Rasterize a whole drawing, stroke by stroke in render order.
///
/// Pure and stateless: equal drawings always produce equal primitive
/// sequences, so it is safe to call once per frame.
pub fn rasterize(drawing: &Drawing, width: f64) -> Vec<InkPrimitive> {
    let mut primitives = Vec::new();
    for stroke in drawing.strokes() {
        rasterize_into(stroke, width, &mut primitives);
    }
    primitives
}

/// Rasterize a single stroke.
pub fn rasterize_stroke(stroke: &Stroke, width: f64) -> Vec<InkPrimitive> {
    let mut primitives = Vec::new();
    rasterize_into(stroke, width, &mut primitives);
    primitives
}

fn rasterize_into(stroke: &Stroke, width: f64, out: &mut Vec<InkPrimitive>) {
    let points = &stroke.points;
    let Some(&first) = points.first() else {
        return;
    };

    out.push(InkPrimitive::Dot {
        center: first,
        diameter: width,
    });

    for window in points.windows(2) {
        let (a, b) = (window[0], window[1]);
        let delta = b - a;
        let length = delta.hypot();
        if length < f64::EPSILON {
            // Duplicate sample, nothing to span.
            continue;
        }

        out.push(InkPrimitive::Bar {
            center: a.midpoint(b),
            length,
            thickness: width,
            angle: delta.y.atan2(delta.x),
        });
    }

    if points.len() > 1 {
        out.push(InkPrimitive::Dot {
            center: points[points.len() - 1],
            diameter: width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::StrokeId;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn stroke(points: Vec<Point>) -> Stroke {
        Stroke::from_points(StrokeId(0), points)
    }

    fn bars(primitives: &[InkPrimitive]) -> Vec<InkPrimitive> {
        primitives
            .iter()
            .copied()
            .filter(|p| matches!(p, InkPrimitive::Bar { .. }))
            .collect()
    }

    #[test]
    fn test_empty_drawing_emits_nothing() {
        let drawing = Drawing::new();
        assert!(rasterize(&drawing, DEFAULT_INK_WIDTH).is_empty());
    }

    #[test]
    fn test_empty_stroke_emits_nothing() {
        let empty = stroke(Vec::new());
        assert!(rasterize_stroke(&empty, DEFAULT_INK_WIDTH).is_empty());
    }

    #[test]
    fn test_single_point_emits_one_dot() {
        let tap = stroke(vec![Point::new(7.0, 9.0)]);
        let primitives = rasterize_stroke(&tap, DEFAULT_INK_WIDTH);

        assert_eq!(primitives.len(), 1);
        match primitives[0] {
            InkPrimitive::Dot { center, diameter } => {
                assert!((center.x - 7.0).abs() < f64::EPSILON);
                assert!((center.y - 9.0).abs() < f64::EPSILON);
                assert!((diameter - DEFAULT_INK_WIDTH).abs() < f64::EPSILON);
            }
            InkPrimitive::Bar { .. } => panic!("expected a dot"),
        }
    }

    #[test]
    fn test_horizontal_segment() {
        let line = stroke(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        let primitives = rasterize_stroke(&line, DEFAULT_INK_WIDTH);

        assert_eq!(primitives.len(), 3);
        assert_eq!(
            primitives[0],
            InkPrimitive::Dot {
                center: Point::new(0.0, 0.0),
                diameter: DEFAULT_INK_WIDTH,
            }
        );
        match primitives[1] {
            InkPrimitive::Bar {
                center,
                length,
                thickness,
                angle,
            } => {
                assert!((center.x - 5.0).abs() < f64::EPSILON);
                assert!((center.y).abs() < f64::EPSILON);
                assert!((length - 10.0).abs() < f64::EPSILON);
                assert!((thickness - DEFAULT_INK_WIDTH).abs() < f64::EPSILON);
                assert!((angle).abs() < f64::EPSILON);
            }
            InkPrimitive::Dot { .. } => panic!("expected a bar"),
        }
        assert_eq!(
            primitives[2],
            InkPrimitive::Dot {
                center: Point::new(10.0, 0.0),
                diameter: DEFAULT_INK_WIDTH,
            }
        );
    }

    #[test]
    fn test_duplicate_sample_is_skipped() {
        let jittered = stroke(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        ]);
        let primitives = rasterize_stroke(&jittered, DEFAULT_INK_WIDTH);

        let bars = bars(&primitives);
        assert_eq!(bars.len(), 1);
        match bars[0] {
            InkPrimitive::Bar { length, angle, .. } => {
                assert!((length - 50.0_f64.sqrt()).abs() < 1e-10);
                assert!((angle - FRAC_PI_4).abs() < 1e-10);
            }
            InkPrimitive::Dot { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_angle_follows_direction() {
        let down = stroke(vec![Point::new(0.0, 0.0), Point::new(0.0, 8.0)]);
        let leftward = stroke(vec![Point::new(0.0, 0.0), Point::new(-8.0, 0.0)]);

        match bars(&rasterize_stroke(&down, DEFAULT_INK_WIDTH))[0] {
            InkPrimitive::Bar { angle, .. } => {
                assert!((angle - FRAC_PI_2).abs() < f64::EPSILON);
            }
            InkPrimitive::Dot { .. } => unreachable!(),
        }
        match bars(&rasterize_stroke(&leftward, DEFAULT_INK_WIDTH))[0] {
            InkPrimitive::Bar { angle, .. } => {
                assert!((angle - PI).abs() < f64::EPSILON);
            }
            InkPrimitive::Dot { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_strokes_rasterize_in_render_order() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Point::new(0.0, 0.0));
        drawing.append_point(Point::new(10.0, 0.0));
        drawing.begin_stroke(Point::new(100.0, 100.0));

        let primitives = rasterize(&drawing, DEFAULT_INK_WIDTH);
        assert_eq!(primitives.len(), 4);
        match primitives[3] {
            InkPrimitive::Dot { center, .. } => {
                assert!((center.x - 100.0).abs() < f64::EPSILON);
            }
            InkPrimitive::Bar { .. } => panic!("expected the lone dot last"),
        }
    }

    #[test]
    fn test_rasterize_is_idempotent() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Point::new(2.0, 3.0));
        drawing.append_point(Point::new(9.0, 12.0));
        drawing.append_point(Point::new(9.0, 12.0));
        drawing.append_point(Point::new(-4.0, 7.0));

        let first = rasterize(&drawing, DEFAULT_INK_WIDTH);
        let second = rasterize(&drawing, DEFAULT_INK_WIDTH);
        assert_eq!(first, second);
    }

    #[test]
    fn test_width_sets_diameter_and_thickness() {
        let line = stroke(vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0)]);
        let primitives = rasterize_stroke(&line, 2.5);

        match primitives[0] {
            InkPrimitive::Dot { diameter, .. } => {
                assert!((diameter - 2.5).abs() < f64::EPSILON);
            }
            InkPrimitive::Bar { .. } => panic!("expected a dot first"),
        }
        match primitives[1] {
            InkPrimitive::Bar { thickness, .. } => {
                assert!((thickness - 2.5).abs() < f64::EPSILON);
            }
            InkPrimitive::Dot { .. } => panic!("expected a bar"),
        }
    }
}
