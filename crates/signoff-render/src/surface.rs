//! Render-target abstraction for ink primitives.

use kurbo::Point;
use signoff_core::InkPrimitive;

/// A surface that can place the two signature marks.
///
/// Implementations pick the fill color and units; the rasterizer only
/// dictates geometry. Calls arrive in paint order.
pub trait InkSurface {
    /// Fill a circle of `diameter` centered at `center`.
    fn fill_dot(&mut self, center: Point, diameter: f64);

    /// Fill a `length` by `thickness` rectangle centered at `center`,
    /// rotated by `angle` radians about that center.
    fn fill_bar(&mut self, center: Point, length: f64, thickness: f64, angle: f64);
}

/// Replay primitives onto a surface in emission order.
pub fn replay(primitives: &[InkPrimitive], surface: &mut dyn InkSurface) {
    for primitive in primitives {
        match *primitive {
            InkPrimitive::Dot { center, diameter } => surface.fill_dot(center, diameter),
            InkPrimitive::Bar {
                center,
                length,
                thickness,
                angle,
            } => surface.fill_bar(center, length, thickness, angle),
        }
    }
}
