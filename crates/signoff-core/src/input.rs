//! Pointer events for the signature surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event from the capture surface, in local coordinates.
///
/// The surface delivers events for a single pointer in temporal order.
/// Lift-off carries no event of its own; the next `Down` starts a new
/// stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer made contact.
    Down { position: Point },
    /// Pointer moved while in contact.
    Move { position: Point },
}
