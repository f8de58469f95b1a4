//! Stroke recording for the built-in signature pad.

use crate::drawing::Drawing;
use crate::input::PointerEvent;
use kurbo::Point;
use std::fmt;

/// Listener invoked after every recorded change with the drawing's
/// current has-content flag.
pub type ChangeListener = Box<dyn FnMut(bool)>;

/// Accumulates pointer samples into strokes.
///
/// Owns the [`Drawing`] being recorded, no rendering logic. Calls
/// arrive sequentially from a single pointer, so there is nothing to
/// synchronize.
pub struct StrokeRecorder {
    drawing: Drawing,
    listener: Option<ChangeListener>,
}

impl StrokeRecorder {
    /// Create a recorder with an empty drawing.
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            listener: None,
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Start a new stroke at `point`. Always succeeds.
    pub fn begin(&mut self, point: Point) {
        self.drawing.begin_stroke(point);
        self.notify();
    }

    /// Extend the active stroke with `point`.
    ///
    /// Ignored when no stroke has been started, which guards against
    /// move events delivered before the first contact.
    pub fn extend(&mut self, point: Point) {
        if self.drawing.append_point(point) {
            self.notify();
        }
    }

    /// Discard every stroke. The id sequence keeps counting.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.notify();
    }

    /// Apply one pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.begin(position),
            PointerEvent::Move { position } => self.extend(position),
        }
    }

    /// The recorded drawing.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Whether any stroke carries at least one point.
    pub fn has_content(&self) -> bool {
        self.drawing.has_content()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(self.drawing.has_content());
        }
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrokeRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeRecorder")
            .field("drawing", &self.drawing)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
