//! One delivery capture session.

use crate::drawing::Drawing;
use crate::form::{CaptureForm, CaptureSummary};
use crate::input::PointerEvent;
use crate::pad::{EmbeddedSignaturePad, PadReading};
use crate::photo::{CameraDevice, CameraFacing, CameraResult};
use crate::raster::{self, InkPrimitive, DEFAULT_INK_WIDTH};
use crate::recorder::StrokeRecorder;
use crate::theme::{ColorScheme, Theme};
use uuid::Uuid;

/// Runtime state of one capture screen.
///
/// Owns the stroke recorder and the form, and keeps the form's
/// signature field in sync with the recorder. The drawing never
/// outlives the session and is only ever discarded wholesale.
#[derive(Debug)]
pub struct CaptureSession {
    id: Uuid,
    scheme: ColorScheme,
    recorder: StrokeRecorder,
    form: CaptureForm,
}

impl CaptureSession {
    /// Start a fresh session.
    pub fn new(scheme: ColorScheme) -> Self {
        let id = Uuid::new_v4();
        log::debug!("capture session {id} started");
        Self {
            id,
            scheme,
            recorder: StrokeRecorder::new(),
            form: CaptureForm::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// Palette for the current appearance.
    pub fn theme(&self) -> Theme {
        self.scheme.theme()
    }

    /// The captured form.
    pub fn form(&self) -> &CaptureForm {
        &self.form
    }

    /// Replace the note text.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.form.set_note(note);
    }

    /// Attach a photo by URL; blank input detaches instead.
    pub fn attach_photo_url(&mut self, input: &str) {
        self.form.attach_photo_url(input);
    }

    /// Detach the photo.
    pub fn remove_photo(&mut self) {
        self.form.remove_photo();
    }

    /// Run the camera flow: permission prompt, one capture, attach.
    pub fn take_photo(
        &mut self,
        device: &mut dyn CameraDevice,
        facing: CameraFacing,
    ) -> CameraResult<()> {
        device.request_authorization()?;
        let capture = device.capture(facing)?;
        log::debug!("session {}: photo captured from device", self.id);
        self.form.attach_photo_capture(capture);
        Ok(())
    }

    /// Feed one pointer event into the signature recorder.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        self.recorder.handle_event(event);
        self.form.set_signature_drawn(self.recorder.has_content());
    }

    /// Discard the whole signature drawing.
    pub fn clear_signature(&mut self) {
        log::debug!("session {}: signature cleared", self.id);
        self.recorder.clear();
        self.form.clear_signature();
    }

    /// Import the signature from an embedded pad instead of the
    /// built-in recorder. Returns whether the pad had content.
    pub fn import_signature(&mut self, pad: &mut dyn EmbeddedSignaturePad) -> bool {
        match pad.read_signature() {
            PadReading::Signature(data_url) => {
                self.form.set_signature_export(data_url);
                true
            }
            PadReading::Empty => false,
        }
    }

    /// The recorded signature drawing.
    pub fn drawing(&self) -> &Drawing {
        self.recorder.drawing()
    }

    /// The stroke recorder, for hosts that wire their own listener.
    pub fn recorder_mut(&mut self) -> &mut StrokeRecorder {
        &mut self.recorder
    }

    /// Rasterize the current drawing at the default ink width.
    pub fn rasterize(&self) -> Vec<InkPrimitive> {
        raster::rasterize(self.recorder.drawing(), DEFAULT_INK_WIDTH)
    }

    pub fn has_signature(&self) -> bool {
        self.form.has_signature()
    }

    pub fn has_photo(&self) -> bool {
        self.form.has_photo()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Snapshot of the captured evidence.
    pub fn summary(&self) -> CaptureSummary {
        self.form.summary()
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
