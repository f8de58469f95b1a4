//! Signoff Core Library
//!
//! Platform-agnostic model for the delivery sign-off screen: stroke
//! recording and rasterization for the signature pad, plus the note,
//! photo, and summary state around it.

pub mod drawing;
pub mod form;
pub mod input;
pub mod pad;
pub mod photo;
pub mod raster;
pub mod recorder;
pub mod session;
pub mod theme;

pub use drawing::{Drawing, Stroke, StrokeId};
pub use form::{CaptureForm, CaptureSummary, SignatureState};
pub use input::PointerEvent;
pub use pad::{
    EmbeddedSignaturePad, PadConfig, PadReading, SignatureSource, SIGNATURE_PLACEHOLDER,
};
pub use photo::{
    CameraDevice, CameraError, CameraFacing, CameraResult, PhotoAttachment, PhotoCapture,
    PhotoSource,
};
pub use raster::{rasterize, rasterize_stroke, InkPrimitive, DEFAULT_INK_WIDTH};
pub use recorder::{ChangeListener, StrokeRecorder};
pub use session::CaptureSession;
pub use theme::{ColorScheme, Rgba, Theme};
