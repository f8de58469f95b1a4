//! Photo evidence and the device camera boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which device camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

/// A photo delivered by the device camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCapture {
    /// Platform URI of the captured image.
    pub uri: String,
}

/// How a photo attachment was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoSource {
    /// Pasted or typed image URL.
    Url,
    /// Device camera capture.
    Camera,
}

/// Photo evidence attached to the capture form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub uri: String,
    pub source: PhotoSource,
}

/// Camera errors.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("Camera access denied")]
    AuthorizationDenied,
    #[error("No camera available")]
    Unavailable,
    #[error("Capture failed: {0}")]
    Capture(String),
}

/// Result type for camera operations.
pub type CameraResult<T> = Result<T, CameraError>;

/// Device camera boundary.
///
/// The platform shell implements this around whatever camera API it
/// has; the capture flow only needs the permission prompt and a single
/// still capture.
pub trait CameraDevice {
    /// Ask the platform for camera permission. Denial is an error.
    fn request_authorization(&mut self) -> CameraResult<()>;

    /// Take one photo with the given camera.
    fn capture(&mut self, facing: CameraFacing) -> CameraResult<PhotoCapture>;
}
