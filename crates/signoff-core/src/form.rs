//! Delivery capture form state.

use crate::photo::{PhotoAttachment, PhotoCapture, PhotoSource};
use serde::{Deserialize, Serialize};

/// Progress of the signature field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignatureState {
    /// No signature yet.
    #[default]
    Empty,
    /// Ink is present on the built-in pad.
    Drawn,
    /// An embedded pad exported the signature as a data URL.
    Exported(String),
}

impl SignatureState {
    pub fn is_present(&self) -> bool {
        !matches!(self, SignatureState::Empty)
    }
}

/// Derived summary of the captured evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Characters in the trimmed note.
    pub note_chars: usize,
    pub has_photo: bool,
    pub has_signature: bool,
}

/// State behind the capture screen: note, photo, signature.
///
/// Holds no strokes itself. The owning session keeps the signature
/// field in sync with whichever signature provider it wired up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureForm {
    note: String,
    photo: Option<PhotoAttachment>,
    signature: SignatureState,
}

impl CaptureForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The note text as entered, untrimmed.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Replace the note text.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Character count of the trimmed note.
    pub fn note_chars(&self) -> usize {
        self.note.trim().chars().count()
    }

    /// The attached photo, if any.
    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Attach a photo by URL.
    ///
    /// The input is trimmed first; an input that trims to nothing
    /// removes the current attachment instead.
    pub fn attach_photo_url(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.photo = None;
        } else {
            self.photo = Some(PhotoAttachment {
                uri: trimmed.to_string(),
                source: PhotoSource::Url,
            });
        }
    }

    /// Attach a photo delivered by the device camera.
    pub fn attach_photo_capture(&mut self, capture: PhotoCapture) {
        self.photo = Some(PhotoAttachment {
            uri: capture.uri,
            source: PhotoSource::Camera,
        });
    }

    /// Detach the photo.
    pub fn remove_photo(&mut self) {
        self.photo = None;
    }

    /// The signature field.
    pub fn signature(&self) -> &SignatureState {
        &self.signature
    }

    pub fn has_signature(&self) -> bool {
        self.signature.is_present()
    }

    /// Sync from the built-in pad's has-content flag.
    pub fn set_signature_drawn(&mut self, present: bool) {
        self.signature = if present {
            SignatureState::Drawn
        } else {
            SignatureState::Empty
        };
    }

    /// Store an embedded pad's exported data URL.
    pub fn set_signature_export(&mut self, data_url: String) {
        self.signature = SignatureState::Exported(data_url);
    }

    /// Reset the signature field.
    pub fn clear_signature(&mut self) {
        self.signature = SignatureState::Empty;
    }

    /// Whether at least one piece of evidence has been captured.
    pub fn can_submit(&self) -> bool {
        self.note_chars() > 0 || self.has_photo() || self.has_signature()
    }

    /// Snapshot of the evidence counts for display.
    pub fn summary(&self) -> CaptureSummary {
        CaptureSummary {
            note_chars: self.note_chars(),
            has_photo: self.has_photo(),
            has_signature: self.has_signature(),
        }
    }
}
