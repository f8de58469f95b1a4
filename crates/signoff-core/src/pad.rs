//! Signature providers: the built-in recorder and the embedded vendor pad.

use crate::recorder::StrokeRecorder;
use crate::theme::{Rgba, Theme};
use serde::{Deserialize, Serialize};

/// Placeholder shown on the canvas while no ink is present.
pub const SIGNATURE_PLACEHOLDER: &str = "Sign inside the box";

/// Minimal capability the form needs from any signature provider.
pub trait SignatureSource {
    /// Whether any signature content exists right now.
    fn has_signature(&self) -> bool;

    /// Discard the signature wholesale.
    fn clear(&mut self);
}

impl SignatureSource for StrokeRecorder {
    fn has_signature(&self) -> bool {
        self.has_content()
    }

    fn clear(&mut self) {
        StrokeRecorder::clear(self);
    }
}

/// Result of asking an embedded pad for its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadReading {
    /// Exported image as a `data:image/png;base64,...` URL.
    Signature(String),
    /// The pad holds no ink.
    Empty,
}

/// Contract of an embedded vendor signature pad.
///
/// An alternative to the built-in recorder for hosts that ship the
/// vendor component; the session accepts either without the form
/// knowing which one produced the signature.
pub trait EmbeddedSignaturePad {
    /// Ask the pad to export its current contents.
    fn read_signature(&mut self) -> PadReading;

    /// Wipe the pad.
    fn clear_signature(&mut self);
}

/// Configuration handed to an embedded pad instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadConfig {
    /// Ink color.
    pub pen_color: Rgba,
    /// Pad background.
    pub background: Rgba,
    /// Hint text shown on the empty pad.
    pub description_text: String,
    /// Wipe the pad automatically after a successful read.
    pub auto_clear: bool,
}

impl PadConfig {
    /// Pad configuration matching a screen theme.
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            pen_color: theme.text,
            background: theme.card,
            description_text: SIGNATURE_PLACEHOLDER.to_string(),
            auto_clear: false,
        }
    }
}

impl Default for PadConfig {
    fn default() -> Self {
        Self::for_theme(&Theme::light())
    }
}
