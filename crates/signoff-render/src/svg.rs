//! SVG surface: renders ink primitives into a standalone SVG string.

use crate::surface::InkSurface;
use kurbo::Point;
use signoff_core::{Theme, SIGNATURE_PLACEHOLDER};

/// Corner radius of the signature canvas.
const CANVAS_RADIUS: f64 = 12.0;

/// Builds an SVG document for one signature canvas.
///
/// Marks accumulate through the [`InkSurface`] calls; [`finish`]
/// wraps them in the themed canvas. When no mark was placed the
/// canvas shows the placeholder hint instead, matching the live
/// screen.
///
/// [`finish`]: SvgSurface::finish
pub struct SvgSurface {
    width: f64,
    height: f64,
    theme: Theme,
    placeholder: String,
    body: String,
    marks: usize,
}

impl SvgSurface {
    /// Create a surface of the given size.
    pub fn new(width: f64, height: f64, theme: Theme) -> Self {
        Self {
            width,
            height,
            theme,
            placeholder: SIGNATURE_PLACEHOLDER.to_string(),
            body: String::new(),
            marks: 0,
        }
    }

    /// Override the hint shown when the canvas is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Number of marks placed so far.
    pub fn mark_count(&self) -> usize {
        self.marks
    }

    /// Assemble the SVG document.
    pub fn finish(self) -> String {
        let Self {
            width,
            height,
            theme,
            placeholder,
            body,
            marks,
        } = self;

        let mut svg = String::with_capacity(body.len() + 512);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:13px">"#,
        ));
        svg.push_str(&format!(
            r#"<rect x="0.5" y="0.5" width="{}" height="{}" rx="{CANVAS_RADIUS}" fill="{}" stroke="{}"/>"#,
            width - 1.0,
            height - 1.0,
            theme.card.to_hex(),
            theme.border.to_hex(),
        ));

        if marks == 0 {
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                width / 2.0,
                height / 2.0,
                theme.muted_text.to_hex(),
                escape_xml(&placeholder),
            ));
        }

        svg.push_str(&body);
        svg.push_str("</svg>");
        svg
    }
}

impl InkSurface for SvgSurface {
    fn fill_dot(&mut self, center: Point, diameter: f64) {
        self.marks += 1;
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            diameter / 2.0,
            self.theme.text.to_hex(),
        ));
    }

    fn fill_bar(&mut self, center: Point, length: f64, thickness: f64, angle: f64) {
        self.marks += 1;
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{length}" height="{thickness}" fill="{}" transform="rotate({} {} {})"/>"#,
            center.x - length / 2.0,
            center.y - thickness / 2.0,
            self.theme.text.to_hex(),
            angle.to_degrees(),
            center.x,
            center.y,
        ));
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::replay;
    use signoff_core::{rasterize, ColorScheme, Drawing, DEFAULT_INK_WIDTH};

    #[test]
    fn test_empty_canvas_shows_placeholder() {
        let surface = SvgSurface::new(320.0, 160.0, Theme::light());
        let svg = surface.finish();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(SIGNATURE_PLACEHOLDER));
        assert!(svg.contains("#ffffff"));
        assert!(svg.contains("#dde3f0"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_ink_replaces_placeholder() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Point::new(10.0, 80.0));
        drawing.append_point(Point::new(60.0, 130.0));

        let mut surface = SvgSurface::new(320.0, 160.0, Theme::light());
        replay(&rasterize(&drawing, DEFAULT_INK_WIDTH), &mut surface);
        assert_eq!(surface.mark_count(), 3);

        let svg = surface.finish();
        assert!(!svg.contains(SIGNATURE_PLACEHOLDER));
        assert!(svg.contains(r##"<circle cx="10" cy="80" r="2" fill="#1a1a1a"/>"##));
        assert!(svg.contains("rotate(45"));
    }

    #[test]
    fn test_dark_theme_colors_flow_through() {
        let theme = ColorScheme::Dark.theme();
        let mut surface = SvgSurface::new(320.0, 160.0, theme);
        surface.fill_dot(Point::new(5.0, 5.0), 4.0);

        let svg = surface.finish();
        assert!(svg.contains("#171f2d"));
        assert!(svg.contains(r##"fill="#f0f3ff""##));
    }

    #[test]
    fn test_placeholder_is_escaped() {
        let surface =
            SvgSurface::new(100.0, 50.0, Theme::light()).with_placeholder("sign & <date>");
        let svg = surface.finish();

        assert!(svg.contains("sign &amp; &lt;date&gt;"));
    }
}
