//! Scripted capture run: fills the form, signs, and writes the
//! rendered signature as `signature.svg`.

use kurbo::Point;
use signoff_core::{CaptureSession, ColorScheme, PointerEvent};
use signoff_render::{replay, SvgSurface};

/// Signature canvas size, matching the live screen.
const CANVAS_WIDTH: f64 = 320.0;
const CANVAS_HEIGHT: f64 = 160.0;

fn main() {
    env_logger::init();
    log::info!("Starting Signoff demo");

    let scheme = if std::env::args().any(|arg| arg == "--dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    };

    let mut session = CaptureSession::new(scheme);
    session.set_note("Left with concierge, box intact");
    session.attach_photo_url("  https://example.com/delivery/4821.jpg  ");

    for event in signature_trace() {
        session.pointer_event(event);
    }

    let primitives = session.rasterize();
    log::info!(
        "rasterized {} primitives from {} strokes",
        primitives.len(),
        session.drawing().stroke_count()
    );

    let mut surface = SvgSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT, session.theme());
    replay(&primitives, &mut surface);
    let svg = surface.finish();

    match std::fs::write("signature.svg", &svg) {
        Ok(()) => log::info!("wrote signature.svg"),
        Err(err) => log::error!("failed to write signature.svg: {err}"),
    }

    match serde_json::to_string_pretty(&session.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize summary: {err}"),
    }
}

/// A two-stroke squiggle roughly shaped like initials.
fn signature_trace() -> Vec<PointerEvent> {
    let first: &[(f64, f64)] = &[
        (52.0, 48.0),
        (58.0, 84.0),
        (60.0, 108.0),
        (54.0, 122.0),
        (42.0, 126.0),
        (32.0, 118.0),
    ];
    let second: &[(f64, f64)] = &[
        (96.0, 52.0),
        (118.0, 46.0),
        (134.0, 58.0),
        (132.0, 82.0),
        (112.0, 96.0),
        (136.0, 104.0),
        (148.0, 122.0),
    ];

    let mut events = Vec::new();
    for stroke in [first, second] {
        for (index, &(x, y)) in stroke.iter().enumerate() {
            let position = Point::new(x, y);
            if index == 0 {
                events.push(PointerEvent::Down { position });
            } else {
                events.push(PointerEvent::Move { position });
            }
        }
    }
    events
}
