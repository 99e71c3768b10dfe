//! QPong headless host
//!
//! Plays a scripted game against the computer paddle without a window:
//! presses Start, sweeps a synthetic cursor over the field at 60 frames per
//! second of simulated time, logs every point and closes.
//!
//! Usage: `qpong [settings.json]`

use std::time::Duration;

use qpong::consts::{REFRESH_RATE_HZ, TICK_INTERVAL_MS};
use qpong::{Session, Settings};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("QPong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    let mut session = match Session::new(&settings) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start: {e}");
            std::process::exit(1);
        }
    };

    session.start();
    log::debug!("Cursor hidden over field: {}", session.hides_cursor());

    let frame = Duration::from_millis(TICK_INTERVAL_MS);
    let frames = (settings.demo_seconds.max(0.0) * REFRESH_RATE_HZ as f32) as u64;
    let height = settings.window_height as f32;
    for i in 0..frames {
        let cursor_y = sweep(i, height);
        session.advance(frame, cursor_y);
    }

    let last = session.snapshot();
    session.close();
    println!("{} - {}", last.comp_score, last.user_score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is embedded by a web front end instead
}

/// Cursor y that drifts up and down across the field
fn sweep(frame: u64, height: f32) -> f32 {
    let t = frame as f32 / REFRESH_RATE_HZ as f32;
    height / 2.0 + (t * 1.3).sin() * height * 0.4
}
