//! Asteroids entry point
//!
//! Native headless driver: windowing, GL drawing and real key polling belong
//! to the host, so this binary replays a scripted session against a canvas
//! that only counts draw calls.

use std::path::PathBuf;

use asteroids::platform::{InputEvent, KeyCode, ScriptedInput, WallClock};
use asteroids::renderer::Canvas;
use asteroids::{Application, Settings};

/// Frames in the scripted session
const DEMO_FRAMES: usize = 300;

/// Canvas that tallies line strips per frame
#[derive(Debug, Default)]
struct TraceCanvas {
    strips: usize,
    frames: u64,
}

impl Canvas for TraceCanvas {
    fn clear(&mut self, _color: [f32; 4]) {
        self.strips = 0;
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _degrees: f32) {}
    fn set_color(&mut self, _color: [f32; 4]) {}
    fn draw_line_strip(&mut self, _coordinates: &[f32], _width: f32, _smooth: bool) {
        self.strips += 1;
    }
    fn draw_text(&mut self, text: &str, changed: bool) {
        if changed {
            log::info!("{}", text);
        }
    }
    fn present(&mut self) {
        self.frames += 1;
        log::trace!("Frame {} presented with {} line strips", self.frames, self.strips);
    }
}

/// Sweep the turret around, firing every few frames with the odd thrust
fn demo_script() -> ScriptedInput {
    let frames = (0..DEMO_FRAMES).map(|i| {
        let mut events = vec![InputEvent::KeyDown(KeyCode::RIGHT)];
        if i % 6 == 0 {
            events.push(InputEvent::KeyDown(KeyCode::SPACE));
        }
        if i % 90 == 45 {
            events.push(InputEvent::KeyDown(KeyCode::UP));
        }
        events
    });
    ScriptedInput::new(frames)
}

fn main() {
    env_logger::init();
    log::info!("Asteroids (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let mut app = match Application::new(settings, demo_script(), TraceCanvas::default(), WallClock::new()) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to start: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = app.run() {
        log::error!("Game loop stopped: {}", err);
        std::process::exit(1);
    }

    println!(
        "Session over after {} frames: score {}, {} asteroids left",
        app.world.frame,
        app.world.score,
        app.world.asteroids.len()
    );
}
