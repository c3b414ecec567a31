//! Cooperative game loop
//!
//! One iteration: measure dt, poll input, advance the world, draw, sleep.
//! Steps never overlap and the loop ends on the first quit signal.

use std::time::Duration;

use crate::error::Result;
use crate::platform::{Clock, InputSource, decode};
use crate::renderer::{Canvas, ScoreLabel, draw_world};
use crate::settings::Settings;
use crate::sim::{World, advance_with_step};

/// Owns the world and drives it against host collaborators
pub struct Application<I, C, K> {
    pub world: World,
    settings: Settings,
    input: I,
    canvas: C,
    clock: K,
    label: ScoreLabel,
    running: bool,
}

impl<I: InputSource, C: Canvas, K: Clock> Application<I, C, K> {
    pub fn new(settings: Settings, input: I, canvas: C, clock: K) -> Result<Self> {
        let world = World::from_settings(&settings)?;
        Ok(Self::with_world(world, settings, input, canvas, clock))
    }

    pub fn with_world(world: World, settings: Settings, input: I, canvas: C, clock: K) -> Self {
        Self {
            world,
            settings,
            input,
            canvas,
            clock,
            label: ScoreLabel::default(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Run one loop iteration without sleeping.
    ///
    /// Returns false once quit has been requested; the frame carrying the
    /// quit signal is neither advanced nor drawn.
    pub fn step(&mut self) -> Result<bool> {
        let dt = self.clock.delta();
        let input = decode(self.input.poll(), &self.settings.bindings);
        if input.quit {
            log::info!("Quit requested at frame {}, score {}", self.world.frame, self.world.score);
            self.running = false;
            return Ok(false);
        }

        advance_with_step(&mut self.world, dt, &input.actions, self.settings.rotate_step);
        draw_world(&mut self.canvas, &self.world, &mut self.label)?;
        Ok(true)
    }

    /// Loop until quit, sleeping `frame_sleep_ms` between frames
    pub fn run(&mut self) -> Result<()> {
        let pause = Duration::from_millis(self.settings.frame_sleep_ms);
        while self.step()? {
            if !pause.is_zero() {
                std::thread::sleep(pause);
            }
        }
        Ok(())
    }
}
