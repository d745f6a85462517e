// controller.rs - Play/pause state machine driving the engine and the renderer
//
// Input policy:
//   structural (reset, cell edits)   -> typed `EngineError`
//   cosmetic (speed control)         -> invalid input silently ignored

use conway::{Engine, Result};

/// Receives one frame of live-cell positions.
///
/// Implementations must not keep `positions` past the call; the engine
/// reuses that buffer on the next frame.
pub trait Renderer {
    fn draw(&mut self, width: u32, height: u32, cell_size: u32, positions: &[u32]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// No frame scheduled.
    Paused,
    /// A frame is scheduled.
    Running,
}

/// Grid shape restored by [`AnimationController::handle_reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

pub struct AnimationController<R: Renderer> {
    engine: Engine,
    renderer: R,
    state: PlayState,
    steps_per_frame: u32,
    reset_shape: GridShape,
}

impl<R: Renderer> AnimationController<R> {
    /// Starts paused, one generation per frame. Reset restores the engine's
    /// current shape.
    pub fn new(engine: Engine, renderer: R) -> Self {
        let reset_shape = GridShape {
            width: engine.width(),
            height: engine.height(),
            cell_size: engine.cell_size(),
        };
        Self {
            engine,
            renderer,
            state: PlayState::Paused,
            steps_per_frame: 1,
            reset_shape,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn play(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Running;
            log::debug!("playing at {} generation(s) per frame", self.steps_per_frame);
        }
    }

    /// Cancels the scheduled frame. Once this returns, [`Self::run_frame`]
    /// does nothing until the next [`Self::play`].
    pub fn pause(&mut self) {
        if self.state == PlayState::Running {
            self.state = PlayState::Paused;
            log::debug!("paused at generation {}", self.engine.generation());
        }
    }

    /// The play/pause button: always flips the state.
    pub fn toggle_play(&mut self) {
        match self.state {
            PlayState::Paused => self.play(),
            PlayState::Running => self.pause(),
        }
    }

    /// Runs the scheduled frame: draw the current generation, then advance
    /// `steps_per_frame` generations. What is on screen therefore trails the
    /// engine by one frame's worth of ticks.
    ///
    /// Returns false (and does nothing) while paused.
    pub fn run_frame(&mut self) -> bool {
        if self.state != PlayState::Running {
            return false;
        }
        self.redraw();
        for _ in 0..self.steps_per_frame {
            self.engine.tick();
        }
        true
    }

    /// Draws the current generation without ticking.
    pub fn redraw(&mut self) {
        let (width, height, cell_size) =
            (self.engine.width(), self.engine.height(), self.engine.cell_size());
        let live = self.engine.live_cell_positions();
        self.renderer.draw(width, height, cell_size, live.as_slice());
    }

    /// Sets generations per frame. Non-positive values are ignored.
    pub fn set_steps_per_frame(&mut self, steps: i64) {
        match u32::try_from(steps) {
            Ok(steps) if steps > 0 => self.steps_per_frame = steps,
            _ => log::debug!("ignoring steps per frame {steps}"),
        }
    }

    /// [`Self::set_steps_per_frame`] for raw text input. Non-numeric text is ignored.
    pub fn set_steps_per_frame_input(&mut self, input: &str) {
        match input.trim().parse::<i64>() {
            Ok(steps) => self.set_steps_per_frame(steps),
            Err(_) => log::debug!("ignoring steps per frame {input:?}"),
        }
    }

    /// Edits the cell under a canvas pixel, then redraws immediately,
    /// whether running or paused.
    pub fn handle_canvas_click(
        &mut self,
        pixel_x: f32,
        pixel_y: f32,
        stamp_glider: bool,
    ) -> Result<()> {
        let geometry = self.engine.geometry();
        let (row, col) =
            geometry.cell_at(pixel_x, pixel_y, self.engine.width(), self.engine.height());
        if stamp_glider {
            self.engine.stamp_glider(row, col)?;
        } else {
            self.engine.toggle_cell(row, col)?;
        }
        self.redraw();
        Ok(())
    }

    /// Resets the engine to an empty grid of the configured shape. A paused
    /// controller starts running; a running one keeps running.
    pub fn handle_reset(&mut self) -> Result<()> {
        let GridShape { width, height, cell_size } = self.reset_shape;
        self.engine.reset(width, height, cell_size)?;
        self.play();
        Ok(())
    }

    /// Kills every cell. No redraw: a running controller shows the result on
    /// its next frame, a paused one keeps showing the old grid.
    pub fn handle_clear(&mut self) {
        self.engine.clear();
        log::debug!("cleared at generation {}", self.engine.generation());
    }

    /// Fills the grid pseudo-randomly from `seed` and redraws.
    pub fn randomize(&mut self, seed: u64) {
        self.engine.randomize(seed);
        self.redraw();
    }
}
