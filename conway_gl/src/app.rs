// app.rs - eframe shell: controls, the GPU-drawn canvas and frame pacing

use std::sync::Arc;
use std::time::{Duration, Instant};

use conway::Engine;
use eframe::{egui, egui_glow, glow};
use egui::mutex::Mutex;
use egui::{Sense, Vec2};
use grid_display::{GridFrame, RenderError, RenderPipeline, Surface, Viewport};

use crate::config::AppConfig;
use crate::controller::{AnimationController, Renderer};
use crate::error::AppError;

const MAX_STEPS_PER_FRAME: u32 = 32;

/// The most recently drawn frame, waiting for the paint callback.
#[derive(Default)]
struct StagedFrame {
    width: u32,
    height: u32,
    cell_size: u32,
    positions: Vec<u32>,
}

impl StagedFrame {
    fn as_grid_frame(&self) -> GridFrame<'_> {
        GridFrame {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            positions: &self.positions,
        }
    }
}

/// [`Renderer`] that copies each frame into a pooled buffer shared with the
/// canvas paint callback. egui runs the callback after `update` returns.
#[derive(Clone, Default)]
pub struct FrameStager {
    frame: Arc<Mutex<StagedFrame>>,
}

impl Renderer for FrameStager {
    fn draw(&mut self, width: u32, height: u32, cell_size: u32, positions: &[u32]) {
        let mut frame = self.frame.lock();
        frame.width = width;
        frame.height = height;
        frame.cell_size = cell_size;
        frame.positions.clear();
        frame.positions.extend_from_slice(positions);
    }
}

pub struct LifeApp {
    controller: AnimationController<FrameStager>,
    pipeline: Arc<Mutex<RenderPipeline<glow::Context>>>,
    frame_interval: Duration,
    last_frame: Instant,
    seed: u64,
}

impl LifeApp {
    /// Fails with [`RenderError::RenderContextUnavailable`] when eframe runs
    /// without a glow context.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self, AppError> {
        let gl = cc.gl.as_ref().ok_or(RenderError::RenderContextUnavailable)?;
        let mut pipeline: RenderPipeline<glow::Context> = RenderPipeline::default();
        pipeline.prepare(gl.as_ref())?;

        let engine = Engine::new(config.width, config.height, config.cell_size)?;
        let mut controller = AnimationController::new(engine, FrameStager::default());
        controller.set_steps_per_frame(i64::from(config.steps_per_frame));
        controller.redraw();
        controller.play();
        log::info!(
            "{}x{} grid, cell size {}, {} generation(s) per frame",
            config.width,
            config.height,
            config.cell_size,
            controller.steps_per_frame()
        );

        Ok(Self {
            controller,
            pipeline: Arc::new(Mutex::new(pipeline)),
            frame_interval: config.frame_interval,
            last_frame: Instant::now(),
            seed: 0,
        })
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let engine = self.controller.engine();
        let (w, h) = engine.geometry().canvas_extent(engine.width(), engine.height());
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(w as f32, h as f32), Sense::click());

        let pipeline = self.pipeline.clone();
        let staged = self.controller.renderer().frame.clone();
        let callback = egui_glow::CallbackFn::new(move |info, painter| {
            let vp = info.viewport_in_pixels();
            let surface = Surface {
                viewport: Viewport {
                    x: vp.left_px as i32,
                    y: vp.from_bottom_px as i32,
                    width: vp.width_px as i32,
                    height: vp.height_px as i32,
                },
                pixels_per_point: info.pixels_per_point,
            };
            let frame = staged.lock();
            let gl: &glow::Context = painter.gl();
            if let Err(err) = pipeline.lock().draw(gl, surface, &frame.as_grid_frame()) {
                log::error!("grid draw failed: {err}");
            }
        });
        ui.painter().add(egui::PaintCallback {
            rect,
            callback: Arc::new(callback),
        });

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                let stamp_glider = ui.input(|i| i.modifiers.shift);
                let clicked = self.controller.handle_canvas_click(local.x, local.y, stamp_glider);
                if let Err(err) = clicked {
                    log::warn!("click ignored: {err}");
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Scheduled frame
        if self.controller.is_running() && self.last_frame.elapsed() >= self.frame_interval {
            self.controller.run_frame();
            self.last_frame = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.controller.toggle_play();
                    self.last_frame = Instant::now();
                }

                if ui.button("⟲ Reset").clicked() {
                    if let Err(err) = self.controller.handle_reset() {
                        log::error!("reset failed: {err}");
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.handle_clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.seed = self.seed.wrapping_add(1);
                    self.controller.randomize(self.seed);
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.controller.engine().generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut steps = self.controller.steps_per_frame();
                let slider =
                    egui::Slider::new(&mut steps, 1..=MAX_STEPS_PER_FRAME).suffix(" gen/frame");
                if ui.add(slider).changed() {
                    self.controller.set_steps_per_frame(i64::from(steps));
                }
            });

            ui.separator();
            ui.label("Click a cell to toggle it. Shift+click drops a glider.");
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.canvas(ui));

            ui.separator();

            let engine = self.controller.engine();
            let total = engine.width() as usize * engine.height() as usize;
            let live = engine.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
        });

        if self.controller.is_running() {
            ctx.request_repaint();
        }
    }
}
