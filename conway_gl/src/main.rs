// main.rs - Native entry point

use std::cell::RefCell;
use std::rc::Rc;

use conway_gl::{AppConfig, AppError, LifeApp};
use eframe::egui;

/// Closes the window on its first frame so `main` can report the startup error.
struct FailedStartup;

impl eframe::App for FailedStartup {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init(); // RUST_LOG=debug for state transitions, trace for tick timings

    let config = AppConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size()),
        ..Default::default()
    };

    let startup_error: Rc<RefCell<Option<AppError>>> = Rc::default();
    let slot = startup_error.clone();

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = match LifeApp::new(cc, &config) {
                Ok(app) => Box::new(app),
                Err(err) => {
                    log::error!("startup failed: {err}");
                    *slot.borrow_mut() = Some(err);
                    Box::new(FailedStartup)
                }
            };
            app
        }),
    )?;

    match startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
