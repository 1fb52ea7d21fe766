use super::Config;
use crate::{EngineConfig, Result, SimState, SimulationEngine, Ticker};
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin, SidePanel, Vec2};
use std::time::Instant;

/// Interactive driver: owns the timer, sizes the grid after the window
/// and renders engine snapshots.
pub struct App {
    pub(super) engine: SimulationEngine, // Conway's GoL engine.
    pub(super) ticker: Ticker,           // Decides when the next generation is due.
    pub(super) autostart: bool,          // Start running once the viewport is known.
    pub(super) rejected_size: Option<(usize, usize)>, // Last viewport size the engine refused.
    pub(super) last_update_duration: f64, // Duration of the last generation in seconds.
}

impl App {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let ticker = Ticker::new(config.tick_interval, Instant::now());
        let engine = SimulationEngine::new(Config::INITIAL_ROWS, Config::INITIAL_COLS, config)?;
        Ok(Self {
            engine,
            ticker,
            autostart: true,
            rejected_size: None,
            last_update_duration: 0.,
        })
    }

    pub(super) fn start(&mut self) {
        self.ticker.restart(Instant::now());
        self.engine.start();
    }

    pub(super) fn pause(&mut self) {
        self.engine.pause();
    }

    pub(super) fn stop(&mut self) {
        self.ticker.restart(Instant::now());
        self.engine.stop();
    }

    pub(super) fn reset(&mut self) {
        self.ticker.restart(Instant::now());
        self.engine.reset();
    }

    pub(super) fn step(&mut self) {
        let timer = Instant::now();
        self.engine.step();
        self.last_update_duration = timer.elapsed().as_secs_f64();
    }

    /// Matches the grid to the number of whole cells fitting into `size` pixels.
    pub(super) fn fit_to_viewport(&mut self, size: Vec2) {
        let rows = (size.y / Config::CELL_SIZE).floor().max(0.) as usize;
        let cols = (size.x / Config::CELL_SIZE).floor().max(0.) as usize;
        let changed = (rows, cols) != (self.engine.rows(), self.engine.cols());

        if changed && self.rejected_size != Some((rows, cols)) {
            let was_running = self.engine.state() == SimState::Running;
            self.ticker.restart(Instant::now());
            match self.engine.configure_dimensions(rows, cols) {
                Ok(()) => {
                    self.rejected_size = None;
                    if was_running {
                        self.engine.start();
                    }
                }
                Err(e) => {
                    log::warn!("Viewport too small, keeping the current grid: {}", e);
                    self.rejected_size = Some((rows, cols));
                }
            }
        }

        if self.autostart {
            self.autostart = false;
            self.start();
        }
    }

    fn update_engine(&mut self) {
        // ticks are consumed even while paused so that none pile up
        let due = self.ticker.due_ticks(Instant::now());
        if due == 0 || !self.engine.is_running() {
            return;
        }

        let timer = Instant::now();
        for _ in 0..due {
            self.engine.advance();
        }
        self.last_update_duration = timer.elapsed().as_secs_f64() / due as f64;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (toggle, step, reset) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::S),
                input.key_pressed(Key::R),
            )
        });
        if toggle {
            if self.engine.is_running() {
                self.pause();
            } else {
                self.start();
            }
        }
        if step && !self.engine.is_running() {
            self.step();
        }
        if reset {
            self.reset();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        SidePanel::left("controls")
            .exact_width(Config::CONTROL_PANEL_WIDTH)
            .resizable(false)
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw_field(ui);
            });

        self.update_engine();
        if self.engine.is_running() {
            ctx.request_repaint_after(self.ticker.time_until_next(Instant::now()));
        }
    }
}
