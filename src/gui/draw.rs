use super::{App, Config};
use crate::{NiceInt, SimState};
use eframe::egui::{vec2, Button, Rect, RichText, Sense, Stroke, Ui, Vec2};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_lifecycle_controls(&mut self, ui: &mut Ui) {
        let running = self.engine.is_running();

        ui.horizontal(|ui| {
            let text = if running { "Pause" } else { "Start" };
            if ui.add(Self::new_button(text)).clicked() {
                if running {
                    self.pause();
                } else {
                    self.start();
                }
            }
            if ui.add(Self::new_button("Stop")).clicked() {
                self.stop();
            }
            if ui.add(Self::new_button("Reset")).clicked() {
                self.reset();
            }
        });

        if ui
            .add_enabled(!running, Self::new_button("Next step"))
            .clicked()
        {
            self.step();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let state = match self.engine.state() {
            SimState::Running => "running",
            SimState::Paused => "paused",
            SimState::Stopped => "stopped",
        };
        ui.label(Self::new_text(&format!("State: {}", state)));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from(self.engine.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            NiceInt::from_usize(self.engine.population())
        )));
        ui.label(Self::new_text(&format!(
            "Grid: {} x {}",
            self.engine.rows(),
            self.engine.cols()
        )));
        ui.label(Self::new_text(&format!(
            "Last update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            self.draw_lifecycle_controls(ui);
            ui.add_space(Config::WIDGET_GAP);
            self.draw_stats(ui);
            ui.add_space(Config::WIDGET_GAP);
            ui.label(Self::new_text(
                "Space: start/pause\nS: next step\nR: reset\nClick: toggle cell",
            ));
        });
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        self.fit_to_viewport(rect.size());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = pos - rect.min;
                let (x, y) = (p.y / Config::CELL_SIZE, p.x / Config::CELL_SIZE);
                if x >= 0. && y >= 0. {
                    self.engine.toggle_cell(x as usize, y as usize);
                }
            }
        }

        let snapshot = self.engine.snapshot();
        let side = Config::CELL_SIZE;
        let size = vec2(snapshot.cells.cols() as f32, snapshot.cells.rows() as f32) * side;
        painter.rect_filled(Rect::from_min_size(rect.min, size), 0., Config::DEAD_COLOR);
        for (x, y) in snapshot.cells.iter_alive() {
            let min = rect.min + vec2(y as f32, x as f32) * side;
            let cell = Rect::from_min_size(min, Vec2::splat(side)).shrink(Config::CELL_GAP);
            painter.rect_filled(cell, 0., Config::ALIVE_COLOR);
        }
    }
}
