use eframe::egui;

use super::render::{draw_background, draw_connect_preview, draw_nodes, draw_transitions};
use super::{Mode, SketchApp};

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("prompt_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("Regex: {}", self.prompt));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Next Question").clicked() {
                        self.next_question();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Add State").clicked() {
                    self.add_state();
                }
                if ui.button("Delete State").clicked() {
                    self.delete_selected();
                }
                if ui.button("Toggle Initial").clicked() {
                    self.toggle_initial();
                }
                if ui.button("Toggle Final").clicked() {
                    self.toggle_final();
                }
                if ui.button("Clear Connections").clicked() {
                    self.clear_connections();
                }
                // The button names the mode it switches to, not the current one.
                let mode_label = match self.mode {
                    Mode::Move => "Draw Mode",
                    Mode::Draw => "Move Mode",
                };
                if ui.button(mode_label).clicked() {
                    self.toggle_mode();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Transitions: {}", self.diagram.transitions.len()));
                    ui.separator();
                    ui.label(format!("States: {}", self.diagram.nodes.len()));
                    ui.separator();
                    ui.label(match self.mode {
                        Mode::Move => "Mode: Move",
                        Mode::Draw => "Mode: Draw",
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            let origin = rect.min;
            self.canvas_center = (rect.center() - origin).to_pos2();

            let pointer_canvas = ctx
                .input(|i| i.pointer.interact_pos())
                .map(|p| (p - origin).to_pos2());

            if let Some(pos) = pointer_canvas {
                let pressed = response.drag_started() || response.clicked();
                if pressed {
                    self.pointer_pressed(pos);
                }
                if response.dragged() {
                    self.pointer_moved(pos);
                }
                if response.drag_stopped() || response.clicked() {
                    self.pointer_released(pos);
                }
            }

            let painter = ui.painter_at(rect);
            draw_background(&painter, rect, self.show_grid, self.grid_spacing);
            draw_transitions(&painter, origin, &self.diagram);
            draw_connect_preview(&painter, origin, &self.diagram, &self.gesture);
            draw_nodes(&painter, origin, &self.diagram, self.selected, &self.gesture);
        });
    }
}
