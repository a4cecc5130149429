use crate::SketchSolveApp;
use crate::display::{DisplayBlock, present};
use egui::RichText;

pub fn solution_panel(app: &SketchSolveApp, ctx: &egui::Context) {
    egui::SidePanel::right("solution_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Solution");
            ui.separator();

            for block in present(app.solve_result()) {
                show_block(ui, &block);
            }
        });
}

fn show_block(ui: &mut egui::Ui, block: &DisplayBlock) {
    match block {
        DisplayBlock::Hint(text) => {
            ui.label(RichText::new(text).weak());
        }
        DisplayBlock::Loading(text) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(text);
            });
        }
        DisplayBlock::Expression(expression) => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(expression).monospace().size(16.0));
            });
            ui.add_space(6.0);
        }
        DisplayBlock::Label(label) => {
            ui.label(RichText::new(label).strong().size(18.0));
        }
        DisplayBlock::Answer(lines) => {
            for line in lines {
                ui.label(RichText::new(line).size(16.0));
            }
        }
        DisplayBlock::Note(note) => {
            ui.add_space(6.0);
            ui.label(RichText::new(note).small().italics());
        }
    }
}
