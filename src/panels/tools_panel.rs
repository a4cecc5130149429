use crate::SketchSolveApp;
use crate::components::ToolButton;
use crate::config::BASE_WIDTH_RANGE;
use crate::tools::ToolMode;
use egui::Color32;

const PALETTE: [Color32; 5] = [
    Color32::BLACK,
    Color32::from_rgb(25, 60, 160),
    Color32::from_rgb(170, 30, 30),
    Color32::from_rgb(20, 120, 50),
    Color32::from_rgb(110, 50, 150),
];

pub fn tools_panel(app: &mut SketchSolveApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(64.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let mode = app.tool_mode();

                if ToolButton::new("✏", "Pen")
                    .selected(mode == ToolMode::Pen)
                    .show(ui)
                    .clicked()
                {
                    app.select_tool(ToolMode::Pen);
                }
                if ToolButton::new("⌫", "Eraser")
                    .selected(mode == ToolMode::Eraser)
                    .show(ui)
                    .clicked()
                {
                    app.select_tool(ToolMode::Eraser);
                }
                if ToolButton::new("🗑", "Clear").show(ui).clicked() {
                    app.clear();
                }
                if ToolButton::new("=", "Solve").show(ui).clicked() {
                    app.solve();
                }

                ui.separator();

                let mut width = app.base_width();
                if ui
                    .add(
                        egui::Slider::new(&mut width, BASE_WIDTH_RANGE)
                            .vertical()
                            .show_value(false),
                    )
                    .on_hover_text("Brush size")
                    .changed()
                {
                    app.set_base_width(width);
                }

                ui.separator();

                let ink = app.ink();
                for color in PALETTE {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());
                    ui.painter().circle_filled(rect.center(), 10.0, color);
                    if color == ink {
                        ui.painter().circle_stroke(
                            rect.center(),
                            11.5,
                            egui::Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                        );
                    }
                    if response.clicked() {
                        app.set_ink(color);
                    }
                }
            });
        });
}
