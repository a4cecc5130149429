use crate::SketchSolveApp;

pub fn central_panel(app: &mut SketchSolveApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(12.0))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;

            // The panel now has its on-screen size.
            app.ensure_canvas(rect.size());

            app.handle_input(&response);

            if let Some((texture, size)) = app.canvas_texture(ctx) {
                let image_rect = egui::Rect::from_min_size(rect.min, size);
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture, image_rect, uv, egui::Color32::WHITE);
            }

            if app.is_drawing() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
