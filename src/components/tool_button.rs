use eframe::egui;

/// Square icon button used in the tools panel.
pub struct ToolButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, tooltip: &'static str) -> Self {
        Self {
            icon,
            tooltip,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(40.0, 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(60)
            } else {
                egui::Color32::from_gray(40)
            };

            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(22.0),
                text_color,
            );
        }

        response.on_hover_text(self.tooltip)
    }
}
