// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón ancho para una opción de respuesta, resaltado si está seleccionada.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, height: f32, selected: bool) -> bool {
    let text = if selected {
        RichText::new(label).color(Color32::WHITE)
    } else {
        RichText::new(label)
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, height));
    if selected {
        button = button.fill(Color32::from_rgb(59, 130, 246));
    }
    ui.add(button).clicked()
}

/// Caja con título pequeño y valor en negrita (contadores de resultados).
pub fn stat_box(ui: &mut Ui, title: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(title).small().weak());
        ui.label(RichText::new(value).strong());
    });
}

/// Etiqueta con fondo azul para la cabecera de la pregunta.
pub fn badge(ui: &mut Ui, text: String) {
    egui::Frame::default()
        .fill(Color32::from_rgb(59, 130, 246))
        .inner_margin(egui::Margin::symmetric(12, 6))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).strong());
        });
}
