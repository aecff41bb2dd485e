//! Palette view: the three channel sliders, the swatch and the copy label.

use eframe::egui::{self, CursorIcon, RichText, Sense, Stroke};

use crate::engine::palette::PaletteState;
use crate::ui::colors::{SWATCH_FRAME, channel_color};
use crate::ui::view::{ViewEvent, ViewState};

/// Owns the live slider positions. These only reach the controller when a
/// slider is released, never while it is being dragged.
#[derive(Default)]
pub struct PaletteView {
    sliders: PaletteState,
    #[cfg(test)]
    slider_hits: Vec<(crate::engine::palette::Channel, egui::Id, egui::Rect)>,
}

impl PaletteView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &ViewState<'_>) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        #[cfg(test)]
        self.slider_hits.clear();

        ui.vertical_centered(|ui| {
            for spec in &state.layout.sliders {
                let mut value = self.sliders.get(spec.channel);
                let response = ui.add(
                    egui::Slider::new(&mut value, 0..=u8::MAX)
                        .text(RichText::new(&spec.caption).color(channel_color(spec.channel))),
                );
                self.sliders.set(spec.channel, value);
                #[cfg(test)]
                self.slider_hits
                    .push((spec.channel, response.id, response.rect));

                if was_released(ui, &response) {
                    events.push(ViewEvent::ChannelReleased(self.sliders));
                }
            }

            ui.add_space(12.0);

            let swatch = &state.layout.swatch;
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(swatch.width, swatch.height), Sense::hover());
            ui.painter().rect(
                rect,
                6.0,
                egui::Color32::from(state.controller.swatch()),
                Stroke::new(1.0, SWATCH_FRAME),
                egui::StrokeKind::Inside,
            );

            ui.add_space(12.0);

            let label = ui
                .add(
                    egui::Label::new(
                        RichText::new(state.controller.label()).size(state.label_size),
                    )
                    .sense(Sense::click()),
                )
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text(format!(
                    "Click to copy {}",
                    state.controller.state().clipboard_text()
                ));
            if label.clicked() {
                events.push(ViewEvent::LabelClicked);
            }
        });

        events
    }
}

/// Mouse-up after a drag or click, or a key-up while the slider has focus.
fn was_released(ui: &egui::Ui, response: &egui::Response) -> bool {
    if response.drag_stopped() || response.clicked() {
        return true;
    }
    response.has_focus()
        && ui.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: false, .. }))
        })
}
