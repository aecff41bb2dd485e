//! Application orchestrator: owns the controller and wires view events to it.

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::engine::controller::PaletteController;
use crate::resources::{Layout, Stylesheet};
use crate::ui::palette_view::PaletteView;
use crate::ui::view::{ViewEvent, ViewState};
use eframe::egui;

/// The top-level application, implementing [`eframe::App`].
///
/// Each frame `App`:
/// 1. Advances the controller clock so a due label revert fires.
/// 2. Draws the palette view and collects its events.
/// 3. Applies the events to the controller.
/// 4. Schedules a repaint for the pending revert, if any.
pub struct App {
    layout: Layout,
    label_size: f32,
    controller: PaletteController,
    view: PaletteView,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(layout: Layout, stylesheet: &Stylesheet) -> Self {
        Self::with_clipboard(layout, stylesheet, Box::new(SystemClipboard::new()))
    }

    fn with_clipboard(
        layout: Layout,
        stylesheet: &Stylesheet,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let controller = PaletteController::new(layout.label.initial_text.clone());
        Self {
            layout,
            label_size: stylesheet.label_size,
            controller,
            view: PaletteView::default(),
            clipboard,
        }
    }

    fn apply(&mut self, now: f64, event: ViewEvent) {
        match event {
            ViewEvent::ChannelReleased(state) => self.controller.channel_released(state),
            ViewEvent::LabelClicked => {
                self.controller.label_clicked(now, self.clipboard.as_mut());
            }
        }
    }

    fn frame(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.controller.tick(now);

        let events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let state = ViewState {
                    layout: &self.layout,
                    controller: &self.controller,
                    label_size: self.label_size,
                };
                self.view.show(ui, &state)
            })
            .inner;

        for event in events {
            self.apply(now, event);
        }

        if let Some(remaining) = self.controller.time_until_revert(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::engine::controller::{COPIED_ACK, INITIAL_LABEL};
    use crate::engine::palette::{PaletteState, Rgb};

    fn app() -> App {
        let layout: Layout = serde_json::from_str(include_str!("../../assets/layout.json")).unwrap();
        let stylesheet = Stylesheet {
            dark_mode: false,
            background: egui::Color32::WHITE,
            text_color: egui::Color32::BLACK,
            label_size: 18.0,
            spacing: 8.0,
            slider_width: None,
        };
        App::with_clipboard(layout, &stylesheet, Box::new(RecordingClipboard::default()))
    }

    fn run_frame(app: &mut App, ctx: &egui::Context, time: f64) {
        let input = egui::RawInput {
            time: Some(time),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.frame(ctx));
    }

    #[test]
    fn idle_frame_keeps_initial_label() {
        let mut app = app();
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx, 0.0);
        assert_eq!(app.controller.label(), INITIAL_LABEL);
        assert_eq!(app.controller.swatch(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn events_drive_controller_and_frames_revert() {
        let mut app = app();
        let ctx = egui::Context::default();

        app.apply(0.0, ViewEvent::ChannelReleased(PaletteState::new(10, 20, 30)));
        assert_eq!(app.controller.label(), "RGB(10, 20, 30)");

        app.apply(1.0, ViewEvent::LabelClicked);
        assert_eq!(app.controller.label(), COPIED_ACK);

        run_frame(&mut app, &ctx, 2.0);
        assert_eq!(app.controller.label(), COPIED_ACK);
        run_frame(&mut app, &ctx, 2.6);
        assert_eq!(app.controller.label(), "RGB(10, 20, 30)");
    }
}
