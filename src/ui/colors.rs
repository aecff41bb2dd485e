//! Static accent colors for the channel sliders and the swatch frame.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::engine::palette::Channel;

pub static CHANNEL_COLORS: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        Color32::from_rgb(200, 40, 40),
        Color32::from_rgb(40, 150, 60),
        Color32::from_rgb(40, 80, 200),
    ]
});

pub const SWATCH_FRAME: Color32 = Color32::from_gray(90);

pub fn channel_color(channel: Channel) -> Color32 {
    CHANNEL_COLORS[channel.index()]
}
