//! Palette state: the three committed channel values and the swatch color
//! derived from them.

use super::format::{format_clipboard, format_display};

/// One of the three color channels driven by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Position in `Channel::ALL`.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Opaque sRGB color used for the swatch fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }
}

/// Red, green and blue channel values.
///
/// The `u8` fields make out-of-range channels unrepresentable, so nothing
/// downstream ever formats a value outside `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PaletteState {
    #[cfg(test)]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn swatch(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    pub fn display_text(&self) -> String {
        format_display(self.red, self.green, self.blue)
    }

    pub fn clipboard_text(&self) -> String {
        format_clipboard(self.red, self.green, self.blue)
    }
}
