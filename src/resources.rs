//! Startup resources: the window layout and the stylesheet.
//!
//! Both are JSON files loaded by path. Any failure here is fatal; there is no
//! built-in fallback layout or theme.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use eframe::egui::{self, Color32};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::engine::palette::Channel;
use crate::error::{AppError, Result};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// ── Layout ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SliderSpec {
    pub channel: Channel,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwatchSpec {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelSpec {
    pub initial_text: String,
}

/// Widget tree of the main window: three sliders, a swatch and a label.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub title: String,
    pub initial_size: [f32; 2],
    pub min_size: [f32; 2],
    pub max_size: [f32; 2],
    pub sliders: Vec<SliderSpec>,
    pub swatch: SwatchSpec,
    pub label: LabelSpec,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self> {
        let layout: Layout = read_json(path)?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for slider in &self.sliders {
            if !seen.insert(slider.channel) {
                return Err(AppError::InvalidLayout(format!(
                    "duplicate slider for channel {}",
                    slider.channel.name()
                )));
            }
        }
        if let Some(missing) = Channel::ALL.iter().find(|c| !seen.contains(*c)) {
            return Err(AppError::InvalidLayout(format!(
                "missing slider for channel {}",
                missing.name()
            )));
        }

        let [min_w, min_h] = self.min_size;
        let [max_w, max_h] = self.max_size;
        if min_w > max_w || min_h > max_h {
            return Err(AppError::InvalidLayout(format!(
                "min_size {min_w}x{min_h} exceeds max_size {max_w}x{max_h}"
            )));
        }
        if self.swatch.width <= 0.0 || self.swatch.height <= 0.0 {
            return Err(AppError::InvalidLayout("swatch must have a positive size".into()));
        }
        Ok(())
    }

    /// Initial size clamped into the min/max bounds.
    pub fn clamped_initial_size(&self) -> egui::Vec2 {
        egui::vec2(
            self.initial_size[0].clamp(self.min_size[0], self.max_size[0]),
            self.initial_size[1].clamp(self.min_size[1], self.max_size[1]),
        )
    }
}

// ── Stylesheet ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawStylesheet {
    dark_mode: bool,
    background: String,
    text_color: String,
    label_size: f32,
    spacing: f32,
    #[serde(default)]
    slider_width: Option<f32>,
}

/// Cosmetic settings applied to the whole egui context.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub dark_mode: bool,
    pub background: Color32,
    pub text_color: Color32,
    pub label_size: f32,
    pub spacing: f32,
    pub slider_width: Option<f32>,
}

fn parse_color(field: &str, value: &str) -> Result<Color32> {
    Color32::from_hex(value)
        .map_err(|e| AppError::InvalidStylesheet(format!("{field} = {value:?}: {e:?}")))
}

impl Stylesheet {
    pub fn load(path: &Path) -> Result<Self> {
        let raw: RawStylesheet = read_json(path)?;
        if raw.label_size <= 0.0 {
            return Err(AppError::InvalidStylesheet(
                "label_size must be positive".into(),
            ));
        }
        Ok(Self {
            dark_mode: raw.dark_mode,
            background: parse_color("background", &raw.background)?,
            text_color: parse_color("text_color", &raw.text_color)?,
            label_size: raw.label_size,
            spacing: raw.spacing.max(0.0),
            slider_width: raw.slider_width,
        })
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        let mut visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.override_text_color = Some(self.text_color);
        ctx.set_visuals(visuals);

        let spacing = self.spacing;
        let slider_width = self.slider_width;
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(spacing, spacing);
            if let Some(width) = slider_width {
                style.spacing.slider_width = width;
            }
        });
    }
}
