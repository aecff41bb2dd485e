//! Application shell: loads the startup resources and runs the native window.

use eframe::egui;

use crate::config::ShellConfig;
use crate::error::Result;
use crate::resources::{Layout, Stylesheet};
use crate::ui::app::App;

/// Load the layout and stylesheet, then show the main window until it closes.
///
/// Resource failures are returned before any window is created.
pub fn run(config: &ShellConfig) -> Result<()> {
    log::debug!("Looking for layout at {}...", config.layout_path.display());
    let layout = Layout::load(&config.layout_path)?;
    log::debug!("Layout loaded.");

    log::debug!(
        "Looking for stylesheet at {}...",
        config.stylesheet_path.display()
    );
    let stylesheet = Stylesheet::load(&config.stylesheet_path)?;
    log::debug!("Stylesheet loaded.");

    let options = native_options(&layout);
    let title = layout.title.clone();

    log::debug!("Showing main window.");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            stylesheet.apply(&cc.egui_ctx);
            Ok(Box::new(App::new(layout, &stylesheet)))
        }),
    )?;
    Ok(())
}

pub fn native_options(layout: &Layout) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(layout.title.clone())
            .with_inner_size(layout.clamped_initial_size())
            .with_min_inner_size(layout.min_size)
            .with_max_inner_size(layout.max_size),
        ..Default::default()
    }
}
