//! Palette controller: turns slider releases and label clicks into swatch,
//! label and clipboard updates.
//!
//! The two free functions are the toolkit-agnostic handlers; the
//! [`PaletteController`] struct keeps the state the UI renders from and owns
//! the acknowledgement revert.

use std::time::Duration;

use crate::clipboard::ClipboardSink;
use crate::engine::format::clipboard_text_from_label;
use crate::engine::palette::{PaletteState, Rgb};
use crate::engine::revert::{COPIED_ACK_DELAY, RevertHandle, RevertTimer};

/// Shown on the label for [`COPIED_ACK_DELAY`] after a copy.
pub const COPIED_ACK: &str = "¡Copiado!";

/// Placeholder label before the first slider release. Its format differs from
/// [`crate::engine::format::format_display`] and is kept as is.
pub const INITIAL_LABEL: &str = "RGB:(0,0,0)";

/// Result of a channel release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelUpdate {
    pub swatch: Rgb,
    pub label: String,
}

/// Result of a label click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCopy {
    pub clipboard: String,
    pub transient: &'static str,
}

pub fn on_channel_release(state: PaletteState) -> ChannelUpdate {
    ChannelUpdate {
        swatch: state.swatch(),
        label: state.display_text(),
    }
}

pub fn on_label_click(label_text: &str) -> LabelCopy {
    LabelCopy {
        clipboard: clipboard_text_from_label(label_text),
        transient: COPIED_ACK,
    }
}

fn log_update(state: PaletteState) {
    log::info!(
        "Color updated to RGB({}, {}, {})",
        state.red,
        state.green,
        state.blue
    );
}

#[derive(Debug)]
pub struct PaletteController {
    state: PaletteState,
    swatch: Rgb,
    label: String,
    revert: RevertTimer,
    ack: Option<RevertHandle>,
}

impl Default for PaletteController {
    fn default() -> Self {
        Self::new(INITIAL_LABEL)
    }
}

impl PaletteController {
    /// Start at (0, 0, 0) showing `initial_label` until the first release.
    pub fn new(initial_label: impl Into<String>) -> Self {
        let state = PaletteState::default();
        log_update(state);
        Self {
            state,
            swatch: state.swatch(),
            label: initial_label.into(),
            revert: RevertTimer::new(),
            ack: None,
        }
    }

    pub fn state(&self) -> PaletteState {
        self.state
    }

    pub fn swatch(&self) -> Rgb {
        self.swatch
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Commit the slider values read on mouse-up or key-up.
    ///
    /// A pending acknowledgement revert is dropped: the fresh color label
    /// wins over the one captured at click time.
    pub fn channel_released(&mut self, state: PaletteState) {
        let update = on_channel_release(state);
        self.state = state;
        self.swatch = update.swatch;
        self.label = update.label;
        if self.revert.is_pending() {
            log::debug!("Dropping pending label revert.");
            self.revert.clear();
        }
        self.ack = None;
        log_update(state);
    }

    /// Copy the current color to the clipboard and show the acknowledgement.
    ///
    /// Clicking again while the acknowledgement is showing copies the same
    /// color and restarts the revert delay.
    pub fn label_clicked(&mut self, now: f64, clipboard: &mut dyn ClipboardSink) -> RevertHandle {
        let color_label = self
            .revert
            .restore_text()
            .map(str::to_owned)
            .unwrap_or_else(|| self.label.clone());
        let copy = on_label_click(&color_label);

        match clipboard.set_text(&copy.clipboard) {
            Ok(()) => log::info!("Copied to clipboard: {color_label}"),
            Err(e) => log::warn!("Copy of {color_label} failed: {e}"),
        }

        if let Some(previous) = self.ack.take()
            && self.revert.cancel(previous)
        {
            log::debug!("Restarting label revert.");
        }
        self.label = copy.transient.to_owned();
        let handle = self.revert.schedule(now, COPIED_ACK_DELAY, color_label);
        self.ack = Some(handle);
        handle
    }

    /// Advance to `now`, restoring the label if the revert is due.
    pub fn tick(&mut self, now: f64) {
        if let Some(restore) = self.revert.poll(now) {
            self.label = restore;
        }
    }

    /// Cancel a scheduled revert; the acknowledgement then stays until the
    /// next slider release. The UI never cancels.
    #[cfg(test)]
    pub fn cancel_revert(&mut self, handle: RevertHandle) -> bool {
        self.revert.cancel(handle)
    }

    pub fn time_until_revert(&self, now: f64) -> Option<Duration> {
        self.revert.remaining(now)
    }
}
