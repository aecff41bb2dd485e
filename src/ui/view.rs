//! What the palette view reads each frame and what it reports back.

use crate::engine::controller::PaletteController;
use crate::engine::palette::PaletteState;
use crate::resources::Layout;

/// Read-only view of the state shared with the palette view's `show` call.
pub struct ViewState<'a> {
    pub layout: &'a Layout,
    pub controller: &'a PaletteController,
    pub label_size: f32,
}

/// Interactions detected during one frame, applied by `App` after drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A slider was released (mouse-up or key-up); carries all three values.
    ChannelReleased(PaletteState),
    LabelClicked,
}
