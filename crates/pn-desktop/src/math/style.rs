//! Window frame geometry shared with the view layer

/// Frame measurements used for hit testing window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Frame style of the Paskanet II window chrome.
///
/// Title bar buttons sit right-aligned, in order minimize, maximize, close.
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 30.0,
    button_size: 24.0,
    button_spacing: 2.0,
    button_margin: 4.0,
};
