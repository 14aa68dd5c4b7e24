//! Screen-space geometry for window placement and hit testing
//!
//! All coordinates are viewport pixels with the origin at the top-left
//! corner. There is no camera or zoom: what the store holds is what the
//! view layer paints.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
