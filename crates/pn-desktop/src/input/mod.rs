//! Input routing and the window drag state machine

mod router;

pub use router::{DragState, InputResult, InputRouter};
