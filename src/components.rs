pub mod map;
pub mod markers;
pub mod state_modal;
pub mod ui;

pub use map::UsMap;
pub use state_modal::StateModal;
pub use ui::*;
