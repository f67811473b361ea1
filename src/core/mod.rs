pub mod layout;
pub mod scale;
pub mod types;
pub mod windowing;

pub use layout::{BOTTOM_LABEL_RESERVE, GraphLayout};
pub use scale::{ValueRange, resolve_x, resolve_y};
pub use types::{DataPoint, Viewport};
pub use windowing::visible_window;
