#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{render_points_to_png, PointStyle, RenderConfig};
