pub mod view;

pub use view::draw;

pub const DIAL_SIZE: i32 = 260; // logical pixels
pub const FACE_RIM_WIDTH: f64 = 0.5; // view box units
