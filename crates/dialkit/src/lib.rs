pub mod angles;
pub mod dial;
pub mod format;
pub mod ipc;
pub mod macros;
pub mod render;
pub mod settings;
pub mod style;
pub mod svg;
pub mod ticker;
pub mod time;
