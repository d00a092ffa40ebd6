use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

pub const SCREEN_MARGIN: i32 = 24;

/// Pins the widget to the top-right corner of the desktop, below normal windows.
pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Bottom);
    window.set_namespace(Some("clockface"));
    for edge in [Edge::Top, Edge::Right] {
        window.set_anchor(edge, true);
        window.set_margin(edge, SCREEN_MARGIN);
    }
    window.set_keyboard_mode(KeyboardMode::None);
}

/// Layer shell needs a Wayland compositor that implements it; elsewhere the
/// widget falls back to an ordinary undecorated window.
pub fn init_window(window: &gtk::ApplicationWindow) {
    if gtk4_layer_shell::is_supported() {
        init_layer_shell(window);
    } else {
        log::warn!("Layer shell unavailable, using a regular window");
        window.set_decorated(false);
    }
}
