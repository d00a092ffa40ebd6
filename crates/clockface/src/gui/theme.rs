use dialkit::style::{HandPalette, Theme, to_hex};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use std::fmt::Write;
use strum::IntoEnumIterator;

const BASE_CSS: &str = "
.clockface-window {
    background: none;
    background-color: transparent;
}

.clock-card {
    border-radius: 24px;
    padding: 20px;
}

.light-theme .clock-card {
    background-color: #ffffff;
    color: #1e293b;
}

.dark-theme .clock-card {
    background-color: #0f172a;
    color: #e2e8f0;
}

.title {
    font-weight: bold;
    font-size: 18px;
}

.control-btn, .theme-toggle {
    border-radius: 9999px;
    min-width: 32px;
    min-height: 32px;
}

.light-theme .control-btn.active {
    background-color: #e2e8f0;
}

.dark-theme .control-btn.active {
    background-color: #334155;
}

.settings-panel {
    border-radius: 12px;
    padding: 10px;
}

.light-theme .settings-panel {
    background-color: #f1f5f9;
}

.dark-theme .settings-panel {
    background-color: #1e293b;
}

.style-btn.selected {
    font-weight: bold;
}

.light-theme .style-btn.selected {
    background-color: #cbd5e1;
}

.dark-theme .style-btn.selected {
    background-color: #475569;
}

.color-btn {
    min-width: 24px;
    min-height: 24px;
    padding: 0;
    border-radius: 9999px;
    border: 2px solid transparent;
}

.color-btn.selected {
    border-color: #94a3b8;
}

.digital-time {
    font-size: 32px;
    font-weight: bold;
    font-feature-settings: \"tnum\";
}

.date-display {
    opacity: 0.7;
}
";

/// Swatch colors depend on the theme for palettes like `classic`, so every
/// (theme, palette) pair gets its own rule.
fn swatch_css() -> String {
    let mut css = String::new();
    for theme in Theme::iter() {
        for palette in HandPalette::iter() {
            let _ = writeln!(
                css,
                ".{} .swatch-{} {{ background: {}; }}",
                theme.css_class(),
                palette,
                to_hex(palette.swatch(theme))
            );
        }
    }
    css
}

pub fn stylesheet() -> String {
    format!("{BASE_CSS}\n{}", swatch_css())
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(&stylesheet());

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Leaves exactly one theme class on `widget`.
pub fn apply_theme(widget: &impl IsA<gtk::Widget>, theme: Theme) {
    for other in Theme::iter().filter(|t| *t != theme) {
        widget.remove_css_class(other.css_class());
    }
    widget.add_css_class(theme.css_class());
}

/// Icon for the theme toggle: a moon offers the dark theme, a sun the light one.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "weather-clear-night-symbolic",
        Theme::Dark => "weather-clear-symbolic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_rules_cover_every_pair() {
        let css = swatch_css();
        assert_eq!(css.lines().count(), 6);
        assert!(css.contains(".light-theme .swatch-classic { background: #1e293b; }"));
        assert!(css.contains(".dark-theme .swatch-classic { background: #e2e8f0; }"));
        assert!(css.contains(".dark-theme .swatch-ocean { background: #0ea5e9; }"));
    }

    #[test]
    fn test_stylesheet_keeps_base_rules() {
        let css = stylesheet();
        assert!(css.contains(".clockface-window"));
        assert!(css.contains(".light-theme .swatch-gold"));
    }
}
