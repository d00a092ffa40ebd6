use crate::style::{DialStyle, HandPalette, Theme};
use serde::{Deserialize, Serialize};

/// User-facing appearance settings. Replaced as a whole on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub dial_style: DialStyle,
    pub hand_palette: HandPalette,
    pub show_settings: bool,
}

impl Settings {
    pub fn with(self, change: SettingsChange) -> Self {
        match change {
            SettingsChange::Theme(theme) => Self { theme, ..self },
            SettingsChange::DialStyle(dial_style) => Self { dial_style, ..self },
            SettingsChange::HandPalette(hand_palette) => Self {
                hand_palette,
                ..self
            },
            SettingsChange::ToggleSettings => Self {
                show_settings: !self.show_settings,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Theme(Theme),
    DialStyle(DialStyle),
    HandPalette(HandPalette),
    ToggleSettings,
}

/// Holds the active [`Settings`]. Every setter returns the new value so the
/// caller can re-render from it.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    pub fn set_theme(&mut self, theme: Theme) -> Settings {
        self.apply(SettingsChange::Theme(theme))
    }

    pub fn set_dial_style(&mut self, style: DialStyle) -> Settings {
        self.apply(SettingsChange::DialStyle(style))
    }

    pub fn set_hand_palette(&mut self, palette: HandPalette) -> Settings {
        self.apply(SettingsChange::HandPalette(palette))
    }

    pub fn toggle_settings_panel(&mut self) -> Settings {
        self.apply(SettingsChange::ToggleSettings)
    }

    pub fn apply(&mut self, change: SettingsChange) -> Settings {
        self.current = self.current.with(change);
        log::debug!("Settings changed ({:?}): {:?}", change, self.current);
        self.current
    }

    pub fn replace(&mut self, settings: Settings) -> Settings {
        self.current = settings;
        self.current
    }
}
