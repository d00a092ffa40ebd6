use palette::Srgb;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// An opaque 8-bit sRGB color.
pub type Color = Srgb<u8>;

/// The second hand is always drawn in this accent, whatever the palette or theme.
pub const SECOND_HAND_COLOR: Color = Srgb::new(0xef, 0x44, 0x44);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DialStyle {
    #[default]
    #[strum(to_string = "arabic", serialize = "12")]
    Arabic,
    #[strum(to_string = "roman", serialize = "xii")]
    Roman,
    #[strum(to_string = "minimal", serialize = "empty", serialize = "none")]
    Minimal,
}

impl DialStyle {
    /// Caption shown on the style picker button.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Arabic => "12",
            Self::Roman => "XII",
            Self::Minimal => "Empty",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HandPalette {
    #[default]
    Classic,
    Ocean,
    Gold,
}

impl HandPalette {
    /// `(light, dark)` hour and minute hand colors.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Self::Classic => (Srgb::new(0x1e, 0x29, 0x3b), Srgb::new(0xe2, 0xe8, 0xf0)),
            Self::Ocean => (Srgb::new(0x02, 0x84, 0xc7), Srgb::new(0x38, 0xbd, 0xf8)),
            Self::Gold => (Srgb::new(0xca, 0x8a, 0x04), Srgb::new(0xfa, 0xcc, 0x15)),
        }
    }

    /// Color of the palette's button in the settings panel.
    pub fn swatch(self, theme: Theme) -> Color {
        match self {
            Self::Classic => resolve_hand_color(self, theme),
            Self::Ocean => Srgb::new(0x0e, 0xa5, 0xe9),
            Self::Gold => Srgb::new(0xea, 0xb3, 0x08),
        }
    }
}

/// Hour and minute hand color for the active palette and theme.
pub fn resolve_hand_color(palette: HandPalette, theme: Theme) -> Color {
    let (light, dark) = palette.colors();
    match theme {
        Theme::Light => light,
        Theme::Dark => dark,
    }
}

/// Theme-dependent colors of the dial body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialColors {
    pub face: Color,
    pub face_rim: Color,
    pub numeral: Color,
    pub center_dot: Color,
}

pub fn dial_colors(theme: Theme) -> DialColors {
    match theme {
        Theme::Light => DialColors {
            face: Srgb::new(0xff, 0xff, 0xff),
            face_rim: Srgb::new(0xe2, 0xe8, 0xf0),
            numeral: Srgb::new(0x33, 0x41, 0x55),
            center_dot: Srgb::new(0x1e, 0x29, 0x3b),
        },
        Theme::Dark => DialColors {
            face: Srgb::new(0x1e, 0x29, 0x3b),
            face_rim: Srgb::new(0x33, 0x41, 0x55),
            numeral: Srgb::new(0xe2, 0xe8, 0xf0),
            center_dot: Srgb::new(0xe2, 0xe8, 0xf0),
        },
    }
}

/// `#rrggbb` notation, as used by CSS and SVG.
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
