//! Geometry of the dial in a resolution-independent 100x100 view box.
//!
//! Everything here is expressed before rotation: a tick or hand is a vertical
//! segment above the center, and the renderer rotates it about [`CENTER`] by
//! its angle. Scaling to device pixels is up to the renderer.

use crate::style::{Color, DialStyle, Theme};
use palette::Srgb;

pub const VIEW_BOX: f64 = 100.0;
pub const CENTER: Point = Point::new(50.0, 50.0);
pub const FACE_RADIUS: f64 = 48.0;
pub const CENTER_DOT_RADIUS: f64 = 2.0;

pub const TICK_COUNT: usize = 60;
pub const TICKS_PER_HOUR: usize = 5;
pub const TICK_ANGLE_STEP: f64 = 360.0 / TICK_COUNT as f64;
pub const TICK_START_Y: f64 = 2.0; // flush with the rim
pub const MAJOR_TICK_LENGTH: f64 = 8.0;
pub const MINOR_TICK_LENGTH: f64 = 4.0;
pub const MAJOR_TICK_WIDTH: f64 = 2.0;
pub const MINOR_TICK_WIDTH: f64 = 0.5;

pub const NUMERAL_RADIUS: f64 = 32.0;
pub const NUMERAL_FONT_SIZE: f64 = 7.0;
/// Arabic digits sit visually high when centered on their middle; roman glyphs do not.
pub const ARABIC_BASELINE_OFFSET: f64 = 0.5;

pub const HOUR_HAND: HandShape = HandShape::new(50.0, 28.0, 3.0);
pub const MINUTE_HAND: HandShape = HandShape::new(50.0, 18.0, 2.0);
pub const SECOND_HAND: HandShape = HandShape::new(60.0, 10.0, 0.8);
pub const SECOND_COUNTERWEIGHT_RADIUS: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self`, where 0° is straight up and angles grow clockwise.
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let radians = (degrees - 90.0).to_radians();
        Self::new(
            self.x + radius * radians.cos(),
            self.y + radius * radians.sin(),
        )
    }
}

/// A hand drawn as a vertical segment from `tail_y` to `tip_y` at `x = 50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandShape {
    pub tail_y: f64,
    pub tip_y: f64,
    pub width: f64,
}

impl HandShape {
    pub const fn new(tail_y: f64, tip_y: f64, width: f64) -> Self {
        Self {
            tail_y,
            tip_y,
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub angle: f64,
    pub is_major: bool,
    pub length: f64,
    pub width: f64,
    pub color: Color,
}

impl TickMark {
    /// Unrotated segment endpoints; y grows toward the center.
    pub fn segment(&self) -> (Point, Point) {
        (
            Point::new(CENTER.x, TICK_START_Y),
            Point::new(CENTER.x, TICK_START_Y + self.length),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
}

impl FontFamily {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub glyph: &'static str,
    pub angle: f64,
    /// Anchor of the glyph's middle, already including any baseline offset.
    pub position: Point,
    pub font: FontFamily,
}

fn tick_color(is_major: bool, theme: Theme) -> Color {
    match (theme, is_major) {
        (Theme::Light, true) => Srgb::new(0x47, 0x55, 0x69),
        (Theme::Light, false) => Srgb::new(0xcb, 0xd5, 0xe1),
        (Theme::Dark, true) => Srgb::new(0x94, 0xa3, 0xb8),
        (Theme::Dark, false) => Srgb::new(0x47, 0x55, 0x69),
    }
}

pub fn generate_tick_marks(theme: Theme) -> Vec<TickMark> {
    (0..TICK_COUNT)
        .map(|index| {
            let is_major = index % TICKS_PER_HOUR == 0;
            let (length, width) = if is_major {
                (MAJOR_TICK_LENGTH, MAJOR_TICK_WIDTH)
            } else {
                (MINOR_TICK_LENGTH, MINOR_TICK_WIDTH)
            };
            TickMark {
                index,
                angle: index as f64 * TICK_ANGLE_STEP,
                is_major,
                length,
                width,
                color: tick_color(is_major, theme),
            }
        })
        .collect()
}

const QUARTER_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
const ARABIC_GLYPHS: [&str; 4] = ["12", "3", "6", "9"];
const ROMAN_GLYPHS: [&str; 4] = ["XII", "III", "VI", "IX"];

/// Quarter-hour numerals for `style`; empty for [`DialStyle::Minimal`].
pub fn generate_numerals(style: DialStyle) -> Vec<Numeral> {
    let (glyphs, font, baseline_offset) = match style {
        DialStyle::Minimal => return Vec::new(),
        DialStyle::Arabic => (ARABIC_GLYPHS, FontFamily::SansSerif, ARABIC_BASELINE_OFFSET),
        DialStyle::Roman => (ROMAN_GLYPHS, FontFamily::Serif, 0.0),
    };

    glyphs
        .into_iter()
        .zip(QUARTER_ANGLES)
        .map(|(glyph, angle)| {
            let anchor = CENTER.polar(NUMERAL_RADIUS, angle);
            Numeral {
                glyph,
                angle,
                position: Point::new(anchor.x, anchor.y + baseline_offset),
                font,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::to_hex;
    use strum::IntoEnumIterator;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn test_sixty_ticks_with_twelve_majors() {
        for theme in Theme::iter() {
            let ticks = generate_tick_marks(theme);
            assert_eq!(ticks.len(), 60);

            let majors: Vec<usize> = ticks
                .iter()
                .filter(|t| t.is_major)
                .map(|t| t.index)
                .collect();
            assert_eq!(majors, (0..60).step_by(5).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_tick_angles_and_sizes() {
        let ticks = generate_tick_marks(Theme::Light);
        assert_eq!(ticks[0].angle, 0.0);
        assert_eq!(ticks[15].angle, 90.0);
        assert_eq!(ticks[59].angle, 354.0);

        assert!(ticks[0].length > ticks[1].length);
        assert!(ticks[0].width > ticks[1].width);
        let (start, end) = ticks[0].segment();
        assert_point(start, 50.0, 2.0);
        assert_point(end, 50.0, 10.0);
    }

    #[test]
    fn test_tick_colors_by_theme() {
        let light = generate_tick_marks(Theme::Light);
        let dark = generate_tick_marks(Theme::Dark);

        assert_eq!(to_hex(light[0].color), "#475569");
        assert_eq!(to_hex(light[1].color), "#cbd5e1");
        assert_eq!(to_hex(dark[0].color), "#94a3b8");
        assert_eq!(to_hex(dark[1].color), "#475569");
    }

    #[test]
    fn test_minimal_has_no_numerals() {
        assert!(generate_numerals(DialStyle::Minimal).is_empty());
    }

    #[test]
    fn test_arabic_numerals() {
        let numerals = generate_numerals(DialStyle::Arabic);
        let glyphs: Vec<_> = numerals.iter().map(|n| n.glyph).collect();
        assert_eq!(glyphs, ["12", "3", "6", "9"]);

        assert_point(numerals[0].position, 50.0, 18.5);
        assert_point(numerals[1].position, 82.0, 50.5);
        assert_point(numerals[2].position, 50.0, 82.5);
        assert_point(numerals[3].position, 18.0, 50.5);
        assert!(numerals.iter().all(|n| n.font == FontFamily::SansSerif));
    }

    #[test]
    fn test_roman_numerals_skip_baseline_offset() {
        let numerals = generate_numerals(DialStyle::Roman);
        let glyphs: Vec<_> = numerals.iter().map(|n| n.glyph).collect();
        assert_eq!(glyphs, ["XII", "III", "VI", "IX"]);

        assert_point(numerals[0].position, 50.0, 18.0);
        assert_point(numerals[1].position, 82.0, 50.0);
        assert!(numerals.iter().all(|n| n.font == FontFamily::Serif));
    }

    #[test]
    fn test_polar_points_clockwise_from_top() {
        assert_point(CENTER.polar(10.0, 0.0), 50.0, 40.0);
        assert_point(CENTER.polar(10.0, 90.0), 60.0, 50.0);
    }
}
