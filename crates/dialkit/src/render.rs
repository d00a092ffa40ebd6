use crate::angles::{HandAngles, compute_angles};
use crate::dial::{Numeral, TickMark, generate_numerals, generate_tick_marks};
use crate::format::{ChronoFormatter, LocaleFormatter, capitalize_first};
use crate::settings::Settings;
use crate::style::{Color, DialColors, SECOND_HAND_COLOR, Theme, dial_colors, resolve_hand_color};
use crate::time::TimeSnapshot;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub angles: HandAngles,
    pub ticks: Vec<TickMark>,
    pub numerals: Vec<Numeral>,
    pub hand_color: Color,
    pub second_hand_color: Color,
    pub colors: DialColors,
    pub theme: Theme,
    pub settings: Settings,
    pub time_text: String,
    pub date_text: String,
}

pub struct ClockRenderModel<F = ChronoFormatter> {
    formatter: F,
}

impl<F: LocaleFormatter> ClockRenderModel<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn set_formatter(&mut self, formatter: F) {
        self.formatter = formatter;
    }

    /// Builds a complete frame. Nothing is carried over from earlier frames.
    pub fn render(&self, time: &TimeSnapshot, settings: &Settings) -> RenderSnapshot {
        RenderSnapshot {
            angles: compute_angles(time),
            ticks: generate_tick_marks(settings.theme),
            numerals: generate_numerals(settings.dial_style),
            hand_color: resolve_hand_color(settings.hand_palette, settings.theme),
            second_hand_color: SECOND_HAND_COLOR,
            colors: dial_colors(settings.theme),
            theme: settings.theme,
            settings: *settings,
            time_text: self.formatter.time_of_day(time),
            date_text: capitalize_first(&self.formatter.long_date(time)),
        }
    }
}

impl Default for ClockRenderModel {
    fn default() -> Self {
        Self::new(ChronoFormatter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DialStyle, HandPalette};
    use crate::time::snapshot_at;
    use strum::IntoEnumIterator;

    struct FixedFormatter;

    impl LocaleFormatter for FixedFormatter {
        fn time_of_day(&self, snapshot: &TimeSnapshot) -> String {
            format!("{}h", snapshot.hour)
        }

        fn long_date(&self, _snapshot: &TimeSnapshot) -> String {
            "monday, 19 october".to_string()
        }
    }

    fn settings(theme: Theme, dial_style: DialStyle, hand_palette: HandPalette) -> Settings {
        Settings {
            theme,
            dial_style,
            hand_palette,
            show_settings: false,
        }
    }

    #[test]
    fn test_frame_combines_all_parts() {
        let model = ClockRenderModel::new(FixedFormatter);
        let frame = model.render(
            &snapshot_at(6, 30, 0),
            &settings(Theme::Dark, DialStyle::Roman, HandPalette::Ocean),
        );

        assert_eq!(frame.angles.hour, 195.0);
        assert_eq!(frame.angles.minute, 180.0);
        assert_eq!(frame.ticks.len(), 60);
        assert_eq!(frame.numerals[0].glyph, "XII");
        assert_eq!(frame.hand_color, HandPalette::Ocean.colors().1);
        assert_eq!(frame.theme, Theme::Dark);
        assert_eq!(frame.time_text, "6h");
        assert_eq!(frame.date_text, "Monday, 19 october");
    }

    #[test]
    fn test_minimal_never_has_numerals() {
        let model = ClockRenderModel::new(FixedFormatter);
        for theme in Theme::iter() {
            for palette in HandPalette::iter() {
                let frame = model.render(
                    &snapshot_at(9, 41, 7),
                    &settings(theme, DialStyle::Minimal, palette),
                );
                assert!(frame.numerals.is_empty());
            }
        }
    }

    #[test]
    fn test_second_hand_ignores_palette_and_theme() {
        let model = ClockRenderModel::new(FixedFormatter);
        for theme in Theme::iter() {
            for palette in HandPalette::iter() {
                let frame = model.render(
                    &snapshot_at(1, 2, 3),
                    &settings(theme, DialStyle::Arabic, palette),
                );
                assert_eq!(frame.second_hand_color, SECOND_HAND_COLOR);
                assert_eq!(frame.hand_color, resolve_hand_color(palette, theme));
            }
        }
    }

    #[test]
    fn test_rendering_is_reproducible() {
        let model = ClockRenderModel::new(FixedFormatter);
        let time = snapshot_at(14, 15, 16);
        let settings = settings(Theme::Light, DialStyle::Arabic, HandPalette::Gold);

        assert_eq!(model.render(&time, &settings), model.render(&time, &settings));
    }
}
