//! Standalone SVG rendering of a frame, using the dial's 100x100 view box.

use crate::dial::{
    CENTER, CENTER_DOT_RADIUS, FACE_RADIUS, HOUR_HAND, HandShape, MINUTE_HAND, NUMERAL_FONT_SIZE,
    SECOND_COUNTERWEIGHT_RADIUS, SECOND_HAND, VIEW_BOX,
};
use crate::render::RenderSnapshot;
use crate::style::{Color, to_hex};
use std::fmt;

/// Displays as a complete SVG document.
pub struct Svg<'a>(pub &'a RenderSnapshot);

pub fn render_svg(frame: &RenderSnapshot) -> String {
    Svg(frame).to_string()
}

/// Compact decimal: at most three fractional digits, no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn rotate(degrees: f64) -> String {
    format!("rotate({} {} {})", num(degrees), num(CENTER.x), num(CENTER.y))
}

fn write_hand(
    f: &mut fmt::Formatter<'_>,
    shape: HandShape,
    color: Color,
    class: &str,
    transform: Option<String>,
) -> fmt::Result {
    write!(
        f,
        r#"  <line class="{class}" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="{w}" stroke-linecap="round""#,
        x = num(CENTER.x),
        y1 = num(shape.tail_y),
        y2 = num(shape.tip_y),
        color = to_hex(color),
        w = num(shape.width),
    )?;
    if let Some(transform) = transform {
        write!(f, r#" transform="{transform}""#)?;
    }
    writeln!(f, "/>")
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0;
        let size = num(VIEW_BOX);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" class="{}">"#,
            frame.theme.css_class()
        )?;
        writeln!(
            f,
            r#"  <circle class="clock-face" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}"/>"#,
            num(CENTER.x),
            num(CENTER.y),
            num(FACE_RADIUS),
            to_hex(frame.colors.face),
            to_hex(frame.colors.face_rim),
        )?;

        for tick in &frame.ticks {
            let (start, end) = tick.segment();
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" transform="{}"/>"#,
                num(start.x),
                num(start.y),
                num(end.x),
                num(end.y),
                to_hex(tick.color),
                num(tick.width),
                rotate(tick.angle),
            )?;
        }

        for numeral in &frame.numerals {
            writeln!(
                f,
                r#"  <text class="clock-number" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                num(numeral.position.x),
                num(numeral.position.y),
                numeral.font.as_css(),
                num(NUMERAL_FONT_SIZE),
                to_hex(frame.colors.numeral),
                numeral.glyph,
            )?;
        }

        write_hand(
            f,
            HOUR_HAND,
            frame.hand_color,
            "hour-hand",
            Some(rotate(frame.angles.hour)),
        )?;
        write_hand(
            f,
            MINUTE_HAND,
            frame.hand_color,
            "minute-hand",
            Some(rotate(frame.angles.minute)),
        )?;

        writeln!(f, r#"  <g class="second-hand" transform="{}">"#, rotate(frame.angles.second))?;
        write!(f, "  ")?;
        write_hand(f, SECOND_HAND, frame.second_hand_color, "second-hand-line", None)?;
        writeln!(
            f,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(CENTER.x),
            num(SECOND_HAND.tail_y),
            num(SECOND_COUNTERWEIGHT_RADIUS),
            to_hex(frame.second_hand_color),
        )?;
        writeln!(f, "  </g>")?;

        writeln!(
            f,
            r#"  <circle class="center-dot" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(CENTER.x),
            num(CENTER.y),
            num(CENTER_DOT_RADIUS),
            to_hex(frame.colors.center_dot),
        )?;
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LocaleFormatter;
    use crate::render::ClockRenderModel;
    use crate::settings::Settings;
    use crate::style::{DialStyle, Theme};
    use crate::time::{TimeSnapshot, snapshot_at};

    struct Blank;

    impl LocaleFormatter for Blank {
        fn time_of_day(&self, _: &TimeSnapshot) -> String {
            String::new()
        }

        fn long_date(&self, _: &TimeSnapshot) -> String {
            String::new()
        }
    }

    fn svg_for(dial_style: DialStyle, theme: Theme) -> String {
        let settings = Settings {
            dial_style,
            theme,
            ..Settings::default()
        };
        render_svg(&ClockRenderModel::new(Blank).render(&snapshot_at(6, 30, 15), &settings))
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(50.0), "50");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(50.000000000000004), "50");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(181.5), "181.5");
    }

    #[test]
    fn test_document_structure() {
        let svg = svg_for(DialStyle::Arabic, Theme::Light);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert_eq!(svg.matches("stroke-linecap=\"round\" transform=\"rotate(").count(), 62);
        assert!(svg.contains(r#"transform="rotate(195 50 50)""#));
        assert!(svg.contains(r#"transform="rotate(181.5 50 50)""#));
        assert!(svg.contains(r#"<g class="second-hand" transform="rotate(90 50 50)">"#));
        assert!(svg.contains("#ef4444"));
    }

    #[test]
    fn test_numeral_glyphs() {
        let arabic = svg_for(DialStyle::Arabic, Theme::Light);
        assert!(arabic.contains(r#"x="50" y="18.5""#));
        assert!(arabic.contains(">12</text>"));

        let roman = svg_for(DialStyle::Roman, Theme::Dark);
        assert!(roman.contains(r#"x="50" y="18""#));
        assert!(roman.contains(">XII</text>"));
        assert!(roman.contains(r#"font-family="serif""#));

        let minimal = svg_for(DialStyle::Minimal, Theme::Dark);
        assert!(!minimal.contains("<text"));
    }
}
