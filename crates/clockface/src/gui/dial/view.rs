use super::FACE_RIM_WIDTH;
use cairo::{Context, FontSlant, FontWeight, LineCap};
use dialkit::dial::{
    CENTER, CENTER_DOT_RADIUS, FACE_RADIUS, FontFamily, HOUR_HAND, HandShape, MINUTE_HAND,
    NUMERAL_FONT_SIZE, Numeral, SECOND_COUNTERWEIGHT_RADIUS, SECOND_HAND, TickMark, VIEW_BOX,
};
use dialkit::render::RenderSnapshot;
use dialkit::style::Color;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Color) {
    let (r, g, b) = color.into_format::<f64>().into_components();
    cr.set_source_rgb(r, g, b);
}

struct DialRenderer<'a> {
    frame: &'a RenderSnapshot,
}

impl<'a> DialRenderer<'a> {
    fn new(frame: &'a RenderSnapshot) -> Self {
        Self { frame }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.draw_face(cr)?;
        for tick in &self.frame.ticks {
            self.draw_tick(cr, tick)?;
        }
        for numeral in &self.frame.numerals {
            self.draw_numeral(cr, numeral)?;
        }
        self.draw_hand(cr, HOUR_HAND, self.frame.angles.hour, self.frame.hand_color)?;
        self.draw_hand(cr, MINUTE_HAND, self.frame.angles.minute, self.frame.hand_color)?;
        self.draw_second_hand(cr)?;
        self.draw_center_dot(cr)
    }

    /// Runs `draw` with the context rotated clockwise about the dial center.
    fn rotated(
        cr: &Context,
        degrees: f64,
        draw: impl FnOnce(&Context) -> Result<(), cairo::Error>,
    ) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.translate(CENTER.x, CENTER.y);
        cr.rotate(degrees.to_radians());
        cr.translate(-CENTER.x, -CENTER.y);
        draw(cr)?;
        cr.restore()
    }

    fn draw_face(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.arc(CENTER.x, CENTER.y, FACE_RADIUS, 0.0, 2.0 * PI);
        set_color(cr, self.frame.colors.face);
        cr.fill_preserve()?;
        set_color(cr, self.frame.colors.face_rim);
        cr.set_line_width(FACE_RIM_WIDTH);
        cr.stroke()
    }

    fn draw_tick(&self, cr: &Context, tick: &TickMark) -> Result<(), cairo::Error> {
        let (start, end) = tick.segment();
        Self::rotated(cr, tick.angle, |cr| {
            set_color(cr, tick.color);
            cr.set_line_width(tick.width);
            cr.set_line_cap(LineCap::Round);
            cr.move_to(start.x, start.y);
            cr.line_to(end.x, end.y);
            cr.stroke()
        })
    }

    fn draw_numeral(&self, cr: &Context, numeral: &Numeral) -> Result<(), cairo::Error> {
        let family = match numeral.font {
            FontFamily::Serif => "Serif",
            FontFamily::SansSerif => "Sans",
        };
        cr.select_font_face(family, FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(NUMERAL_FONT_SIZE);
        set_color(cr, self.frame.colors.numeral);

        // center the ink box on the anchor, like text-anchor/dominant-baseline middle
        let ext = cr.text_extents(numeral.glyph)?;
        cr.move_to(
            numeral.position.x - ext.width() / 2.0 - ext.x_bearing(),
            numeral.position.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(numeral.glyph)
    }

    fn draw_hand(
        &self,
        cr: &Context,
        shape: HandShape,
        degrees: f64,
        color: Color,
    ) -> Result<(), cairo::Error> {
        Self::rotated(cr, degrees, |cr| {
            set_color(cr, color);
            cr.set_line_width(shape.width);
            cr.set_line_cap(LineCap::Round);
            cr.move_to(CENTER.x, shape.tail_y);
            cr.line_to(CENTER.x, shape.tip_y);
            cr.stroke()
        })
    }

    fn draw_second_hand(&self, cr: &Context) -> Result<(), cairo::Error> {
        let color = self.frame.second_hand_color;
        self.draw_hand(cr, SECOND_HAND, self.frame.angles.second, color)?;
        Self::rotated(cr, self.frame.angles.second, |cr| {
            set_color(cr, color);
            cr.arc(
                CENTER.x,
                SECOND_HAND.tail_y,
                SECOND_COUNTERWEIGHT_RADIUS,
                0.0,
                2.0 * PI,
            );
            cr.fill()
        })
    }

    fn draw_center_dot(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_color(cr, self.frame.colors.center_dot);
        cr.arc(CENTER.x, CENTER.y, CENTER_DOT_RADIUS, 0.0, 2.0 * PI);
        cr.fill()
    }
}

/// Draws `frame` into a `width` x `height` area, scaled to fit and centered.
pub fn draw(
    cr: &Context,
    frame: &RenderSnapshot,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let size = width.min(height);
    if size <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.translate((width - size) / 2.0, (height - size) / 2.0);
    cr.scale(size / VIEW_BOX, size / VIEW_BOX);
    DialRenderer::new(frame).draw(cr)?;
    cr.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};
    use dialkit::render::ClockRenderModel;
    use dialkit::settings::Settings;
    use dialkit::style::{DialStyle, Theme};
    use dialkit::time::{LocalClock, TimeSampler, TimeSnapshot};

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    /// Renders 03:00:00 without numerals so the layout is predictable.
    fn render(theme: Theme) -> ImageSurface {
        let three_oclock = TimeSnapshot {
            hour: 3,
            minute: 0,
            second: 0,
            ..LocalClock.sample()
        };
        let settings = Settings {
            theme,
            dial_style: DialStyle::Minimal,
            ..Settings::default()
        };
        let frame = ClockRenderModel::default().render(&three_oclock, &settings);

        let surface = ImageSurface::create(Format::ARgb32, 200, 200).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw(&cr, &frame, 200.0, 200.0).unwrap();
        }
        surface.flush();
        surface
    }

    #[test]
    fn test_corners_stay_transparent() {
        let mut surface = render(Theme::Light);
        assert_eq!(pixel(&mut surface, 0, 0)[3], 0);
        assert_eq!(pixel(&mut surface, 199, 199)[3], 0);
    }

    #[test]
    fn test_face_color_follows_theme() {
        // a point on the face away from hands, ticks and numerals
        let (x, y) = (60, 140);

        let mut light = render(Theme::Light);
        let mut dark = render(Theme::Dark);

        let light_px = pixel(&mut light, x, y);
        let dark_px = pixel(&mut dark, x, y);
        assert_eq!(light_px[3], 255);
        assert_eq!(dark_px[3], 255);
        assert_ne!(light_px, dark_px);
    }
}
