//! Date widget: day name, boxed day-of-month, month.
//!
//! The day number sits on a calendar-page background - the vector icon in
//! normal mode, a filled rounded rectangle in large-font mode where the
//! icon would be too small for the digits. Compact mode drops the month
//! line.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};

use super::Widget;
use crate::config::SIDEBAR_CENTER;
use crate::render::RenderContext;
use crate::settings::FontSize;
use crate::styles::{CENTERED, value_font};

pub struct DateWidget;

impl Widget for DateWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        match (ctx.settings.font_size, ctx.compact) {
            (FontSize::Large, true) => 42,
            (FontSize::Large, false) => 62,
            (FontSize::Normal, true) => 41,
            (FontSize::Normal, false) => 58,
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let x = ctx.x_offset;
        let center_x = x + SIDEBAR_CENTER;
        let large = ctx.settings.font_size == FontSize::Large;
        let font = value_font(ctx.settings.font_size);
        let text_style = MonoTextStyle::new(font, ctx.settings.text_color);

        Text::with_text_style(&ctx.time.day_name, Point::new(center_x, y_top), text_style, CENTERED)
            .draw(display)
            .ok();

        // day-number background: vector icon normally, plain rounded
        // rectangle in large mode
        let (box_y, num_y, month_y) = if large {
            (y_top + 22, y_top + 22, y_top + 46)
        } else {
            (y_top + 16, y_top + 20, y_top + 41)
        };

        if large {
            RoundedRectangle::with_equal_corners(
                Rectangle::new(Point::new(2 + x, box_y), Size::new(26, 22)),
                Size::new(2, 2),
            )
            .into_styled(PrimitiveStyle::with_fill(ctx.settings.icon_stroke))
            .draw(display)
            .ok();
            Rectangle::new(Point::new(4 + x, box_y + 2), Size::new(22, 18))
                .into_styled(PrimitiveStyle::with_fill(ctx.settings.icon_fill))
                .draw(display)
                .ok();
        } else if let Some(icon) = ctx.icons.date_bg {
            icon.draw(
                display,
                Point::new(3 + x, box_y),
                ctx.settings.icon_fill,
                ctx.settings.icon_stroke,
            );
        }

        // the day number is drawn in the stroke color so it reads on the
        // icon-fill background
        let num_style = MonoTextStyle::new(font, ctx.settings.icon_stroke);
        Text::with_text_style(&ctx.time.day_num, Point::new(center_x, num_y), num_style, CENTERED)
            .draw(display)
            .ok();

        if !ctx.compact {
            Text::with_text_style(&ctx.time.month, Point::new(center_x, month_y), text_style, CENTERED)
                .draw(display)
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;

    #[test]
    fn test_height_covers_all_four_modes() {
        let mut fixture = Fixture::new();
        assert_eq!(DateWidget.height(&fixture.ctx()), 58);

        fixture.compact = true;
        assert_eq!(DateWidget.height(&fixture.ctx()), 41);

        fixture.settings.font_size = FontSize::Large;
        assert_eq!(DateWidget.height(&fixture.ctx()), 42);

        fixture.compact = false;
        assert_eq!(DateWidget.height(&fixture.ctx()), 62);
    }
}
