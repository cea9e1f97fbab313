//! Clock widgets: main time, running seconds, alternate time zone.

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};

use super::Widget;
use crate::config::SIDEBAR_CENTER;
use crate::render::RenderContext;
use crate::settings::FontSize;
use crate::styles::{CENTERED, LG_FONT, RIGHT_ALIGNED, SM_FONT, value_font};

/// Right edge of the stacked hour/minute digits, relative to the x offset.
const TIME_RIGHT_EDGE: i32 = 27;

/// Main clock: hour over minute, right-aligned so a space-padded hour
/// lines up with the minutes below it.
pub struct TimeWidget;

impl Widget for TimeWidget {
    fn height(&self, _ctx: &RenderContext) -> u32 {
        31
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let right_x = ctx.x_offset + TIME_RIGHT_EDGE;
        let style = MonoTextStyle::new(LG_FONT, ctx.settings.text_color);

        Text::with_text_style(&ctx.time.hours, Point::new(right_x, y_top - 2), style, RIGHT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(&ctx.time.minutes, Point::new(right_x, y_top + 15), style, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Running seconds readout, updated every tick while stacked.
pub struct SecondsWidget;

impl Widget for SecondsWidget {
    fn height(&self, _ctx: &RenderContext) -> u32 {
        14
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let style = MonoTextStyle::new(value_font(ctx.settings.font_size), ctx.settings.text_color);

        Text::with_text_style(
            &ctx.time.seconds,
            Point::new(ctx.x_offset + SIDEBAR_CENTER, y_top - 1),
            style,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

/// Alternate time zone: configured label over the offset-normalized hour.
pub struct AltTimeWidget;

impl Widget for AltTimeWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        if ctx.settings.font_size == FontSize::Large { 29 } else { 26 }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let center_x = ctx.x_offset + SIDEBAR_CENTER;
        let label_style = MonoTextStyle::new(SM_FONT, ctx.settings.text_color);
        let value_style = MonoTextStyle::new(value_font(ctx.settings.font_size), ctx.settings.text_color);

        Text::with_text_style(
            &ctx.settings.alt_clock_label,
            Point::new(center_x, y_top),
            label_style,
            CENTERED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(&ctx.time.alt_hour, Point::new(center_x, y_top + 10), value_style, CENTERED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;

    #[test]
    fn test_time_and_seconds_heights_are_fixed() {
        let mut fixture = Fixture::new();
        assert_eq!(TimeWidget.height(&fixture.ctx()), 31);
        assert_eq!(SecondsWidget.height(&fixture.ctx()), 14);

        // font size must not change the fixed heights
        fixture.settings.font_size = FontSize::Large;
        assert_eq!(TimeWidget.height(&fixture.ctx()), 31);
        assert_eq!(SecondsWidget.height(&fixture.ctx()), 14);
    }

    #[test]
    fn test_alt_time_height_follows_font_size() {
        let mut fixture = Fixture::new();
        assert_eq!(AltTimeWidget.height(&fixture.ctx()), 26);

        fixture.settings.font_size = FontSize::Large;
        assert_eq!(AltTimeWidget.height(&fixture.ctx()), 29);
    }
}
