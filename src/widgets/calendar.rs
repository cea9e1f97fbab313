//! Label-over-value calendar widgets: ISO week number and day of year.

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};

use super::Widget;
use crate::config::SIDEBAR_CENTER;
use crate::localization::{word_for_day, word_for_week};
use crate::render::RenderContext;
use crate::settings::FontSize;
use crate::styles::{CENTERED, MD_FONT, SM_FONT, value_font};

/// Shared height rule for the two label-over-value widgets.
const fn labeled_height(font_size: FontSize) -> u32 {
    match font_size {
        FontSize::Large => 29,
        FontSize::Normal => 26,
    }
}

/// ISO 8601 week-of-year.
pub struct WeekNumberWidget;

impl Widget for WeekNumberWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        labeled_height(ctx.settings.font_size)
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let center_x = ctx.x_offset + SIDEBAR_CENTER;
        let label_style = MonoTextStyle::new(SM_FONT, ctx.settings.text_color);
        let value_style = MonoTextStyle::new(value_font(ctx.settings.font_size), ctx.settings.text_color);

        Text::with_text_style(
            word_for_week(ctx.settings.language_id),
            Point::new(center_x, y_top),
            label_style,
            CENTERED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(&ctx.time.week_num, Point::new(center_x, y_top + 10), value_style, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Ordinal day of year (1-366).
pub struct DayNumberWidget;

impl Widget for DayNumberWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        labeled_height(ctx.settings.font_size)
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let center_x = ctx.x_offset + SIDEBAR_CENTER;
        let label_style = MonoTextStyle::new(SM_FONT, ctx.settings.text_color);
        // day-of-year keeps the medium font even in large mode; three
        // digits would not fit the strip in the large font
        let value_style = MonoTextStyle::new(MD_FONT, ctx.settings.text_color);

        Text::with_text_style(
            word_for_day(ctx.settings.language_id),
            Point::new(center_x, y_top),
            label_style,
            CENTERED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            &ctx.time.day_of_year,
            Point::new(center_x, y_top + 11),
            value_style,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;

    #[test]
    fn test_heights_follow_font_size() {
        let mut fixture = Fixture::new();
        assert_eq!(WeekNumberWidget.height(&fixture.ctx()), 26);
        assert_eq!(DayNumberWidget.height(&fixture.ctx()), 26);

        fixture.settings.font_size = FontSize::Large;
        assert_eq!(WeekNumberWidget.height(&fixture.ctx()), 29);
        assert_eq!(DayNumberWidget.height(&fixture.ctx()), 29);
    }
}
