//! Current-conditions and forecast weather widgets.
//!
//! Both widgets degrade to a `...` placeholder until the fetch subsystem
//! delivers a report, and convert Celsius to Fahrenheit when the unit
//! system is imperial. In large-font mode the degree symbol is dropped so
//! three digits still fit the strip.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use super::Widget;
use crate::config::SIDEBAR_CENTER;
use crate::render::RenderContext;
use crate::settings::{FontSize, UnitSystem};
use crate::styles::{CENTERED, value_font};
use crate::units::celsius_to_fahrenheit;

/// Placeholder shown while a temperature is still the unset sentinel.
const LOADING_TEXT: &str = "...";

/// Temperature in display units for the configured system.
fn display_temp(celsius: i32, units: UnitSystem) -> i32 {
    match units {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => celsius_to_fahrenheit(celsius),
    }
}

/// Format one temperature line; the leading space balances the trailing
/// degree symbol so the digits stay visually centered.
fn temp_line(value: i32, large: bool) -> String<8> {
    let mut text = String::new();
    if large {
        let _ = write!(text, " {value}");
    } else {
        let _ = write!(text, " {value}°");
    }
    text
}

pub struct CurrentWeatherWidget;

impl Widget for CurrentWeatherWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        if ctx.settings.font_size == FontSize::Large { 44 } else { 42 }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let center_x = ctx.x_offset + SIDEBAR_CENTER;
        let large = ctx.settings.font_size == FontSize::Large;
        let style = MonoTextStyle::new(value_font(ctx.settings.font_size), ctx.settings.text_color);

        if let Some(icon) = ctx.weather.current_icon {
            icon.draw(
                display,
                Point::new(3 + ctx.x_offset, y_top),
                ctx.settings.icon_fill,
                ctx.settings.icon_stroke,
            );
        }

        if let Some(celsius) = ctx.weather.current_temp_c {
            let line = temp_line(display_temp(celsius, ctx.settings.units), large);
            let text_y = if large { y_top + 22 } else { y_top + 26 };
            Text::with_text_style(&line, Point::new(center_x, text_y), style, CENTERED)
                .draw(display)
                .ok();
        } else {
            Text::with_text_style(LOADING_TEXT, Point::new(center_x, y_top + 8), style, CENTERED)
                .draw(display)
                .ok();
        }
    }
}

pub struct ForecastWidget;

impl Widget for ForecastWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        if ctx.settings.font_size == FontSize::Large { 63 } else { 60 }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let x = ctx.x_offset;
        let center_x = x + SIDEBAR_CENTER;
        let large = ctx.settings.font_size == FontSize::Large;
        let style = MonoTextStyle::new(value_font(ctx.settings.font_size), ctx.settings.text_color);

        if let Some(icon) = ctx.weather.forecast_icon {
            icon.draw(
                display,
                Point::new(3 + x, y_top),
                ctx.settings.icon_fill,
                ctx.settings.icon_stroke,
            );
        }

        let (high, low) = match (ctx.weather.forecast_high_c, ctx.weather.forecast_low_c) {
            (Some(high), Some(low)) => (high, low),
            _ => {
                Text::with_text_style(LOADING_TEXT, Point::new(center_x, y_top + 8), style, CENTERED)
                    .draw(display)
                    .ok();
                return;
            }
        };

        let (high_y, divider_y, low_y) = if large {
            (y_top + 22, y_top + 45, y_top + 47)
        } else {
            (y_top + 26, y_top + 43, y_top + 45)
        };

        let high_line = temp_line(display_temp(high, ctx.settings.units), large);
        Text::with_text_style(&high_line, Point::new(center_x, high_y), style, CENTERED)
            .draw(display)
            .ok();

        // high/low divider
        Rectangle::new(Point::new(3 + x, divider_y), Size::new(24, 1))
            .into_styled(PrimitiveStyle::with_fill(ctx.settings.text_color))
            .draw(display)
            .ok();

        let low_line = temp_line(display_temp(low, ctx.settings.units), large);
        Text::with_text_style(&low_line, Point::new(center_x, low_y), style, CENTERED)
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
        assert_eq!(CurrentWeatherWidget.height(&fixture.ctx()), 42);
        assert_eq!(ForecastWidget.height(&fixture.ctx()), 60);

        fixture.settings.font_size = FontSize::Large;
        assert_eq!(CurrentWeatherWidget.height(&fixture.ctx()), 44);
        assert_eq!(ForecastWidget.height(&fixture.ctx()), 63);
    }

    #[test]
    fn test_display_temp_converts_only_for_imperial() {
        assert_eq!(display_temp(0, UnitSystem::Metric), 0);
        assert_eq!(display_temp(0, UnitSystem::Imperial), 32);
        assert_eq!(display_temp(-17, UnitSystem::Imperial), 1);
    }

    #[test]
    fn test_temp_line_formats() {
        assert_eq!(temp_line(21, false).as_str(), " 21°");
        assert_eq!(temp_line(21, true).as_str(), " 21");
        assert_eq!(temp_line(-4, false).as_str(), " -4°");
    }
}
