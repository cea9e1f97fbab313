//! Battery meter widget.
//!
//! Three render shapes share one widget:
//! - charging: icon with a bolt overlay, no fill bar, no percent text;
//! - percent hidden: bare icon with the fill bar;
//! - percent shown: icon, fill bar and a percent line underneath.
//!
//! The percent line is always suppressed while charging; the platform
//! reports unreliable percentages on some chargers.

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
use crate::colors::RED;
use crate::config::SIDEBAR_CENTER;
use crate::render::RenderContext;
use crate::settings::FontSize;
use crate::styles::{CENTERED, battery_font};

/// Maximum fill bar width in pixels (100% charge).
const BAR_FULL_WIDTH: f32 = 17.0;

/// Charge percentage at or below which the fill bar turns the warning color.
const LOW_BATTERY_PERCENT: u8 = 20;

pub struct BatteryWidget;

impl Widget for BatteryWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        if ctx.battery.charging || !ctx.settings.show_battery_percent {
            14 // icon-only
        } else if ctx.settings.font_size == FontSize::Large {
            33
        } else {
            27
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        let battery = ctx.battery;
        let icon_origin = Point::new(3 + ctx.x_offset, y_top - 2);

        if let Some(icon) = ctx.icons.battery {
            icon.draw(display, icon_origin, ctx.settings.icon_fill, ctx.settings.icon_stroke);
        }

        if battery.charging {
            // the bolt overlay uses inverted colors
            if let Some(bolt) = ctx.icons.charge {
                bolt.draw(display, icon_origin, ctx.settings.icon_stroke, ctx.settings.icon_fill);
            }
        } else {
            let width = (BAR_FULL_WIDTH * f32::from(battery.percent) / 100.0).round() as u32;
            let bar_color = if battery.percent <= LOW_BATTERY_PERCENT {
                RED
            } else {
                ctx.settings.icon_stroke
            };

            if width > 0 {
                Rectangle::new(icon_origin + Point::new(2, 4), Size::new(width, 6))
                    .into_styled(PrimitiveStyle::with_fill(bar_color))
                    .draw(display)
                    .ok();
            }
        }

        if ctx.settings.show_battery_percent && !battery.charging {
            // percent values never exceed "100%", but the buffer is sized
            // tightly; a corrupt reading above 999 would truncate silently
            let mut percent_text: String<6> = String::new();
            let style = MonoTextStyle::new(battery_font(ctx.settings.font_size), ctx.settings.text_color);

            let text_y = if ctx.settings.font_size == FontSize::Large {
                let _ = write!(percent_text, "{}", battery.percent);
                y_top + 11
            } else {
                let _ = write!(percent_text, "{}%", battery.percent);
                y_top + 15
            };

            Text::with_text_style(
                &percent_text,
                Point::new(ctx.x_offset + SIDEBAR_CENTER, text_y),
                style,
                CENTERED,
            )
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
    fn test_height_icon_only_while_charging() {
        let mut fixture = Fixture::new();
        fixture.battery.charging = true;
        assert_eq!(BatteryWidget.height(&fixture.ctx()), 14);

        // charging wins even in large-font mode
        fixture.settings.font_size = FontSize::Large;
        assert_eq!(BatteryWidget.height(&fixture.ctx()), 14);
    }

    #[test]
    fn test_height_icon_only_when_percent_hidden() {
        let mut fixture = Fixture::new();
        fixture.settings.show_battery_percent = false;
        assert_eq!(BatteryWidget.height(&fixture.ctx()), 14);
    }

    #[test]
    fn test_height_with_percent_text() {
        let mut fixture = Fixture::new();
        assert_eq!(BatteryWidget.height(&fixture.ctx()), 27);

        fixture.settings.font_size = FontSize::Large;
        assert_eq!(BatteryWidget.height(&fixture.ctx()), 33);
    }
}
