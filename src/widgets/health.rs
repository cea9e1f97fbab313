//! Health widget: sleep summary while sleeping, steps or distance while
//! awake.
//!
//! The mode is resolved fresh on every height and draw call through
//! [`resolve_mode`], so the widget flips between its two shapes the moment
//! the trailing sleep window expires. Unavailable health data renders as an
//! awake widget with zero totals, never an error.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;

use super::Widget;
use crate::config::SIDEBAR_CENTER;
use crate::health::{HealthMode, resolve_mode};
use crate::render::RenderContext;
use crate::settings::{HealthDisplay, SleepMetric};
use crate::styles::{CENTERED, MD_FONT, SM_FONT};
use crate::units::{format_distance, format_steps};

pub struct HealthWidget;

impl Widget for HealthWidget {
    fn height(&self, ctx: &RenderContext) -> u32 {
        match resolve_mode(ctx.health) {
            HealthMode::Sleeping => 44,
            HealthMode::Active => 32,
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        match resolve_mode(ctx.health) {
            HealthMode::Sleeping => draw_sleep(display, ctx, y_top),
            HealthMode::Active => draw_steps(display, ctx, y_top),
        }
    }
}

/// Sleep sub-renderer: moon icon, whole hours, leftover minutes.
fn draw_sleep<D: DrawTarget<Color = Rgb565>>(display: &mut D, ctx: &RenderContext, y_top: i32) {
    let center_x = ctx.x_offset + SIDEBAR_CENTER;

    if let Some(icon) = ctx.icons.sleep {
        icon.draw(
            display,
            Point::new(3 + ctx.x_offset, y_top - 3),
            ctx.settings.icon_fill,
            ctx.settings.icon_stroke,
        );
    }

    let sleep_seconds = match ctx.settings.sleep_metric {
        SleepMetric::Total => ctx.health.sleep_today_s,
        SleepMetric::Restful => ctx.health.restful_sleep_today_s,
    };

    let sleep_minutes = sleep_seconds / 60;
    let sleep_hours = sleep_minutes / 60;
    let sleep_minutes = sleep_minutes % 60;

    // 4-byte buffers as in the stored format; a sleep total past 999 hours
    // would truncate, which cannot happen within one day
    let mut hours_text: String<4> = String::new();
    let _ = write!(hours_text, "{sleep_hours}h");

    let mut minutes_text: String<4> = String::new();
    let _ = write!(minutes_text, "{sleep_minutes}m");

    let hours_style = MonoTextStyle::new(MD_FONT, ctx.settings.text_color);
    Text::with_text_style(&hours_text, Point::new(center_x, y_top + 16), hours_style, CENTERED)
        .draw(display)
        .ok();

    let minutes_style = MonoTextStyle::new(SM_FONT, ctx.settings.text_color);
    Text::with_text_style(&minutes_text, Point::new(center_x, y_top + 32), minutes_style, CENTERED)
        .draw(display)
        .ok();
}

/// Awake sub-renderer: footsteps icon over today's steps or distance.
fn draw_steps<D: DrawTarget<Color = Rgb565>>(display: &mut D, ctx: &RenderContext, y_top: i32) {
    let center_x = ctx.x_offset + SIDEBAR_CENTER;

    if let Some(icon) = ctx.icons.steps {
        icon.draw(
            display,
            Point::new(3 + ctx.x_offset, y_top - 4),
            ctx.settings.icon_fill,
            ctx.settings.icon_stroke,
        );
    }

    let value = match ctx.settings.health_display {
        HealthDisplay::Steps => {
            format_steps(ctx.health.steps_today, ctx.settings.decimal_separator)
        }
        HealthDisplay::Distance => format_distance(
            ctx.health.distance_today_m,
            ctx.settings.units,
            ctx.settings.decimal_separator,
        ),
    };

    let style = MonoTextStyle::new(MD_FONT, ctx.settings.text_color);
    Text::with_text_style(&value, Point::new(center_x, y_top + 17), style, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;
    use crate::services::Activity;

    #[test]
    fn test_height_switches_with_mode() {
        let mut fixture = Fixture::new();
        fixture.health.available = true;
        assert_eq!(HealthWidget.height(&fixture.ctx()), 32, "awake shape");

        fixture.health.current_activity = Activity::Sleep;
        assert_eq!(HealthWidget.height(&fixture.ctx()), 44, "sleeping shape");
    }

    #[test]
    fn test_unavailable_health_uses_awake_shape() {
        let mut fixture = Fixture::new();
        fixture.health.available = false;
        fixture.health.current_activity = Activity::Sleep;
        assert_eq!(HealthWidget.height(&fixture.ctx()), 32);
    }

    #[test]
    fn test_recent_sleep_sample_keeps_tall_shape() {
        let mut fixture = Fixture::new();
        fixture.health.available = true;
        fixture.health.seconds_since_sleep = Some(120);
        assert_eq!(HealthWidget.height(&fixture.ctx()), 44);
    }
}
