//! The sidebar's widget set.
//!
//! Every panel in the strip is a [`Widget`]: a pure height query plus a
//! draw call. The set is closed - widgets are stateless unit structs
//! selected through [`WidgetType`] / [`WidgetKind`], so there are no trait
//! objects and no runtime registration.
//!
//! # Contract
//!
//! - `height` is a deterministic function of the render context (settings,
//!   compact flag, battery/health state). It has no side effects, so the
//!   layout engine can call it before anything is drawn.
//! - `draw` may paint and recolor freely but never mutates settings or
//!   derived state. Draw failures are swallowed; the only failure mode a
//!   widget has is degraded output.
//!
//! # Widget selection
//!
//! Configuration stores widget slots as raw tags. [`WidgetType::from_raw`]
//! maps the closed tag set and resolves anything unknown (a tag from newer
//! firmware, a corrupt value) to [`WidgetType::Empty`], whose widget is
//! zero-height and draws nothing.

mod battery;
mod calendar;
mod date;
#[cfg(feature = "health")]
mod health;
mod time;
mod weather;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

pub use battery::BatteryWidget;
pub use calendar::{DayNumberWidget, WeekNumberWidget};
pub use date::DateWidget;
#[cfg(feature = "health")]
pub use health::HealthWidget;
pub use time::{AltTimeWidget, SecondsWidget, TimeWidget};
pub use weather::{CurrentWeatherWidget, ForecastWidget};

use crate::render::RenderContext;

/// A self-contained sidebar panel.
pub trait Widget {
    /// Pixel height the widget will occupy under the given context. Pure.
    fn height(&self, ctx: &RenderContext) -> u32;

    /// Render the widget with its top edge at `y_top`. The horizontal
    /// offset comes from `ctx.x_offset` and is applied by the widget
    /// itself.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32);
}

/// Widget tags as stored by the configuration subsystem.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum WidgetType {
    BatteryMeter = 0,
    BluetoothDisconnect = 1,
    Date = 2,
    AltTimeZone = 3,
    Time = 4,
    Seconds = 5,
    WeatherCurrent = 6,
    WeatherForecastToday = 7,
    WeekNumber = 8,
    Health = 9,
    DayNumber = 10,
    /// Blank slot; also the fail-soft target for unknown tags.
    Empty = 11,
}

impl WidgetType {
    /// Decode a persisted tag. Unknown values resolve to [`Self::Empty`]
    /// rather than an error, so stale configuration can never break the
    /// render path. Without the `health` feature the health tag is also
    /// absorbed into `Empty`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::BatteryMeter,
            1 => Self::BluetoothDisconnect,
            2 => Self::Date,
            3 => Self::AltTimeZone,
            4 => Self::Time,
            5 => Self::Seconds,
            6 => Self::WeatherCurrent,
            7 => Self::WeatherForecastToday,
            8 => Self::WeekNumber,
            #[cfg(feature = "health")]
            9 => Self::Health,
            10 => Self::DayNumber,
            _ => Self::Empty,
        }
    }
}

/// Zero-height widget that draws nothing.
pub struct EmptyWidget;

impl Widget for EmptyWidget {
    fn height(&self, _ctx: &RenderContext) -> u32 {
        0
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, _display: &mut D, _ctx: &RenderContext, _y_top: i32) {}
}

/// One concrete widget per tag, stored as an enum so heterogeneous widget
/// lists need no `dyn` dispatch. Instances are zero-sized; `of` hands out
/// the singleton for a tag.
pub enum WidgetKind {
    Battery(BatteryWidget),
    Disconnect(DisconnectWidget),
    Date(DateWidget),
    AltTime(AltTimeWidget),
    Time(TimeWidget),
    Seconds(SecondsWidget),
    WeatherCurrent(CurrentWeatherWidget),
    WeatherForecast(ForecastWidget),
    WeekNumber(WeekNumberWidget),
    #[cfg(feature = "health")]
    Health(HealthWidget),
    DayNumber(DayNumberWidget),
    Empty(EmptyWidget),
}

impl WidgetKind {
    /// Widget instance for a tag.
    pub fn of(widget_type: WidgetType) -> Self {
        match widget_type {
            WidgetType::BatteryMeter => Self::Battery(BatteryWidget),
            WidgetType::BluetoothDisconnect => Self::Disconnect(DisconnectWidget),
            WidgetType::Date => Self::Date(DateWidget),
            WidgetType::AltTimeZone => Self::AltTime(AltTimeWidget),
            WidgetType::Time => Self::Time(TimeWidget),
            WidgetType::Seconds => Self::Seconds(SecondsWidget),
            WidgetType::WeatherCurrent => Self::WeatherCurrent(CurrentWeatherWidget),
            WidgetType::WeatherForecastToday => Self::WeatherForecast(ForecastWidget),
            WidgetType::WeekNumber => Self::WeekNumber(WeekNumberWidget),
            #[cfg(feature = "health")]
            WidgetType::Health => Self::Health(HealthWidget),
            #[cfg(not(feature = "health"))]
            WidgetType::Health => Self::Empty(EmptyWidget),
            WidgetType::DayNumber => Self::DayNumber(DayNumberWidget),
            WidgetType::Empty => Self::Empty(EmptyWidget),
        }
    }
}

impl Widget for WidgetKind {
    fn height(&self, ctx: &RenderContext) -> u32 {
        match self {
            Self::Battery(w) => w.height(ctx),
            Self::Disconnect(w) => w.height(ctx),
            Self::Date(w) => w.height(ctx),
            Self::AltTime(w) => w.height(ctx),
            Self::Time(w) => w.height(ctx),
            Self::Seconds(w) => w.height(ctx),
            Self::WeatherCurrent(w) => w.height(ctx),
            Self::WeatherForecast(w) => w.height(ctx),
            Self::WeekNumber(w) => w.height(ctx),
            #[cfg(feature = "health")]
            Self::Health(w) => w.height(ctx),
            Self::DayNumber(w) => w.height(ctx),
            Self::Empty(w) => w.height(ctx),
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        match self {
            Self::Battery(w) => w.draw(display, ctx, y_top),
            Self::Disconnect(w) => w.draw(display, ctx, y_top),
            Self::Date(w) => w.draw(display, ctx, y_top),
            Self::AltTime(w) => w.draw(display, ctx, y_top),
            Self::Time(w) => w.draw(display, ctx, y_top),
            Self::Seconds(w) => w.draw(display, ctx, y_top),
            Self::WeatherCurrent(w) => w.draw(display, ctx, y_top),
            Self::WeatherForecast(w) => w.draw(display, ctx, y_top),
            Self::WeekNumber(w) => w.draw(display, ctx, y_top),
            #[cfg(feature = "health")]
            Self::Health(w) => w.draw(display, ctx, y_top),
            Self::DayNumber(w) => w.draw(display, ctx, y_top),
            Self::Empty(w) => w.draw(display, ctx, y_top),
        }
    }
}

/// Icon-only panel shown while the phone link is down.
pub struct DisconnectWidget;

impl Widget for DisconnectWidget {
    fn height(&self, _ctx: &RenderContext) -> u32 {
        22
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, y_top: i32) {
        if let Some(icon) = ctx.icons.disconnected {
            icon.draw(
                display,
                Point::new(3 + ctx.x_offset, y_top),
                ctx.settings.icon_fill,
                ctx.settings.icon_stroke,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_unknown_raw_tag_resolves_to_empty() {
        assert_eq!(WidgetType::from_raw(200), WidgetType::Empty);
        assert_eq!(WidgetType::from_raw(12), WidgetType::Empty);

        let fixture = Fixture::new();
        let widget = WidgetKind::of(WidgetType::from_raw(200));
        assert_eq!(widget.height(&fixture.ctx()), 0, "unknown tag must be a no-op widget");
    }

    #[test]
    fn test_known_raw_tags_round_trip() {
        for (raw, expected) in [
            (0u8, WidgetType::BatteryMeter),
            (1, WidgetType::BluetoothDisconnect),
            (2, WidgetType::Date),
            (3, WidgetType::AltTimeZone),
            (4, WidgetType::Time),
            (5, WidgetType::Seconds),
            (6, WidgetType::WeatherCurrent),
            (7, WidgetType::WeatherForecastToday),
            (8, WidgetType::WeekNumber),
            (10, WidgetType::DayNumber),
        ] {
            assert_eq!(WidgetType::from_raw(raw), expected);
        }
    }

    #[test]
    fn test_empty_widget_draws_nothing() {
        let fixture = Fixture::new();
        let mut display: MockDisplay<embedded_graphics::pixelcolor::Rgb565> = MockDisplay::new();

        EmptyWidget.draw(&mut display, &fixture.ctx(), 0);
        assert_eq!(display, MockDisplay::new(), "empty widget must not touch a pixel");
    }

    #[test]
    fn test_heights_are_pure() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();

        for raw in 0..=11u8 {
            let widget = WidgetKind::of(WidgetType::from_raw(raw));
            let first = widget.height(&ctx);
            let second = widget.height(&ctx);
            assert_eq!(first, second, "height must be deterministic for tag {raw}");
        }
    }

    #[test]
    fn test_disconnect_widget_fixed_height() {
        let fixture = Fixture::new();
        assert_eq!(DisconnectWidget.height(&fixture.ctx()), 22);
    }
}
