//! Read-only settings snapshot consumed by the sidebar core.
//!
//! Settings are owned and persisted by an external subsystem (on the watch,
//! a phone-synced key/value store). The core only ever sees an immutable
//! snapshot of the current values; nothing in the render path writes to it.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{BLACK, WHITE};

/// Font-size mode for widget values.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum FontSize {
    #[default]
    Normal,
    Large,
}

/// Measurement system for temperature and distance display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Clock style for the hour readout.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClockStyle {
    /// 12-hour clock, hours 1-12.
    H12,
    /// 24-hour clock, hours 0-23.
    #[default]
    H24,
}

/// Which sleep total the health widget reports while sleeping.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SleepMetric {
    /// All sleep recorded today.
    #[default]
    Total,
    /// Restful (deep) sleep only.
    Restful,
}

/// What the health widget shows while awake.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum HealthDisplay {
    #[default]
    Steps,
    Distance,
}

/// Immutable settings snapshot.
///
/// Field capacities follow the persisted format: the alt-clock label is
/// capped at 8 characters and silently truncated by the settings subsystem,
/// not here.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Index into the localization tables. Out-of-range ids fall back to
    /// language 0 at lookup time, never here.
    pub language_id: usize,
    pub font_size: FontSize,
    /// Icon interior color (recolor target for the fill layer).
    pub icon_fill: Rgb565,
    /// Icon outline color (recolor target for the stroke layer).
    pub icon_stroke: Rgb565,
    /// Color for all sidebar text.
    pub text_color: Rgb565,
    pub units: UnitSystem,
    pub clock_style: ClockStyle,
    /// When false, a leading zero on the hour is replaced with a space.
    pub show_leading_zero: bool,
    /// Signed hour offset of the alternate time zone from local time.
    pub alt_clock_offset_hours: i32,
    /// Short label drawn above the alternate-clock hour.
    pub alt_clock_label: String<8>,
    pub sleep_metric: SleepMetric,
    pub health_display: HealthDisplay,
    /// Separator for fractional step-count / mile displays ('.' or ',').
    pub decimal_separator: char,
    pub show_battery_percent: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let mut alt_clock_label = String::new();
        let _ = alt_clock_label.push_str("UTC");

        Self {
            language_id: 0,
            font_size: FontSize::Normal,
            icon_fill: WHITE,
            icon_stroke: BLACK,
            text_color: BLACK,
            units: UnitSystem::Metric,
            clock_style: ClockStyle::H24,
            show_leading_zero: false,
            alt_clock_offset_hours: 0,
            alt_clock_label,
            sleep_metric: SleepMetric::Total,
            health_display: HealthDisplay::Steps,
            decimal_separator: '.',
            show_battery_percent: true,
        }
    }
}
