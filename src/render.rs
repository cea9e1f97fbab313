//! Per-frame render context.
//!
//! The event loop derives everything once per tick and hands widgets a
//! single immutable snapshot bundle - settings, derived strings, external
//! peeks, the x offset and the compact flag. Derive once, read many times
//! per draw, with no process-wide mutable state.

use crate::icons::IconSet;
#[cfg(feature = "health")]
use crate::services::HealthReading;
use crate::services::{BatteryReading, WeatherReport};
use crate::settings::Settings;
use crate::time_text::TimeText;

/// Everything a widget may read during `height` and `draw`.
///
/// All fields are snapshots: widgets never observe a value changing inside
/// one render pass, and nothing reachable from here is mutable.
pub struct RenderContext<'a> {
    pub settings: &'a Settings,
    /// Derived time/date strings for the current tick.
    pub time: &'a TimeText,
    pub battery: BatteryReading,
    /// Phone link state; the disconnect widget is only stacked when false.
    pub connected: bool,
    pub weather: &'a WeatherReport,
    #[cfg(feature = "health")]
    pub health: &'a HealthReading,
    pub icons: &'a IconSet,
    /// Horizontal pixel offset of the whole strip; every widget applies it
    /// to its own draw coordinates.
    pub x_offset: i32,
    /// Compact mode shortens widgets that carry secondary content.
    pub compact: bool,
}

/// Owned backing data for building a [`RenderContext`] in tests.
#[cfg(test)]
pub struct Fixture {
    pub settings: Settings,
    pub time: TimeText,
    pub battery: BatteryReading,
    pub connected: bool,
    pub weather: WeatherReport,
    #[cfg(feature = "health")]
    pub health: HealthReading,
    pub icons: IconSet,
    pub x_offset: i32,
    pub compact: bool,
}

#[cfg(test)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            time: TimeText::default(),
            battery: BatteryReading::default(),
            connected: true,
            weather: WeatherReport::default(),
            #[cfg(feature = "health")]
            health: HealthReading::default(),
            icons: IconSet::load(),
            x_offset: 0,
            compact: false,
        }
    }

    pub fn ctx(&self) -> RenderContext<'_> {
        RenderContext {
            settings: &self.settings,
            time: &self.time,
            battery: self.battery,
            connected: self.connected,
            weather: &self.weather,
            #[cfg(feature = "health")]
            health: &self.health,
            icons: &self.icons,
            x_offset: self.x_offset,
            compact: self.compact,
        }
    }
}
