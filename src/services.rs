//! Snapshot types for the external collaborators the sidebar reads.
//!
//! Battery, connectivity, weather and health data are owned by other
//! subsystems (platform services on the watch, the demo generator in the
//! simulator). The sidebar only ever sees non-blocking snapshot peeks taken
//! just before a render pass; nothing here is cached or refreshed by the
//! core itself.

use crate::icons::WeatherIcon;

/// Battery service peek.
#[derive(Clone, Copy, Debug)]
pub struct BatteryReading {
    /// Charge percentage, 0-100.
    pub percent: u8,
    pub charging: bool,
}

impl Default for BatteryReading {
    fn default() -> Self {
        Self { percent: 100, charging: false }
    }
}

/// Weather snapshot delivered by the fetch/parse subsystem.
///
/// `None` is the "not yet available" sentinel - distinguishable from every
/// valid temperature by construction. A fresh report starts fully unset and
/// widgets render placeholder text until data arrives.
#[derive(Clone, Copy, Default, Debug)]
pub struct WeatherReport {
    /// Current temperature in whole degrees Celsius.
    pub current_temp_c: Option<i32>,
    /// Today's forecast high, Celsius.
    pub forecast_high_c: Option<i32>,
    /// Today's forecast low, Celsius.
    pub forecast_low_c: Option<i32>,
    /// Condition icon for current conditions, if one has been resolved.
    pub current_icon: Option<WeatherIcon>,
    /// Condition icon for the forecast, if one has been resolved.
    pub forecast_icon: Option<WeatherIcon>,
}

/// Instantaneous activity classification from the health service.
#[cfg(feature = "health")]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Activity {
    /// No classified activity (also the stand-in when data is unavailable).
    #[default]
    None,
    Walk,
    Run,
    Sleep,
    RestfulSleep,
}

/// Health service peek: current classification, the trailing-window sleep
/// query, and today's cumulative totals.
///
/// When `available` is false every other field is meaningless and the
/// consumer must degrade to zeros / awake display, never error out.
#[cfg(feature = "health")]
#[derive(Clone, Copy, Default, Debug)]
pub struct HealthReading {
    pub available: bool,
    pub current_activity: Activity,
    /// Age in seconds of the most recent sleep or restful-sleep sample, if
    /// any was recorded. This is the trailing-window activity query.
    pub seconds_since_sleep: Option<u32>,
    pub steps_today: u32,
    pub distance_today_m: u32,
    /// Total sleep recorded today, seconds.
    pub sleep_today_s: u32,
    /// Restful (deep) sleep recorded today, seconds.
    pub restful_sleep_today_s: u32,
}
