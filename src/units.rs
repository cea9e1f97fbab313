//! Unit conversion and compact number formatting for the sidebar.
//!
//! All formatting returns bounded `heapless` strings so the render path
//! never allocates. The abbreviation rules are tuned for a strip that fits
//! at most five small-font characters:
//!
//! | Input | Output |
//! |-------|--------|
//! | 950 steps | `950` |
//! | 4321 steps | `4.3k` |
//! | 12000 steps | `12k` |
//! | 850 m (metric) | `850m` |
//! | 2500 m (metric) | `2km` |
//! | 1609 m (imperial) | `1mi` |
//! | 161 m (imperial) | `.1mi` |

use core::fmt::Write;

use heapless::String;

use crate::settings::UnitSystem;

/// Bounded buffer for one formatted value.
pub type ValueField = String<8>;

/// Meters per statute mile, truncated. Integer math throughout: whole miles
/// by division, tenths from the scaled remainder.
const METERS_PER_MILE: u32 = 1609;

/// Convert whole-degree Celsius to nearest-integer Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (celsius as f32 * 1.8 + 32.0).round() as i32
}

/// Abbreviate a step count.
///
/// Under 1000 the literal count; 1000-9999 as `<thousands><sep><hundreds>k`
/// with the configured decimal separator; 10000 and up as whole `<n>k`.
pub fn format_steps(steps: u32, decimal_separator: char) -> ValueField {
    let mut text = ValueField::new();

    if steps < 1000 {
        let _ = write!(text, "{steps}");
    } else if steps < 10_000 {
        let thousands = steps / 1000;
        let hundreds = steps / 100 % 10;
        let _ = write!(text, "{thousands}{decimal_separator}{hundreds}k");
    } else {
        let _ = write!(text, "{}k", steps / 1000);
    }

    text
}

/// Abbreviate a walked distance given in meters.
///
/// Metric: bare meters under 1 km, else truncated whole kilometers.
/// Imperial: truncated whole miles when at least one, else `<sep><tenths>mi`
/// with tenths from the scaled remainder (`meters*10/1609 mod 10`).
pub fn format_distance(meters: u32, units: UnitSystem, decimal_separator: char) -> ValueField {
    let mut text = ValueField::new();

    match units {
        UnitSystem::Metric => {
            if meters < 1000 {
                let _ = write!(text, "{meters}m");
            } else {
                let _ = write!(text, "{}km", meters / 1000);
            }
        }
        UnitSystem::Imperial => {
            let whole_miles = meters / METERS_PER_MILE;
            if whole_miles >= 1 {
                let _ = write!(text, "{whole_miles}mi");
            } else {
                let tenths = meters * 10 / METERS_PER_MILE % 10;
                let _ = write!(text, "{decimal_separator}{tenths}mi");
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit_reference_points() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(-17), 1, "-17C is 1.4F, rounds to 1");
        assert_eq!(celsius_to_fahrenheit(-40), -40, "scales cross at -40");
    }

    #[test]
    fn test_steps_below_thousand_are_literal() {
        assert_eq!(format_steps(0, '.').as_str(), "0");
        assert_eq!(format_steps(950, '.').as_str(), "950");
        assert_eq!(format_steps(999, '.').as_str(), "999");
    }

    #[test]
    fn test_steps_thousands_keep_hundreds_digit() {
        assert_eq!(format_steps(1000, '.').as_str(), "1.0k");
        assert_eq!(format_steps(4321, '.').as_str(), "4.3k");
        assert_eq!(format_steps(9999, ',').as_str(), "9,9k");
    }

    #[test]
    fn test_steps_ten_thousand_drop_fraction() {
        assert_eq!(format_steps(10_000, '.').as_str(), "10k");
        assert_eq!(format_steps(12_000, '.').as_str(), "12k");
    }

    #[test]
    fn test_distance_metric() {
        assert_eq!(format_distance(0, UnitSystem::Metric, '.').as_str(), "0m");
        assert_eq!(format_distance(999, UnitSystem::Metric, '.').as_str(), "999m");
        assert_eq!(
            format_distance(1000, UnitSystem::Metric, '.').as_str(),
            "1km",
            "kilometers truncate, never round up"
        );
        assert_eq!(format_distance(2900, UnitSystem::Metric, '.').as_str(), "2km");
    }

    #[test]
    fn test_distance_imperial_whole_miles() {
        assert_eq!(format_distance(1609, UnitSystem::Imperial, '.').as_str(), "1mi");
        assert_eq!(format_distance(3218, UnitSystem::Imperial, '.').as_str(), "2mi");
    }

    #[test]
    fn test_distance_imperial_sub_mile_uses_separator() {
        assert_eq!(format_distance(161, UnitSystem::Imperial, ',').as_str(), ",1mi");
        assert_eq!(format_distance(805, UnitSystem::Imperial, '.').as_str(), ".5mi");
        assert_eq!(format_distance(0, UnitSystem::Imperial, '.').as_str(), ".0mi");
    }
}
