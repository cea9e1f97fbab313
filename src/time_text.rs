//! Derivation of the sidebar's time and date strings.
//!
//! [`TimeText`] holds every string the widgets render. It is recomputed once
//! per time tick (per second while a seconds widget is active, else per
//! minute) and read many times per draw, so widgets never format text in
//! their own draw path.
//!
//! All fields are bounded `heapless` strings of 8 bytes. That covers every
//! abbreviation in the localization tables today; a longer locale string
//! would be cut off at the capacity, not wrap or panic.

use core::fmt::Write;

use heapless::String;

use crate::localization;
use crate::settings::{ClockStyle, Settings};

/// Bounded buffer for one derived time/date string.
pub type TimeField = String<8>;

/// One calendar wall-clock sample, as handed to the time-tick entrypoint.
///
/// The platform clock service (or `chrono` in the simulator) supplies all
/// derived calendar fields; nothing here is computed from the others.
#[derive(Clone, Copy, Debug)]
pub struct TimeSample {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Day of week, 0 = Sunday.
    pub weekday: u8,
    /// Day of month, 1-31.
    pub day_of_month: u8,
    /// Month, 0 = January.
    pub month: u8,
    /// Ordinal day of year, 1-366.
    pub day_of_year: u16,
    /// ISO 8601 week number, 1-53.
    pub iso_week: u8,
}

/// The derived display strings, one field per widget text line.
///
/// Invariants kept by [`TimeText::update`]:
/// - `hours` is always exactly two characters, zero-padded or space-padded
///   per the leading-zero setting, never both;
/// - `day_num` is a bare 1-2 digit value with no padding at all;
/// - `week_num` stays two-digit zero-padded (ISO convention);
/// - `seconds` carries its leading `:` so the widget renders it verbatim.
#[derive(Clone, Default, Debug)]
pub struct TimeText {
    pub day_name: TimeField,
    pub day_num: TimeField,
    pub month: TimeField,
    pub week_num: TimeField,
    pub day_of_year: TimeField,
    pub seconds: TimeField,
    pub hours: TimeField,
    pub minutes: TimeField,
    pub alt_hour: TimeField,
}

impl TimeText {
    /// Recompute every derived string from a fresh wall-clock sample.
    ///
    /// Deterministic: the same sample and settings always reproduce the
    /// same strings.
    pub fn update(&mut self, sample: &TimeSample, settings: &Settings) {
        self.day_num.clear();
        let _ = write!(self.day_num, "{}", sample.day_of_month);

        self.week_num.clear();
        let _ = write!(self.week_num, "{:02}", sample.iso_week);

        self.day_of_year.clear();
        let _ = write!(self.day_of_year, "{}", sample.day_of_year);

        self.seconds.clear();
        let _ = write!(self.seconds, ":{:02}", sample.second);

        let display_hour = match settings.clock_style {
            ClockStyle::H24 => sample.hour,
            ClockStyle::H12 => to_12h(sample.hour),
        };
        self.hours.clear();
        let _ = write!(self.hours, "{display_hour:02}");
        if !settings.show_leading_zero {
            space_pad_leading_zero(&mut self.hours);
        }

        self.minutes.clear();
        let _ = write!(self.minutes, "{:02}", sample.minute);

        self.update_alt_hour(sample.hour, settings);

        self.day_name.clear();
        let _ = self.day_name.push_str(localization::day_name(
            settings.language_id,
            sample.weekday as usize,
        ));

        self.month.clear();
        let _ = self
            .month
            .push_str(localization::month_name(settings.language_id, sample.month as usize));
    }

    /// Derive the alternate-time-zone hour string.
    ///
    /// The configured offset is applied to the 24h source hour and the
    /// result normalized with a positive-safe modulus, so a negative offset
    /// past midnight wraps to the end of the range instead of going
    /// negative. In 12h style a normalized 0 reads as 12.
    fn update_alt_hour(&mut self, hour24: u8, settings: &Settings) {
        let shifted = i32::from(hour24) + settings.alt_clock_offset_hours;

        let alt = match settings.clock_style {
            ClockStyle::H24 => shifted.rem_euclid(24),
            ClockStyle::H12 => {
                let h = shifted.rem_euclid(12);
                if h == 0 { 12 } else { h }
            }
        };

        self.alt_hour.clear();
        if settings.show_leading_zero && alt < 10 {
            let _ = write!(self.alt_hour, "0{alt}");
        } else {
            let _ = write!(self.alt_hour, "{alt}");
        }
    }
}

/// Convert a 24h hour to the 12h clock face (0 and 12 both read as 12).
#[inline]
const fn to_12h(hour24: u8) -> u8 {
    let h = hour24 % 12;
    if h == 0 { 12 } else { h }
}

/// Replace a leading '0' with a space, keeping the field width unchanged.
fn space_pad_leading_zero(field: &mut TimeField) {
    let current = field.clone();
    if let Some(rest) = current.as_str().strip_prefix('0') {
        field.clear();
        let _ = field.push(' ');
        let _ = field.push_str(rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn sample() -> TimeSample {
        TimeSample {
            hour: 5,
            minute: 7,
            second: 4,
            weekday: 3,
            day_of_month: 9,
            month: 1,
            day_of_year: 41,
            iso_week: 7,
        }
    }

    #[test]
    fn test_leading_zero_suppressed_keeps_width() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.show_leading_zero = false;

        text.update(&sample(), &settings);
        assert_eq!(text.hours.as_str(), " 5", "suppressed zero must become a space");
        assert_eq!(text.hours.len(), 2, "hour field width must not change");
    }

    #[test]
    fn test_leading_zero_shown_when_enabled() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.show_leading_zero = true;

        text.update(&sample(), &settings);
        assert_eq!(text.hours.as_str(), "05");
    }

    #[test]
    fn test_minutes_and_seconds_always_zero_padded() {
        let mut text = TimeText::default();
        text.update(&sample(), &Settings::default());
        assert_eq!(text.minutes.as_str(), "07");
        assert_eq!(text.seconds.as_str(), ":04");
    }

    #[test]
    fn test_day_number_unpadded_week_number_padded() {
        let mut text = TimeText::default();
        text.update(&sample(), &Settings::default());
        assert_eq!(text.day_num.as_str(), "9");
        assert_eq!(text.week_num.as_str(), "07");
        assert_eq!(text.day_of_year.as_str(), "41");
    }

    #[test]
    fn test_twelve_hour_midnight_reads_twelve() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.clock_style = ClockStyle::H12;
        settings.show_leading_zero = true;

        let mut s = sample();
        s.hour = 0;
        text.update(&s, &settings);
        assert_eq!(text.hours.as_str(), "12");
    }

    #[test]
    fn test_negative_alt_offset_wraps_positive() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.clock_style = ClockStyle::H24;
        settings.alt_clock_offset_hours = -1;

        let mut s = sample();
        s.hour = 0;
        text.update(&s, &settings);
        assert_eq!(text.alt_hour.as_str(), "23", "-1 mod 24 must wrap to 23");
    }

    #[test]
    fn test_alt_hour_twelve_hour_zero_reads_twelve() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.clock_style = ClockStyle::H12;
        settings.alt_clock_offset_hours = -5;

        let mut s = sample();
        s.hour = 17; // 17 - 5 = 12 -> mod 12 = 0 -> displayed as 12
        text.update(&s, &settings);
        assert_eq!(text.alt_hour.as_str(), "12");
    }

    #[test]
    fn test_alt_hour_mirrors_leading_zero_setting() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.alt_clock_offset_hours = 3;

        settings.show_leading_zero = true;
        text.update(&sample(), &settings);
        assert_eq!(text.alt_hour.as_str(), "08");

        settings.show_leading_zero = false;
        text.update(&sample(), &settings);
        assert_eq!(text.alt_hour.as_str(), "8");
    }

    #[test]
    fn test_localized_names_follow_language_id() {
        let mut text = TimeText::default();
        let mut settings = Settings::default();
        settings.language_id = 1;

        text.update(&sample(), &settings);
        assert_eq!(text.day_name.as_str(), "Mit");
        assert_eq!(text.month.as_str(), "Feb");
    }

    #[test]
    fn test_repeated_updates_are_deterministic() {
        let settings = Settings::default();
        let s = sample();

        let mut first = TimeText::default();
        first.update(&s, &settings);

        let mut second = TimeText::default();
        for _ in 0..3 {
            second.update(&s, &settings);
        }

        assert_eq!(first.hours, second.hours);
        assert_eq!(first.minutes, second.minutes);
        assert_eq!(first.seconds, second.seconds);
        assert_eq!(first.day_name, second.day_name);
        assert_eq!(first.day_num, second.day_num);
        assert_eq!(first.month, second.month);
        assert_eq!(first.week_num, second.week_num);
        assert_eq!(first.day_of_year, second.day_of_year);
        assert_eq!(first.alt_hour, second.alt_hour);
    }
}
