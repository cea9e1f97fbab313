//! Per-language name tables for the date widgets.
//!
//! Tables are indexed by the settings language id. Every lookup validates
//! its indices; an out-of-range language id (stale persisted value from an
//! older firmware) silently falls back to language 0 rather than panicking.
//!
//! Names are kept short enough for the 30px strip in the small label font.
//! The derived-string buffers cap fields at 8 bytes, so anything longer
//! would truncate silently - worth rechecking when adding a language.

/// Number of languages in the tables below.
pub const LANGUAGE_COUNT: usize = 4;

/// Language ids, in table order: English, German, Spanish, French.
pub const LANG_EN: usize = 0;

/// Abbreviated day names, indexed `[language][weekday]`, weekday 0 = Sunday.
const DAY_NAMES: [[&str; 7]; LANGUAGE_COUNT] = [
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    ["Son", "Mon", "Die", "Mit", "Don", "Fre", "Sam"],
    ["dom", "lun", "mar", "mie", "jue", "vie", "sab"],
    ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
];

/// Abbreviated month names, indexed `[language][month]`, month 0 = January.
const MONTH_NAMES: [[&str; 12]; LANGUAGE_COUNT] = [
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    ["Jan", "Feb", "Mar", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"],
    ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic"],
    ["jan", "fev", "mars", "avr", "mai", "juin", "juil", "aout", "sep", "oct", "nov", "dec"],
];

/// Label word drawn above the week-number value.
const WORD_FOR_WEEK: [&str; LANGUAGE_COUNT] = ["Week", "Wo", "Sem", "Sem"];

/// Label word drawn above the day-of-year value.
const WORD_FOR_DAY: [&str; LANGUAGE_COUNT] = ["Day", "Tag", "Dia", "Jour"];

/// Clamp a language id to the table range, falling back to English.
#[inline]
const fn lang_index(language_id: usize) -> usize {
    if language_id < LANGUAGE_COUNT { language_id } else { LANG_EN }
}

/// Localized abbreviated day name. `weekday` 0 = Sunday; out-of-range
/// weekdays map to Sunday so a corrupt sample cannot panic the render path.
pub fn day_name(language_id: usize, weekday: usize) -> &'static str {
    let days = &DAY_NAMES[lang_index(language_id)];
    days[if weekday < days.len() { weekday } else { 0 }]
}

/// Localized abbreviated month name. `month` 0 = January.
pub fn month_name(language_id: usize, month: usize) -> &'static str {
    let months = &MONTH_NAMES[lang_index(language_id)];
    months[if month < months.len() { month } else { 0 }]
}

/// Localized label for the week-number widget.
pub fn word_for_week(language_id: usize) -> &'static str {
    WORD_FOR_WEEK[lang_index(language_id)]
}

/// Localized label for the day-of-year widget.
pub fn word_for_day(language_id: usize) -> &'static str {
    WORD_FOR_DAY[lang_index(language_id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_lookup() {
        assert_eq!(day_name(0, 3), "Wed");
        assert_eq!(day_name(1, 3), "Mit");
        assert_eq!(month_name(0, 0), "Jan");
        assert_eq!(month_name(2, 7), "ago");
        assert_eq!(word_for_week(1), "Wo");
        assert_eq!(word_for_day(3), "Jour");
    }

    #[test]
    fn test_out_of_range_language_falls_back_to_english() {
        assert_eq!(day_name(99, 3), "Wed", "stale language id should fall back");
        assert_eq!(month_name(LANGUAGE_COUNT, 11), "Dec");
        assert_eq!(word_for_week(usize::MAX), "Week");
    }

    #[test]
    fn test_out_of_range_weekday_and_month_are_clamped() {
        assert_eq!(day_name(0, 7), "Sun");
        assert_eq!(month_name(0, 12), "Jan");
    }

    #[test]
    fn test_names_fit_derived_string_capacity() {
        for lang in 0..LANGUAGE_COUNT {
            for wd in 0..7 {
                assert!(day_name(lang, wd).len() <= 8);
            }
            for m in 0..12 {
                assert!(month_name(lang, m).len() <= 8);
            }
        }
    }
}
