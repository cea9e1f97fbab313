//! Pre-computed text styles and sidebar font selection.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so every fixed style lives in the binary's
//! read-only data instead of being rebuilt each frame. Styles that need a
//! settings-driven color are created at the call site from the exposed font
//! references.
//!
//! All sidebar text is positioned by its top edge (`Baseline::Top`) so draw
//! code can hand a widget-relative y coordinate straight to [`Text`] without
//! per-font baseline arithmetic.
//!
//! [`Text`]: embedded_graphics::text::Text

use embedded_graphics::{
    mono_font::{MonoFont, ascii::FONT_6X10},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use crate::settings::FontSize;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text anchored by its top edge. Used for nearly all sidebar text.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text anchored by its top edge. Used by the time widget's
/// stacked hour/minute lines.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10). Week/day labels, battery percent, sleep minutes.
pub const SM_FONT: &MonoFont = &FONT_6X10;

/// Medium value font. Default font for widget values.
pub const MD_FONT: &MonoFont = &PROFONT_12_POINT;

/// Large value font. Hour/minute digits, and all values in large-font mode.
pub const LG_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Settings-driven Font Selection
// =============================================================================

/// Font used for widget values under the given font-size setting.
pub const fn value_font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Normal => MD_FONT,
        FontSize::Large => LG_FONT,
    }
}

/// Font used for the battery percent readout. Smaller than the value font in
/// normal mode so the percent fits beside the icon.
pub const fn battery_font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Normal => SM_FONT,
        FontSize::Large => LG_FONT,
    }
}
