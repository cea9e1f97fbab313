//! Color constants for the sidebar renderer.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The `RgbColor` trait constants are used where they exist; custom colors
//! are constructed with raw 5/6/5 channel values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Default text and icon stroke color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default icon fill color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Battery fill bar when charge drops to 20% or less.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Default sidebar strip background - muted teal, easy on OLED burn-in.
/// RGB565: (0, 42, 20).
pub const SIDEBAR_TEAL: Rgb565 = Rgb565::new(0, 42, 20);

/// Main watchface background behind the sidebar strip.
pub const FACE_BG: Rgb565 = Rgb565::BLACK;
