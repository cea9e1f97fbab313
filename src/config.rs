//! Display and sidebar layout constants.
//!
//! Everything here is computed at compile time. The sidebar geometry is used
//! by every widget, so the numbers live in one place instead of being
//! re-derived in each draw function.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (rectangular wearable panel, 144x168).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Sidebar Geometry
// =============================================================================

/// Width of the sidebar strip in pixels.
pub const SIDEBAR_WIDTH: u32 = 30;

/// Horizontal pixel offset of widget draws when the sidebar sits on the
/// right edge of the display.
pub const SIDEBAR_X_RIGHT: i32 = (SCREEN_WIDTH - SIDEBAR_WIDTH) as i32;

/// Horizontal pixel offset when the sidebar sits on the left edge.
pub const SIDEBAR_X_LEFT: i32 = 0;

/// Horizontal center of the sidebar strip, relative to its x offset.
/// Centered text is anchored here.
pub const SIDEBAR_CENTER: i32 = (SIDEBAR_WIDTH / 2) as i32;

/// Maximum number of widgets stacked in one sidebar. The configuration
/// subsystem exposes three slots (top, middle, bottom).
pub const MAX_SIDEBAR_WIDGETS: usize = 3;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time for the simulator loop (~30 FPS). The widgets only
/// change once per second, so there is no point rendering faster.
pub const FRAME_TIME: Duration = Duration::from_millis(33);
