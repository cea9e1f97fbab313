//! Vector icon set for the sidebar widgets.
//!
//! Icons are closed enums drawn from primitives and recolored on every
//! draw call from the settings color pair, so no bitmap assets are needed.
//! Each icon fits a 25x25 box anchored at its top-left origin.
//!
//! [`IconSet`] models the resource lifecycle: slots are populated once at
//! startup by [`IconSet::load`] and dropped once at shutdown. A widget that
//! finds its slot empty skips only the icon draw and still renders its
//! text.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, Triangle},
};

/// Built-in sidebar icons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// Calendar page behind the day-of-month number.
    DateBackground,
    /// Crossed-out circle shown while the phone link is down.
    Disconnected,
    /// Battery body and terminal nub.
    BatteryOutline,
    /// Lightning bolt drawn over the battery while charging.
    ChargeBolt,
    /// Crescent moon with trailing z's for sleep mode.
    SleepMoon,
    /// Footprint pair for step mode.
    StepsFeet,
}

impl Icon {
    /// Draw the icon at `origin`, recolored with the given fill/stroke pair.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        origin: Point,
        fill: Rgb565,
        stroke: Rgb565,
    ) {
        let outlined = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(stroke)
            .stroke_width(1)
            .build();
        let solid = PrimitiveStyle::with_fill(stroke);
        let hairline = PrimitiveStyle::with_stroke(stroke, 1);

        match self {
            Icon::DateBackground => {
                // page with a solid header strip and two binder rings
                RoundedRectangle::with_equal_corners(
                    Rectangle::new(origin + Point::new(0, 3), Size::new(24, 19)),
                    Size::new(2, 2),
                )
                .into_styled(outlined)
                .draw(display)
                .ok();
                Rectangle::new(origin + Point::new(1, 4), Size::new(22, 5))
                    .into_styled(solid)
                    .draw(display)
                    .ok();
                Rectangle::new(origin + Point::new(5, 0), Size::new(2, 6))
                    .into_styled(solid)
                    .draw(display)
                    .ok();
                Rectangle::new(origin + Point::new(17, 0), Size::new(2, 6))
                    .into_styled(solid)
                    .draw(display)
                    .ok();
            }
            Icon::Disconnected => {
                Circle::new(origin + Point::new(3, 1), 18)
                    .into_styled(outlined)
                    .draw(display)
                    .ok();
                Line::new(origin + Point::new(6, 16), origin + Point::new(18, 4))
                    .into_styled(hairline)
                    .draw(display)
                    .ok();
            }
            Icon::BatteryOutline => {
                RoundedRectangle::with_equal_corners(
                    Rectangle::new(origin + Point::new(0, 1), Size::new(21, 12)),
                    Size::new(2, 2),
                )
                .into_styled(outlined)
                .draw(display)
                .ok();
                // terminal nub
                Rectangle::new(origin + Point::new(21, 4), Size::new(2, 6))
                    .into_styled(solid)
                    .draw(display)
                    .ok();
            }
            Icon::ChargeBolt => {
                Triangle::new(
                    origin + Point::new(12, 1),
                    origin + Point::new(6, 8),
                    origin + Point::new(11, 8),
                )
                .into_styled(solid)
                .draw(display)
                .ok();
                Triangle::new(
                    origin + Point::new(10, 13),
                    origin + Point::new(16, 6),
                    origin + Point::new(11, 6),
                )
                .into_styled(solid)
                .draw(display)
                .ok();
            }
            Icon::SleepMoon => {
                Circle::new(origin + Point::new(0, 5), 14)
                    .into_styled(outlined)
                    .draw(display)
                    .ok();
                // two trailing z's
                for (zx, zy, w) in [(16, 4, 6), (18, 12, 4)] {
                    let top_left = origin + Point::new(zx, zy);
                    let top_right = top_left + Point::new(w, 0);
                    let bottom_left = top_left + Point::new(0, w);
                    let bottom_right = top_right + Point::new(0, w);
                    Line::new(top_left, top_right).into_styled(hairline).draw(display).ok();
                    Line::new(top_right, bottom_left).into_styled(hairline).draw(display).ok();
                    Line::new(bottom_left, bottom_right).into_styled(hairline).draw(display).ok();
                }
            }
            Icon::StepsFeet => {
                // left and right footprint, sole plus toe pad
                for (sx, sy) in [(2, 3), (13, 9)] {
                    let sole = origin + Point::new(sx, sy);
                    RoundedRectangle::with_equal_corners(
                        Rectangle::new(sole, Size::new(8, 11)),
                        Size::new(3, 3),
                    )
                    .into_styled(outlined)
                    .draw(display)
                    .ok();
                    Circle::new(sole + Point::new(2, -3), 4)
                        .into_styled(solid)
                        .draw(display)
                        .ok();
                }
            }
        }
    }
}

/// Condition icons delivered with a weather report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Thunder,
}

impl WeatherIcon {
    /// Draw the condition icon at `origin` with the settings color pair.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        origin: Point,
        fill: Rgb565,
        stroke: Rgb565,
    ) {
        let outlined = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(stroke)
            .stroke_width(1)
            .build();
        let solid = PrimitiveStyle::with_fill(stroke);
        let hairline = PrimitiveStyle::with_stroke(stroke, 1);

        match self {
            WeatherIcon::Clear => {
                Circle::new(origin + Point::new(7, 7), 11).into_styled(outlined).draw(display).ok();
                for (from, to) in [
                    (Point::new(12, 0), Point::new(12, 4)),
                    (Point::new(12, 20), Point::new(12, 24)),
                    (Point::new(0, 12), Point::new(4, 12)),
                    (Point::new(20, 12), Point::new(24, 12)),
                    (Point::new(4, 4), Point::new(7, 7)),
                    (Point::new(20, 4), Point::new(17, 7)),
                    (Point::new(4, 20), Point::new(7, 17)),
                    (Point::new(20, 20), Point::new(17, 17)),
                ] {
                    Line::new(origin + from, origin + to).into_styled(hairline).draw(display).ok();
                }
            }
            WeatherIcon::PartlyCloudy => {
                Circle::new(origin + Point::new(11, 2), 10).into_styled(outlined).draw(display).ok();
                draw_cloud(display, origin + Point::new(0, 9), outlined);
            }
            WeatherIcon::Cloudy => {
                draw_cloud(display, origin + Point::new(0, 6), outlined);
            }
            WeatherIcon::Rain => {
                draw_cloud(display, origin + Point::new(0, 3), outlined);
                for x in [5, 11, 17] {
                    Line::new(origin + Point::new(x, 18), origin + Point::new(x - 2, 23))
                        .into_styled(hairline)
                        .draw(display)
                        .ok();
                }
            }
            WeatherIcon::Snow => {
                draw_cloud(display, origin + Point::new(0, 3), outlined);
                for x in [4, 10, 16] {
                    Circle::new(origin + Point::new(x, 20), 3).into_styled(solid).draw(display).ok();
                }
            }
            WeatherIcon::Thunder => {
                draw_cloud(display, origin + Point::new(0, 3), outlined);
                Triangle::new(
                    origin + Point::new(13, 14),
                    origin + Point::new(8, 21),
                    origin + Point::new(12, 21),
                )
                .into_styled(solid)
                .draw(display)
                .ok();
                Triangle::new(
                    origin + Point::new(11, 25),
                    origin + Point::new(16, 18),
                    origin + Point::new(12, 18),
                )
                .into_styled(solid)
                .draw(display)
                .ok();
            }
        }
    }
}

/// Shared cloud body: two lobes over a flat base, 25px wide.
fn draw_cloud<D: DrawTarget<Color = Rgb565>>(display: &mut D, origin: Point, style: PrimitiveStyle<Rgb565>) {
    Circle::new(origin + Point::new(2, 2), 10).into_styled(style).draw(display).ok();
    Circle::new(origin + Point::new(9, 0), 13).into_styled(style).draw(display).ok();
    RoundedRectangle::with_equal_corners(
        Rectangle::new(origin + Point::new(0, 7), Size::new(25, 8)),
        Size::new(3, 3),
    )
    .into_styled(style)
    .draw(display)
    .ok();
}

/// The sidebar's icon resources, acquired once at startup.
///
/// Every slot is optional: a missing resource must never abort a render,
/// it only suppresses that one icon draw.
#[derive(Clone, Copy, Debug)]
pub struct IconSet {
    pub date_bg: Option<Icon>,
    pub disconnected: Option<Icon>,
    pub battery: Option<Icon>,
    pub charge: Option<Icon>,
    pub sleep: Option<Icon>,
    pub steps: Option<Icon>,
}

impl IconSet {
    /// Acquire all icon resources. Called once at startup; the set is
    /// dropped exactly once at shutdown.
    pub fn load() -> Self {
        Self {
            date_bg: Some(Icon::DateBackground),
            disconnected: Some(Icon::Disconnected),
            battery: Some(Icon::BatteryOutline),
            charge: Some(Icon::ChargeBolt),
            sleep: Some(Icon::SleepMoon),
            steps: Some(Icon::StepsFeet),
        }
    }

    /// A set with every resource missing, for exercising the degraded
    /// text-only render path.
    #[cfg(test)]
    pub fn missing() -> Self {
        Self {
            date_bg: None,
            disconnected: None,
            battery: None,
            charge: None,
            sleep: None,
            steps: None,
        }
    }
}
