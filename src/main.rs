// Crate-level lints: allow the usual embedded/graphics casting patterns
#![allow(clippy::cast_possible_truncation)] // intentional i32/u32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32 -> f32 in bar-width math
#![allow(clippy::cast_possible_wrap)] // u32 -> i32 wrapping is fine for our ranges
#![allow(clippy::cast_sign_loss)] // i32 -> u32 where the sign is known positive

//! Sidebar watchface simulator.
//!
//! Renders the stacked-widget sidebar of a 144x168 wearable display in an
//! SDL2 window and feeds it synthetic platform data so every widget can be
//! exercised without hardware.
//!
//! The per-tick flow matches the watch firmware: sample the wall clock,
//! derive the time strings once, peek the battery/weather/health snapshots,
//! then hand one immutable render context to the layout engine.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | F | Toggle font size (normal / large) |
//! | C | Toggle compact mode |
//! | U | Toggle metric / imperial units |
//! | T | Toggle 12h / 24h clock |
//! | Z | Toggle leading zero on the hour |
//! | S | Move the sidebar to the other display edge |
//! | P | Toggle battery percent text |
//! | B | Toggle charging |
//! | D | Toggle phone connection |
//! | L | Cycle display language |
//! | W | Cycle the bottom widget slot through every tag |
//! | H | Toggle simulated sleep (health feature) |
//! | M | Toggle steps / distance display (health feature) |

mod colors;
mod config;
#[cfg(feature = "health")]
mod health;
mod icons;
mod layout;
mod localization;
mod render;
mod services;
mod settings;
mod styles;
mod time_text;
mod units;
mod widgets;

use std::thread;
use std::time::Instant;

use chrono::{Datelike, Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;

use colors::{FACE_BG, SIDEBAR_TEAL};
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SIDEBAR_WIDTH, SIDEBAR_X_LEFT, SIDEBAR_X_RIGHT};
use icons::{IconSet, WeatherIcon};
use layout::SidebarLayout;
use render::RenderContext;
use services::{BatteryReading, WeatherReport};
#[cfg(feature = "health")]
use services::{Activity, HealthReading};
#[cfg(feature = "health")]
use settings::HealthDisplay;
use settings::{ClockStyle, FontSize, Settings, UnitSystem};
use time_text::{TimeSample, TimeText};
use widgets::WidgetType;

/// Seconds before the synthetic weather report "arrives". Until then the
/// weather widgets show their placeholder.
const WEATHER_ARRIVAL_SECS: u64 = 5;

/// Vertical origin of the widget stack.
const STACK_ORIGIN_Y: i32 = 3;

/// Select the three widget slots for the current connection state. The
/// disconnect panel takes the middle slot while the phone link is down.
fn build_layout(connected: bool, bottom_raw_tag: u8) -> SidebarLayout {
    let middle = if connected { WidgetType::Time } else { WidgetType::BluetoothDisconnect };
    SidebarLayout::from_types(&[
        WidgetType::WeatherCurrent,
        middle,
        WidgetType::from_raw(bottom_raw_tag),
    ])
}

/// Take a calendar sample from the OS wall clock.
fn sample_wall_clock() -> TimeSample {
    let now = Local::now();
    TimeSample {
        hour: now.hour() as u8,
        minute: now.minute() as u8,
        second: now.second() as u8,
        weekday: now.weekday().num_days_from_sunday() as u8,
        day_of_month: now.day() as u8,
        month: now.month0() as u8,
        day_of_year: now.ordinal() as u16,
        iso_week: now.iso_week().week() as u8,
    }
}

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Sidebar Watchface Sim", &output_settings);

    // Resources live for the whole process; dropped once on exit.
    let icons = IconSet::load();

    let mut settings = Settings::default();
    let mut x_offset = SIDEBAR_X_RIGHT;
    let mut compact = false;
    let mut connected = true;
    let mut charging = false;

    // Bottom slot is cycled with W through every raw tag, including the
    // out-of-range ones that resolve to the no-op widget.
    let mut bottom_raw_tag: u8 = 0;
    let mut slots_dirty = false;
    let mut layout = build_layout(connected, bottom_raw_tag);

    let mut time_text = TimeText::default();
    let mut last_sample = sample_wall_clock();
    let mut time_dirty = true;

    #[cfg(feature = "health")]
    let mut sleep_sim = false;
    #[cfg(feature = "health")]
    let mut woke_at: Option<Instant> = None;

    let started = Instant::now();
    let mut weather_logged = false;

    info!("sidebar simulator up, {SCREEN_WIDTH}x{SCREEN_HEIGHT}, strip {SIDEBAR_WIDTH}px");

    // the SDL window is created lazily by the first update; it must exist
    // before events() is polled
    display.clear(FACE_BG).ok();
    window.update(&display);

    'running: loop {
        // ------------------------------------------------------------------
        // Input
        // ------------------------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat: false, .. } => {
                    match keycode {
                        Keycode::F => {
                            settings.font_size = match settings.font_size {
                                FontSize::Normal => FontSize::Large,
                                FontSize::Large => FontSize::Normal,
                            };
                            info!("font size -> {:?}", settings.font_size);
                        }
                        Keycode::C => {
                            compact = !compact;
                            info!("compact mode -> {compact}");
                        }
                        Keycode::U => {
                            settings.units = match settings.units {
                                UnitSystem::Metric => UnitSystem::Imperial,
                                UnitSystem::Imperial => UnitSystem::Metric,
                            };
                            info!("units -> {:?}", settings.units);
                        }
                        Keycode::T => {
                            settings.clock_style = match settings.clock_style {
                                ClockStyle::H12 => ClockStyle::H24,
                                ClockStyle::H24 => ClockStyle::H12,
                            };
                            time_dirty = true;
                        }
                        Keycode::Z => {
                            settings.show_leading_zero = !settings.show_leading_zero;
                            time_dirty = true;
                        }
                        Keycode::S => {
                            x_offset = if x_offset == SIDEBAR_X_RIGHT { SIDEBAR_X_LEFT } else { SIDEBAR_X_RIGHT };
                        }
                        Keycode::P => {
                            settings.show_battery_percent = !settings.show_battery_percent;
                        }
                        Keycode::B => {
                            charging = !charging;
                            info!("charging -> {charging}");
                        }
                        Keycode::D => {
                            connected = !connected;
                            slots_dirty = true;
                            info!("phone link -> {connected}");
                        }
                        Keycode::L => {
                            settings.language_id = (settings.language_id + 1) % localization::LANGUAGE_COUNT;
                            time_dirty = true;
                        }
                        Keycode::W => {
                            bottom_raw_tag = (bottom_raw_tag + 1) % 12;
                            slots_dirty = true;
                            info!("bottom slot tag -> {bottom_raw_tag}");
                        }
                        #[cfg(feature = "health")]
                        Keycode::H => {
                            sleep_sim = !sleep_sim;
                            woke_at = if sleep_sim { None } else { Some(Instant::now()) };
                            info!("sleep sim -> {sleep_sim}");
                        }
                        #[cfg(feature = "health")]
                        Keycode::M => {
                            settings.health_display = match settings.health_display {
                                HealthDisplay::Steps => HealthDisplay::Distance,
                                HealthDisplay::Distance => HealthDisplay::Steps,
                            };
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ------------------------------------------------------------------
        // Time tick: re-derive strings when the second rolls over or a
        // setting that feeds them changed
        // ------------------------------------------------------------------
        let sample = sample_wall_clock();
        if time_dirty || sample.second != last_sample.second {
            time_text.update(&sample, &settings);
            last_sample = sample;
            time_dirty = false;
        }

        // ------------------------------------------------------------------
        // Synthetic platform snapshots
        // ------------------------------------------------------------------
        let elapsed = started.elapsed().as_secs();

        let battery = BatteryReading {
            percent: (100 - (elapsed / 4) % 101) as u8,
            charging,
        };

        let weather = if elapsed >= WEATHER_ARRIVAL_SECS {
            if !weather_logged {
                info!("weather report arrived");
                weather_logged = true;
            }
            // cycle through every condition icon so the whole set gets
            // exercised in the window
            const CONDITIONS: [WeatherIcon; 6] = [
                WeatherIcon::Clear,
                WeatherIcon::PartlyCloudy,
                WeatherIcon::Cloudy,
                WeatherIcon::Rain,
                WeatherIcon::Snow,
                WeatherIcon::Thunder,
            ];
            let current = CONDITIONS[(elapsed / 10) as usize % CONDITIONS.len()];
            WeatherReport {
                current_temp_c: Some(21),
                forecast_high_c: Some(24),
                forecast_low_c: Some(14),
                current_icon: Some(current),
                forecast_icon: Some(WeatherIcon::Rain),
            }
        } else {
            WeatherReport::default()
        };

        #[cfg(feature = "health")]
        let health = HealthReading {
            available: true,
            current_activity: if sleep_sim { Activity::Sleep } else { Activity::Walk },
            seconds_since_sleep: woke_at.map(|t| t.elapsed().as_secs() as u32),
            steps_today: 4000 + (elapsed * 3) as u32,
            distance_today_m: 2800 + (elapsed * 2) as u32,
            sleep_today_s: 7 * 3600 + 23 * 60,
            restful_sleep_today_s: 3 * 3600 + 40 * 60,
        };

        // ------------------------------------------------------------------
        // Widget selection
        // ------------------------------------------------------------------
        if slots_dirty {
            layout = build_layout(connected, bottom_raw_tag);
            slots_dirty = false;
        }

        // ------------------------------------------------------------------
        // Render
        // ------------------------------------------------------------------
        let ctx = RenderContext {
            settings: &settings,
            time: &time_text,
            battery,
            connected,
            weather: &weather,
            #[cfg(feature = "health")]
            health: &health,
            icons: &icons,
            x_offset,
            compact,
        };

        display.clear(FACE_BG).ok();
        Rectangle::new(Point::new(x_offset, 0), Size::new(SIDEBAR_WIDTH, SCREEN_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(SIDEBAR_TEAL))
            .draw(&mut display)
            .ok();

        layout.render(&mut display, &ctx, STACK_ORIGIN_Y);

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
