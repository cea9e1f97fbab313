//! Sleeping/Active resolution for the health widget.
//!
//! The mode is recomputed from scratch on every evaluation - there is no
//! persisted state machine, so a misread sample can never wedge the widget
//! in the wrong mode.

use crate::services::{Activity, HealthReading};

/// Trailing window in which a past sleep sample still counts as sleeping.
/// Covers the "just woke up" minutes where the sleep summary is more useful
/// than a near-zero step count.
pub const SLEEP_GRACE_SECS: u32 = 5 * 60;

/// Which health sub-panel renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HealthMode {
    Sleeping,
    Active,
}

/// Resolve the display mode from a health service peek.
///
/// Sleeping when the instantaneous classification is sleep or restful
/// sleep, or when any such sample landed within the trailing
/// [`SLEEP_GRACE_SECS`] window (inclusive). Unavailable data carries no
/// sleep signal and resolves to Active.
pub fn resolve_mode(health: &HealthReading) -> HealthMode {
    if !health.available {
        return HealthMode::Active;
    }

    if matches!(health.current_activity, Activity::Sleep | Activity::RestfulSleep) {
        return HealthMode::Sleeping;
    }

    match health.seconds_since_sleep {
        Some(age) if age <= SLEEP_GRACE_SECS => HealthMode::Sleeping,
        _ => HealthMode::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awake_reading() -> HealthReading {
        HealthReading { available: true, ..HealthReading::default() }
    }

    #[test]
    fn test_instantaneous_sleep_resolves_sleeping() {
        let mut health = awake_reading();
        health.current_activity = Activity::Sleep;
        assert_eq!(resolve_mode(&health), HealthMode::Sleeping);

        health.current_activity = Activity::RestfulSleep;
        assert_eq!(resolve_mode(&health), HealthMode::Sleeping);
    }

    #[test]
    fn test_recent_sleep_sample_keeps_sleep_mode() {
        let mut health = awake_reading();
        health.current_activity = Activity::None;
        health.seconds_since_sleep = Some(3 * 60);
        assert_eq!(
            resolve_mode(&health),
            HealthMode::Sleeping,
            "sample 3 minutes ago is inside the grace window"
        );
    }

    #[test]
    fn test_stale_sleep_sample_resolves_active() {
        let mut health = awake_reading();
        health.seconds_since_sleep = Some(10 * 60);
        assert_eq!(resolve_mode(&health), HealthMode::Active);
    }

    #[test]
    fn test_grace_window_boundary_is_inclusive() {
        let mut health = awake_reading();
        health.seconds_since_sleep = Some(SLEEP_GRACE_SECS);
        assert_eq!(resolve_mode(&health), HealthMode::Sleeping);

        health.seconds_since_sleep = Some(SLEEP_GRACE_SECS + 1);
        assert_eq!(resolve_mode(&health), HealthMode::Active);
    }

    #[test]
    fn test_unavailable_service_resolves_active() {
        let mut health = HealthReading::default();
        health.current_activity = Activity::Sleep;
        health.seconds_since_sleep = Some(0);
        assert_eq!(
            resolve_mode(&health),
            HealthMode::Active,
            "unavailable data must carry no sleep signal"
        );
    }

    #[test]
    fn test_awake_activities_resolve_active() {
        for activity in [Activity::None, Activity::Walk, Activity::Run] {
            let mut health = awake_reading();
            health.current_activity = activity;
            assert_eq!(resolve_mode(&health), HealthMode::Active);
        }
    }
}
