//! Property-level tests for the estimation engine
//!
//! Exercises the public API the way a consumer would: causality,
//! superposition, decay behavior, window boundaries, and determinism.

use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use peptikin::prelude::*;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

/// 5-day half-life, 24 h absorption, 24 h plateau, 0.95 peak, 15 mg/week
fn profile() -> DrugProfile {
    DrugProfile::new(120.0, 24.0, 0.95, 15.0).unwrap()
}

fn single_dose() -> DoseEvent {
    DoseEvent::new(10.0, t0()).unwrap()
}

#[test]
fn causality_no_contribution_before_administration() {
    let dose = single_dose();
    let p = profile();
    for hours_before in [1, 24, 168, 10_000] {
        let at = t0() - Duration::hours(hours_before);
        assert_eq!(dose_contribution(&dose, &p, at), 0.0);
    }
}

#[test]
fn non_negativity_across_all_phases() {
    let history = DoseHistory::builder("Tirzepatide")
        .id("prop")
        .dose(t0(), 2.5)
        .repeat(10, 168.0)
        .build()
        .unwrap();
    let p = profile();

    for sample in history.time_series(&p, t0() - Duration::hours(48), 2400.0, 3.0) {
        assert!(sample.level_mg >= 0.0);
    }
}

#[test]
fn superposition_of_two_doses() {
    let d1 = DoseEvent::new(10.0, t0()).unwrap();
    let d2 = DoseEvent::new(5.0, t0() + Duration::hours(72)).unwrap();
    let p = profile();

    for hours in [0, 12, 36, 80, 200, 500] {
        let at = t0() + Duration::hours(hours);
        let summed = dose_contribution(&d1, &p, at) + dose_contribution(&d2, &p, at);
        let both = [d1.clone(), d2.clone()];
        assert_relative_eq!(cumulative_level(&both, &p, at), summed, max_relative = 1e-12);
        // order does not matter
        let reversed = [d2.clone(), d1.clone()];
        assert_relative_eq!(
            cumulative_level(&reversed, &p, at),
            summed,
            max_relative = 1e-12
        );
    }
}

#[test]
fn decay_is_monotonically_decreasing() {
    let dose = single_dose();
    let p = profile();
    // plateau ends 48 h after administration
    let mut previous = f64::INFINITY;
    for hours in (48..=1200).step_by(24) {
        let level = dose_contribution(&dose, &p, t0() + Duration::hours(hours as i64));
        assert!(level <= previous);
        previous = level;
    }
}

#[test]
fn half_life_halves_the_plateau_level() {
    // peak fraction of 1 so the plateau level equals the dose amount
    let p = DrugProfile::new(120.0, 24.0, 1.0, 15.0).unwrap();
    let dose = single_dose();

    // plateau end + one half-life
    let at = t0() + Duration::hours(48 + 120);
    assert_relative_eq!(
        dose_contribution(&dose, &p, at),
        5.0,
        max_relative = 1e-12
    );
}

#[test]
fn weekly_window_boundary_is_exact_to_the_second() {
    let p = profile();
    let now = t0() + Duration::days(30);

    // 7 days and 1 second before now: excluded
    let too_old = DoseEvent::new(10.0, now - Duration::days(7) - Duration::seconds(1)).unwrap();
    let weekly = validate_weekly_total(&[too_old], &p, now);
    assert_eq!(weekly.total_mg, 0.0);
    assert!(weekly.within_limit);

    // exactly 7 days before now: included
    let boundary = DoseEvent::new(10.0, now - Duration::days(7)).unwrap();
    let weekly = validate_weekly_total(&[boundary], &p, now);
    assert_eq!(weekly.total_mg, 10.0);

    // 6 days 23 hours before now: included
    let recent = DoseEvent::new(10.0, now - Duration::days(6) - Duration::hours(23)).unwrap();
    let weekly = validate_weekly_total(&[recent], &p, now);
    assert_eq!(weekly.total_mg, 10.0);
}

#[test]
fn engine_calls_are_idempotent() {
    let history = DoseHistory::builder("Tirzepatide")
        .id("prop")
        .dose(t0(), 10.0)
        .dose(t0() + Duration::hours(168), 10.0)
        .build()
        .unwrap();
    let p = profile();
    let now = t0() + Duration::hours(200);

    assert_eq!(history.level_at(&p, now), history.level_at(&p, now));
    assert_eq!(
        history.peak_trough(&p, t0(), 336.0),
        history.peak_trough(&p, t0(), 336.0)
    );
    assert_eq!(
        history.weekly_total(&p, now),
        history.weekly_total(&p, now)
    );
    assert_eq!(
        history.next_dose(&p, 0.1, now),
        history.next_dose(&p, 0.1, now)
    );

    let first: Vec<_> = history.time_series(&p, t0(), 336.0, 1.0).collect();
    let second: Vec<_> = history.time_series(&p, t0(), 336.0, 1.0).collect();
    assert_eq!(first, second);
}

/// The worked example: 10 mg dose against a 120 h half-life profile.
#[test]
fn reference_scenario_single_dose() {
    let p = profile();
    let dose = single_dose();

    // at administration
    assert_eq!(dose_contribution(&dose, &p, t0()), 0.0);
    // end of absorption: plateau at 95% of the dose
    assert_relative_eq!(
        dose_contribution(&dose, &p, t0() + Duration::hours(24)),
        9.5,
        max_relative = 1e-12
    );
    // one half-life past the plateau end
    assert_relative_eq!(
        dose_contribution(&dose, &p, t0() + Duration::hours(48 + 120)),
        4.75,
        max_relative = 1e-12
    );

    // weekly total three days in
    let weekly = validate_weekly_total(&[dose.clone()], &p, t0() + Duration::days(3));
    assert_eq!(weekly.total_mg, 10.0);
    assert_eq!(weekly.remaining_mg, 5.0);
    assert!(weekly.within_limit);

    // a second 10 mg dose an hour later breaches the 15 mg limit
    let second = DoseEvent::new(10.0, t0() + Duration::hours(1)).unwrap();
    let weekly = validate_weekly_total(&[dose, second], &p, t0() + Duration::days(3));
    assert_eq!(weekly.total_mg, 20.0);
    assert!(!weekly.within_limit);
    assert_eq!(weekly.remaining_mg, -5.0);
}

#[test]
fn recommendation_with_library_defaults() {
    let history = DoseHistory::builder("Tirzepatide")
        .id("user_001")
        .dose(t0(), 2.5)
        .build()
        .unwrap();
    let p = history.library_profile().unwrap();

    // shortly after the dose the level is well above a 0.1 mg floor
    let rec = history.next_dose(p, 0.1, t0() + Duration::hours(36));
    assert!(!rec.due_now);
    assert!(rec.eta_hours.unwrap() > 0.0);

    // months later the level has decayed below it
    let rec = history.next_dose(p, 0.1, t0() + Duration::days(120));
    assert!(rec.due_now);
}
