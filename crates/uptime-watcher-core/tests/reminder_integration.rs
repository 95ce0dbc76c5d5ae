//! Integration tests for the reminder policy.
//!
//! These drive the engine through full sample/response sequences against a
//! real state file and check what survives a reload.

use chrono::{Duration, FixedOffset, TimeZone};
use proptest::prelude::*;
use std::sync::Arc;
use uptime_watcher_core::reminder::{DelayScheduler, MAX_TOTAL_DELAY_SECS};
use uptime_watcher_core::{
    Action, DryRunRestarter, FixedClock, ReminderPolicyEngine, ReminderState, Response,
    StateStore, UptimeSample,
};

const BOOT: i64 = 1_760_000_000;

fn store(dir: &tempfile::TempDir) -> StateStore {
    StateStore::at(dir.path().join("state.toml"))
}

fn arb_state() -> impl Strategy<Value = ReminderState> {
    (
        0i64..2_000_000_000,
        0i64..2_000_000_000,
        any::<bool>(),
        prop_oneof![Just(0i64), 1i64..2_000_000_000],
        0u64..=MAX_TOTAL_DELAY_SECS,
        0i64..2_000_000_000,
    )
        .prop_map(
            |(
                last_reminder_time,
                ignore_until,
                ignore_today,
                last_boot_time,
                total_delay_time,
                delay_start_time,
            )| ReminderState {
                last_reminder_time,
                ignore_until,
                ignore_today,
                last_boot_time,
                total_delay_time,
                delay_start_time,
            },
        )
}

#[test]
fn test_first_run_shows_reminder_without_reboot_reset() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::at_timestamp(BOOT + 90_000);
    let mut engine = ReminderPolicyEngine::new(store(&dir), clock);
    assert_eq!(*engine.state(), ReminderState::default());

    let action = engine.on_sample(UptimeSample {
        uptime_seconds: 90_000,
        boot_time: BOOT,
    });

    assert!(matches!(action, Action::ShowReminder(ref p) if p.uptime_seconds == 90_000));
    assert_eq!(engine.state().last_boot_time, BOOT);
    assert_eq!(store(&dir).try_load().unwrap().last_boot_time, BOOT);
}

#[test]
fn test_new_day_clears_ignore_today() {
    let dir = tempfile::tempdir().unwrap();
    let utc = FixedOffset::east_opt(0).unwrap();
    let yesterday_late = utc.with_ymd_and_hms(2026, 10, 13, 23, 0, 0).unwrap();
    let today = utc.with_ymd_and_hms(2026, 10, 14, 8, 30, 0).unwrap();

    let state = ReminderState {
        ignore_today: true,
        last_reminder_time: yesterday_late.timestamp(),
        last_boot_time: BOOT,
        ..ReminderState::default()
    };
    let mut engine =
        ReminderPolicyEngine::with_state(store(&dir), FixedClock::new(today), state);

    let action = engine.on_sample(UptimeSample {
        uptime_seconds: 100_000,
        boot_time: BOOT,
    });
    assert!(matches!(action, Action::ShowReminder(_)));
    assert!(!engine.state().ignore_today);
}

#[test]
fn test_postpone_up_to_cap_then_only_floor() {
    let dir = tempfile::tempdir().unwrap();
    let now = BOOT + 250_000;
    let state = ReminderState {
        total_delay_time: 47 * 3600,
        delay_start_time: BOOT + 90_000,
        last_boot_time: BOOT,
        ..ReminderState::default()
    };
    let mut engine =
        ReminderPolicyEngine::with_state(store(&dir), FixedClock::at_timestamp(now), state);

    let Action::ShowReminder(prompt) = engine.on_sample(UptimeSample {
        uptime_seconds: 250_000,
        boot_time: BOOT,
    }) else {
        panic!("expected reminder");
    };
    assert_eq!(prompt.total_delay_hours, 47);
    assert!(prompt.options.iter().any(|o| o.duration_secs == 3600));

    engine
        .on_user_response(Response::PostponeBy(3600), &DryRunRestarter)
        .unwrap();
    assert_eq!(engine.state().total_delay_time, 48 * 3600);
    assert_eq!(engine.state().ignore_until, now + 3600);
    assert_eq!(engine.state().delay_start_time, BOOT + 90_000);

    let floor: Vec<_> = DelayScheduler::options(48)
        .into_iter()
        .map(|o| o.duration_secs)
        .collect();
    assert_eq!(floor, [600]);
    assert_eq!(engine.delay_options().len(), 1);
}

#[test]
fn test_reboot_resets_delay_before_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let state = ReminderState {
        total_delay_time: 30 * 3600,
        delay_start_time: BOOT + 100_000,
        ignore_until: BOOT + 400_000,
        last_boot_time: BOOT,
        ..ReminderState::default()
    };
    let new_boot = BOOT + 300_000;
    let clock = FixedClock::at_timestamp(new_boot + 90_000);
    let mut engine = ReminderPolicyEngine::with_state(store(&dir), clock, state);

    // Uptime since the new boot is already past 24h, and the old
    // postponement would still be running if it had survived.
    let action = engine.on_sample(UptimeSample {
        uptime_seconds: 90_000,
        boot_time: new_boot,
    });
    assert!(matches!(action, Action::ShowReminder(ref p) if p.total_delay_hours == 0));
    assert_eq!(engine.state().total_delay_time, 0);
    assert_eq!(engine.state().delay_start_time, 0);
}

#[test]
fn test_state_survives_engine_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(FixedClock::at_timestamp(BOOT + 90_000));
    let mut engine = ReminderPolicyEngine::new(store(&dir), Arc::clone(&clock));
    engine.on_sample(UptimeSample {
        uptime_seconds: 90_000,
        boot_time: BOOT,
    });
    engine
        .on_user_response(Response::PostponeBy(18_000), &DryRunRestarter)
        .unwrap();
    let saved = *engine.state();
    drop(engine);

    clock.advance(Duration::seconds(600));
    let mut engine = ReminderPolicyEngine::new(store(&dir), Arc::clone(&clock));
    assert_eq!(*engine.state(), saved);
    let action = engine.on_sample(UptimeSample {
        uptime_seconds: 90_600,
        boot_time: BOOT,
    });
    assert!(matches!(action, Action::NoAction { .. }));
}

proptest! {
    #[test]
    fn prop_short_uptime_never_reminds(
        state in arb_state(),
        uptime in 0u64..=86_400,
        boot in 1i64..2_000_000_000,
        now in 0i64..2_000_000_000,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut engine =
            ReminderPolicyEngine::with_state(store(&dir), FixedClock::at_timestamp(now), state);
        let action = engine.on_sample(UptimeSample { uptime_seconds: uptime, boot_time: boot });
        let quiet = matches!(action, Action::NoAction { .. });
        prop_assert!(quiet, "unexpected reminder: {:?}", action);
        prop_assert_eq!(engine.state().last_boot_time, boot);
    }

    #[test]
    fn prop_running_postponement_suppresses(
        mut state in arb_state(),
        uptime in 86_401u64..10_000_000,
        now in 0i64..1_000_000_000,
        ahead in 1i64..1_000_000,
    ) {
        state.ignore_until = now + ahead;
        state.last_boot_time = BOOT;
        let dir = tempfile::tempdir().unwrap();
        let mut engine =
            ReminderPolicyEngine::with_state(store(&dir), FixedClock::at_timestamp(now), state);
        let action = engine.on_sample(UptimeSample { uptime_seconds: uptime, boot_time: BOOT });
        let quiet = matches!(action, Action::NoAction { .. });
        prop_assert!(quiet, "unexpected reminder: {:?}", action);
    }

    #[test]
    fn prop_boot_change_always_resets(
        mut state in arb_state(),
        uptime in 0u64..10_000_000,
        previous in 1i64..1_000_000_000,
        shift in 1i64..1_000_000,
    ) {
        state.last_boot_time = previous;
        let dir = tempfile::tempdir().unwrap();
        let mut engine =
            ReminderPolicyEngine::with_state(store(&dir), FixedClock::at_timestamp(0), state);
        engine.on_sample(UptimeSample { uptime_seconds: uptime, boot_time: previous + shift });
        let after = engine.state();
        prop_assert!(!after.ignore_today);
        prop_assert_eq!(after.ignore_until, 0);
        prop_assert_eq!(after.total_delay_time, 0);
        prop_assert_eq!(after.delay_start_time, 0);
        prop_assert_eq!(after.last_boot_time, previous + shift);
    }

    #[test]
    fn prop_store_roundtrip(state in arb_state()) {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.save(&state).unwrap();
        prop_assert_eq!(store.try_load().unwrap(), state);
    }
}
