// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for fixture helpers

use std::thread;

use contract_core::*;

#[test]
fn test_env_guard_restores_previous_value() {
    let key = "CONTRACT_CORE_TEST_TIMEZONE";
    std::env::set_var(key, "UTC");

    {
        let guard = EnvGuard::set(key, "America/Chicago");
        assert_eq!(guard.key(), key);
        assert_eq!(std::env::var(key).unwrap(), "America/Chicago");
    }

    assert_eq!(std::env::var(key).unwrap(), "UTC");
    std::env::remove_var(key);
}

#[test]
fn test_env_guard_removes_unset_variable() {
    let key = "CONTRACT_CORE_TEST_LOCALE";
    std::env::remove_var(key);

    {
        let _guard = EnvGuard::set(key, "de_DE");
        assert_eq!(std::env::var(key).unwrap(), "de_DE");
    }

    assert!(std::env::var(key).is_err());
}

#[test]
fn test_env_guard_unset_restores() {
    let key = "CONTRACT_CORE_TEST_UNSET";
    std::env::set_var(key, "present");

    {
        let _guard = EnvGuard::unset(key);
        assert!(std::env::var(key).is_err());
    }

    assert_eq!(std::env::var(key).unwrap(), "present");
    std::env::remove_var(key);
}

#[test]
fn test_nested_env_guards_unwind_in_order() {
    let key = "CONTRACT_CORE_TEST_NESTED";
    std::env::remove_var(key);

    {
        let _outer = EnvGuard::set(key, "outer");
        {
            let _inner = EnvGuard::set(key, "inner");
            assert_eq!(std::env::var(key).unwrap(), "inner");
        }
        assert_eq!(std::env::var(key).unwrap(), "outer");
    }

    assert!(std::env::var(key).is_err());
}

#[test]
fn test_call_counter_is_shared_between_clones() {
    let counter = CallCounter::new();
    let clone = counter.clone();

    assert_eq!(counter.increment(), 1);
    assert_eq!(clone.increment(), 2);
    assert_eq!(counter.count(), 2);

    clone.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_call_counter_across_threads() {
    let counter = CallCounter::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let counter = counter.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    counter.increment();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.count(), 1_000);
}

#[test]
fn test_close_tracker_counts_repeated_close() {
    let mut tracker = CloseTracker::new();
    assert!(!tracker.is_closed());

    tracker.close();
    tracker.close();

    assert!(tracker.is_closed());
    assert_eq!(tracker.close_calls(), 2);
}

#[test]
fn test_close_trackers_share_a_counter() {
    let calls = CallCounter::new();
    let mut first = CloseTracker::with_counter(calls.clone());
    let mut second = CloseTracker::with_counter(calls.clone());

    first.close();
    second.close();

    assert_eq!(calls.count(), 2);
    assert!(first.is_closed() && second.is_closed());
}
