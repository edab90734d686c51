mod common;

use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::{TimeDelta, Utc};
use regex::Regex;
use stopwatch::clock::ManualClock;
use stopwatch::Watch;

#[test]
fn timer_reports_30_minutes() {
  let calls = Cell::new(0);
  let mut minutes = -1;
  Watch::start_at(Utc::now() - TimeDelta::minutes(30)).timer(|w| {
    calls.set(calls.get() + 1);
    minutes = w.minutes();
  });
  assert_eq!(calls.get(), 1);
  assert_eq!(minutes, 30);
}

#[test]
fn timer_stops_the_watch() {
  let clock = ManualClock::new(common::t0());
  let mut w = Watch::with_clock(clock.clone());
  clock.advance(TimeDelta::milliseconds(12));
  let mut seen = String::new();
  w.timer(|w| seen = w.to_string());
  assert_eq!(seen, "12ms");
  assert!(w.is_stopped());
}

#[test]
fn deferred_timer_fires_at_scope_exit() {
  let re = Regex::new(r"^30m0\.\d+s$").unwrap();
  let clock = ManualClock::new(common::t0());
  let report = RefCell::new(None);
  {
    let _t = Watch::with_clock_at(clock.clone(), common::t0() - TimeDelta::minutes(30))
      .on_drop(|w| *report.borrow_mut() = Some(w.to_string()));
    clock.advance(TimeDelta::nanoseconds(17));
    assert!(report.borrow().is_none());
  }
  let s = report.into_inner().unwrap();
  assert!(re.is_match(&s), "expected `{}` to match `{}`", s, re);
}

#[test]
fn deferred_timer_fires_when_unwinding() {
  let calls = Cell::new(0);
  let r = catch_unwind(AssertUnwindSafe(|| {
    let _t = Watch::start().on_drop(|w| {
      assert!(w.is_stopped());
      calls.set(calls.get() + 1);
    });
    panic!("scope failed");
  }));
  assert!(r.is_err());
  assert_eq!(calls.get(), 1);
}
