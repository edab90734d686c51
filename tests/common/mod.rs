use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use stopwatch::clock::ManualClock;
use stopwatch::Watch;

pub fn t0() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 30).unwrap()
}

#[allow(dead_code)]
/// A watch on a manual clock, started at `t0()` and stopped `elapsed` later.
pub fn measured(elapsed: TimeDelta) -> Watch<ManualClock> {
  let clock = ManualClock::new(t0());
  let mut w = Watch::with_clock(clock.clone());
  clock.advance(elapsed);
  w.stop();
  w
}
