use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use super::{shift, Clock};

/// Time only moves when [`advance`](ManualClock::advance) or
/// [`set`](ManualClock::set) is called. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
  current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
  pub fn new(at: DateTime<Utc>) -> Self {
    Self {
      current: Arc::new(Mutex::new(at)),
    }
  }

  pub fn advance(&self, delta: TimeDelta) {
    let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
    *current = shift(*current, delta);
  }

  pub fn set(&self, at: DateTime<Utc>) {
    *self.current.lock().unwrap_or_else(PoisonError::into_inner) = at;
  }

  pub fn current_time(&self) -> DateTime<Utc> {
    *self.current.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for ManualClock {
  /// Starts at the current wall-clock time.
  fn default() -> Self {
    Self::new(Utc::now())
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    self.current_time()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
  }

  #[test]
  fn advance_and_set() {
    let clock = ManualClock::new(epoch());
    assert_eq!(clock.now(), epoch());
    clock.advance(TimeDelta::milliseconds(1500));
    assert_eq!(clock.now() - epoch(), TimeDelta::milliseconds(1500));
    clock.advance(TimeDelta::milliseconds(-500));
    assert_eq!(clock.now() - epoch(), TimeDelta::seconds(1));
    clock.set(epoch());
    assert_eq!(clock.current_time(), epoch());
  }

  #[test]
  fn clones_share_state() {
    let clock = ManualClock::new(epoch());
    let clone = clock.clone();
    clone.advance(TimeDelta::minutes(3));
    assert_eq!(clock.now() - epoch(), TimeDelta::minutes(3));
  }
}
