use chrono::{DateTime, TimeDelta, Utc};

use super::{shift, Clock};

/// The real wall clock shifted by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetClock {
  offset: TimeDelta,
}

impl OffsetClock {
  pub fn new(offset: TimeDelta) -> Self {
    Self { offset }
  }

  pub fn offset(&self) -> TimeDelta {
    self.offset
  }
}

impl Clock for OffsetClock {
  fn now(&self) -> DateTime<Utc> {
    shift(Utc::now(), self.offset)
  }
}
