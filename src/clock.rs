//! Time sources for [`Watch`](crate::watch::Watch).
//!
//! Every instant a watch captures comes from a [`Clock`]. The default
//! [`SystemClock`] reads [`now`], the process-wide hook which returns the real
//! wall-clock time unless a substitute has been installed on the current
//! thread with [`set_now`], [`with_now`] or [`with_now_offset`].
//!
//! ```
//! use chrono::TimeDelta;
//! use stopwatch::clock;
//! use stopwatch::watch::Watch;
//!
//! let watch = clock::with_now_offset(TimeDelta::seconds(-35), Watch::start);
//! assert_eq!(watch.current_duration_second(), 35);
//! ```

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

mod manual;
mod offset;
mod scoped;

pub use manual::ManualClock;
pub use offset::OffsetClock;
pub use scoped::{now, set_now, with_now, with_now_offset, NowGuard};

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`.
const ZERO_INSTANT_TIMESTAMP: i64 = -62_135_596_800;

pub trait Clock {
  fn now(&self) -> DateTime<Utc>;
}

/// Delegates to the process-wide [`now`] hook.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
  #[inline]
  fn now(&self) -> DateTime<Utc> {
    now()
  }
}

impl<F> Clock for F
where
  F: Fn() -> DateTime<Utc>,
{
  fn now(&self) -> DateTime<Utc> {
    self()
  }
}

/// The instant standing for "never captured": midnight, January 1 of year 1.
pub fn zero_instant() -> DateTime<Utc> {
  Utc
    .timestamp_opt(ZERO_INSTANT_TIMESTAMP, 0)
    .single()
    .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// `at + delta`, clamped to the representable range.
pub(crate) fn shift(at: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
  match at.checked_add_signed(delta) {
    Some(t) => t,
    None if delta < TimeDelta::zero() => DateTime::<Utc>::MIN_UTC,
    None => DateTime::<Utc>::MAX_UTC,
  }
}
