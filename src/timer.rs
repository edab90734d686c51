use log::{log, Level};

use crate::clock::{Clock, SystemClock};
use crate::watch::Watch;

/// Stops its watch and hands it to the callback when dropped, whether the
/// scope is left normally or by unwinding.
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use stopwatch::watch::Watch;
///
/// let mut minutes = 0;
/// {
///   let _t = Watch::start_at(Utc::now() - TimeDelta::minutes(30)).on_drop(|w| minutes = w.minutes());
/// }
/// assert_eq!(minutes, 30);
/// ```
#[must_use = "the callback runs as soon as the timer is dropped"]
pub struct ScopeTimer<C, F>
where
  C: Clock,
  F: FnOnce(&Watch<C>),
{
  watch: Watch<C>,
  f: Option<F>,
}

impl<C, F> ScopeTimer<C, F>
where
  C: Clock,
  F: FnOnce(&Watch<C>),
{
  pub fn new(watch: Watch<C>, f: F) -> Self {
    Self { watch, f: Some(f) }
  }

  /// The running watch.
  pub fn watch(&self) -> &Watch<C> {
    &self.watch
  }
}

impl<C, F> Drop for ScopeTimer<C, F>
where
  C: Clock,
  F: FnOnce(&Watch<C>),
{
  fn drop(&mut self) {
    if let Some(f) = self.f.take() {
      self.watch.timer(f);
    }
  }
}

/// Logs `"<label>: <elapsed>"` at info level when the scope exits.
pub fn log_timer(label: &str) -> ScopeTimer<SystemClock, impl FnOnce(&Watch)> {
  log_timer_at(label, Level::Info)
}

pub fn log_timer_at(label: &str, level: Level) -> ScopeTimer<SystemClock, impl FnOnce(&Watch)> {
  let label = label.to_owned();
  Watch::start().on_drop(move |w: &Watch| log!(level, "{}: {}", label, w))
}
