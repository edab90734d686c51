use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use log::trace;

use crate::clock::{self, Clock, SystemClock};
use crate::timer::ScopeTimer;

pub mod format;

pub use format::{saturate, HumanDuration};

/// Rendering of a watch that was never stopped.
pub const NOT_STOPPED: &str = "0m0.00s";

/// A start instant and an optional stop instant.
///
/// Nothing orders the two: a stop captured before the start yields a negative
/// duration, and the numeric accessors of a watch that was never stopped
/// measure against [`clock::zero_instant`], which gives the most negative
/// duration. A stop captured at that instant also renders as not stopped.
/// Call [`stop`](Watch::stop) before reading them.
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use stopwatch::watch::Watch;
///
/// Watch::start_at(Utc::now() - TimeDelta::minutes(30)).timer(|w| {
///   assert_eq!(w.minutes(), 30);
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Watch<C = SystemClock> {
  start: DateTime<Utc>,
  stop: Option<DateTime<Utc>>,
  clock: C,
}

impl Watch {
  pub fn start() -> Self {
    Self::with_clock(SystemClock)
  }

  pub fn start_at(at: DateTime<Utc>) -> Self {
    Self::with_clock_at(SystemClock, at)
  }
}

impl<C: Clock> Watch<C> {
  pub fn with_clock(clock: C) -> Self {
    let at = clock.now();
    Self::with_clock_at(clock, at)
  }

  pub fn with_clock_at(clock: C, at: DateTime<Utc>) -> Self {
    Self {
      start: at,
      stop: None,
      clock,
    }
  }

  /// Recaptures the start instant; the stop instant is left as is.
  pub fn restart(&mut self) -> &mut Self {
    self.start = self.clock.now();
    trace!("watch started at {}", self.start);
    self
  }

  /// Captures the stop instant, replacing any earlier one.
  pub fn stop(&mut self) -> &mut Self {
    let at = self.clock.now();
    trace!("watch stopped at {}", at);
    self.stop = Some(at);
    self
  }

  /// Elapsed time from start to the clock's current instant.
  pub fn current_duration(&self) -> TimeDelta {
    saturate(self.clock.now() - self.start)
  }

  pub fn current_duration_second(&self) -> i64 {
    self.current_duration().num_seconds()
  }

  pub fn current_duration_millisecond(&self) -> i64 {
    self.current_duration().num_milliseconds()
  }

  /// Stops the watch and hands it to `f`. Meant for reporting at the end of a
  /// scope; see [`on_drop`](Watch::on_drop) for the guard form.
  pub fn timer<F>(&mut self, f: F)
  where
    F: FnOnce(&Self),
  {
    self.stop();
    f(&*self)
  }

  /// Runs [`timer`](Watch::timer) with `f` when the returned guard goes out of
  /// scope.
  pub fn on_drop<F>(self, f: F) -> ScopeTimer<C, F>
  where
    F: FnOnce(&Self),
  {
    ScopeTimer::new(self, f)
  }
}

impl<C> Watch<C> {
  /// `stop - start`, saturated to about 292 years either way.
  pub fn duration(&self) -> TimeDelta {
    saturate(self.stop.unwrap_or_else(clock::zero_instant) - self.start)
  }

  pub fn milliseconds(&self) -> i64 {
    self.duration().num_milliseconds()
  }

  pub fn seconds(&self) -> i64 {
    self.duration().num_seconds()
  }

  pub fn minutes(&self) -> i64 {
    self.duration().num_minutes()
  }

  pub fn hours(&self) -> i64 {
    self.duration().num_hours()
  }

  /// Whole hours divided by 24; not calendar aware.
  pub fn days(&self) -> i64 {
    self.hours() / 24
  }

  pub fn in_unit(&self, unit: Unit) -> i64 {
    match unit {
      Unit::Milliseconds => self.milliseconds(),
      Unit::Seconds => self.seconds(),
      Unit::Minutes => self.minutes(),
      Unit::Hours => self.hours(),
      Unit::Days => self.days(),
    }
  }

  pub fn is_stopped(&self) -> bool {
    self.stop.is_some()
  }

  pub fn started_at(&self) -> DateTime<Utc> {
    self.start
  }

  pub fn stopped_at(&self) -> Option<DateTime<Utc>> {
    self.stop
  }

  pub fn clock(&self) -> &C {
    &self.clock
  }
}

impl<C> fmt::Display for Watch<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.stop {
      Some(at) if at != clock::zero_instant() => write!(f, "{}", HumanDuration(self.duration())),
      _ => f.write_str(NOT_STOPPED),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
  Milliseconds,
  Seconds,
  Minutes,
  Hours,
  Days,
}

impl fmt::Display for Unit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Unit::Milliseconds => "ms",
      Unit::Seconds => "s",
      Unit::Minutes => "m",
      Unit::Hours => "h",
      Unit::Days => "d",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError {
  pub s: String,
}

impl fmt::Display for ParseUnitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown time unit \"{}\", expected one of ms, s, m, h, d", self.s)
  }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for Unit {
  type Err = ParseUnitError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "ms" | "millisecond" | "milliseconds" => Ok(Unit::Milliseconds),
      "s" | "sec" | "second" | "seconds" => Ok(Unit::Seconds),
      "m" | "min" | "minute" | "minutes" => Ok(Unit::Minutes),
      "h" | "hour" | "hours" => Ok(Unit::Hours),
      "d" | "day" | "days" => Ok(Unit::Days),
      _ => Err(ParseUnitError { s: String::from(s) }),
    }
  }
}
