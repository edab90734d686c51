use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use log::trace;

use super::{Clock, OffsetClock};

thread_local! {
  static NOW: RefCell<Option<Rc<dyn Clock>>> = RefCell::new(None);
}

/// Current instant: the innermost override installed on this thread, or the
/// real wall-clock time.
pub fn now() -> DateTime<Utc> {
  let clock = NOW.with(|n| n.borrow().clone());
  match clock {
    Some(c) => c.now(),
    None => Utc::now(),
  }
}

/// Restores the previously installed clock when dropped.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct NowGuard {
  // an Rc, so the guard stays on its thread like the override
  installed: Rc<dyn Clock>,
  previous: Option<Rc<dyn Clock>>,
}

impl Drop for NowGuard {
  fn drop(&mut self) {
    let previous = self.previous.take();
    let current = NOW.with(|n| n.replace(previous));
    trace!("clock override removed");
    debug_assert!(
      std::thread::panicking() || current.map_or(false, |c| same_clock(&c, &self.installed)),
      "clock overrides restored out of order"
    );
  }
}

fn same_clock(a: &Rc<dyn Clock>, b: &Rc<dyn Clock>) -> bool {
  Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Installs `clock` as the source of [`now`] on the current thread until the
/// returned guard is dropped. Overrides nest; guards must be dropped in
/// reverse order of creation, which debug builds check.
pub fn set_now<C: Clock + 'static>(clock: C) -> NowGuard {
  let installed: Rc<dyn Clock> = Rc::new(clock);
  let previous = NOW.with(|n| n.replace(Some(Rc::clone(&installed))));
  trace!("clock override installed");
  NowGuard { installed, previous }
}

/// Runs `f` with `clock` installed, restoring the previous clock on every
/// exit path including panics.
pub fn with_now<C, R, F>(clock: C, f: F) -> R
where
  C: Clock + 'static,
  F: FnOnce() -> R,
{
  let _guard = set_now(clock);
  f()
}

/// Runs `f` with [`now`] shifted by `offset` relative to the real clock.
pub fn with_now_offset<R, F>(offset: TimeDelta, f: F) -> R
where
  F: FnOnce() -> R,
{
  with_now(OffsetClock::new(offset), f)
}
