//! Wall-clock stopwatch.
//!
//! A [`Watch`] captures a start instant on creation and a stop instant on
//! [`stop`](Watch::stop), and reports the elapsed time in several units or as a
//! human-readable string. Instants come from a [`Clock`](clock::Clock), which
//! tests can replace per watch or per thread.
//!
//! ```
//! use stopwatch::Watch;
//!
//! let mut w = Watch::start();
//! assert_eq!(w.to_string(), "0m0.00s");
//! w.stop();
//! assert!(w.milliseconds() >= 0);
//! ```

pub mod clock;
pub mod cmd_options;
pub mod timer;
pub mod watch;

pub use timer::{log_timer, ScopeTimer};
pub use watch::{HumanDuration, Unit, Watch};
