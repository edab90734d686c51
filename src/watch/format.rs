use std::fmt;

use chrono::TimeDelta;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Renders a duration the way Go's `time.Duration` prints: `0s`, `850ns`,
/// `1.5µs`, `30.25ms`, `4.2s`, `30m0s`, `1h2m3.5s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub TimeDelta);

impl fmt::Display for HumanDuration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let nanos = saturating_nanos(self.0);
    if nanos < 0 {
      f.write_str("-")?;
    }
    let u = nanos.unsigned_abs();
    if u < NANOS_PER_SEC {
      let (unit, prec) = match u {
        0 => return f.write_str("0s"),
        1..=999 => ("ns", 0),
        1_000..=999_999 => ("µs", 3),
        _ => ("ms", 6),
      };
      write_scaled(f, u, prec)?;
      return f.write_str(unit);
    }
    let secs = u / NANOS_PER_SEC;
    let hours = secs / 3600;
    if hours > 0 {
      write!(f, "{}h", hours)?;
    }
    if secs >= 60 {
      write!(f, "{}m", secs / 60 % 60)?;
    }
    write!(f, "{}", secs % 60)?;
    write_fraction(f, u % NANOS_PER_SEC, 9)?;
    f.write_str("s")
  }
}

/// Clamps `d` to what an `i64` count of nanoseconds can hold, about 292 years
/// either way.
pub fn saturate(d: TimeDelta) -> TimeDelta {
  d.clamp(TimeDelta::nanoseconds(i64::MIN), TimeDelta::nanoseconds(i64::MAX))
}

fn saturating_nanos(d: TimeDelta) -> i64 {
  match d.num_nanoseconds() {
    Some(n) => n,
    None if d < TimeDelta::zero() => i64::MIN,
    None => i64::MAX,
  }
}

fn write_scaled(f: &mut fmt::Formatter<'_>, value: u64, prec: u32) -> fmt::Result {
  let scale = 10u64.pow(prec);
  write!(f, "{}", value / scale)?;
  write_fraction(f, value % scale, prec)
}

// trailing zeros are dropped, an empty fraction drops the point too
fn write_fraction(f: &mut fmt::Formatter<'_>, frac: u64, prec: u32) -> fmt::Result {
  if frac == 0 {
    return Ok(());
  }
  let digits = format!("{:0width$}", frac, width = prec as usize);
  write!(f, ".{}", digits.trim_end_matches('0'))
}
