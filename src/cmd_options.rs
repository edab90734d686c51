use std::iter::{Iterator, Peekable};
use std::str::FromStr;

use log::LevelFilter;

use crate::watch::Unit;

pub const USAGE: &str = "usage: stopwatch [-l LABEL] [-u ms|s|m|h|d] [-w|-i|--debug] [-t] [--] COMMAND [ARGS...]";

// Some(None): bare option, value (if any) is the next argument.
// Some(Some(v)): value attached as `--long=v` or `-sv`.
fn split_option<'a>(arg: &'a str, short: &str, long: &str) -> Option<Option<&'a str>> {
  if let Some(rest) = arg.strip_prefix("--") {
    let rest = rest.strip_prefix(long)?;
    if rest.is_empty() {
      return Some(None);
    }
    return rest.strip_prefix('=').map(Some);
  }
  if short.is_empty() {
    return None;
  }
  assert_eq!(short.len(), 1, "short option {} is too long", short);
  let rest = arg.strip_prefix('-')?.strip_prefix(short)?;
  Some(if rest.is_empty() { None } else { Some(rest) })
}

fn try_parse_option<I: Iterator<Item = String>>(it: &mut Peekable<I>, short: &str, long: &str) -> bool {
  let hit = match it.peek() {
    Some(s) => split_option(s, short, long) == Some(None),
    None => false,
  };
  if hit {
    it.next();
  }
  hit
}

fn try_parse_arg_option<R: FromStr<Err = impl std::fmt::Display>, I: Iterator<Item = String>>(
  it: &mut Peekable<I>,
  short: &str,
  long: &str,
) -> Option<R> {
  let s = it.peek()?.clone();
  let inline = split_option(&s, short, long)?.map(str::to_owned);
  it.next();
  let value = match inline {
    Some(v) => v,
    None => match it.next() {
      Some(v) => v,
      None => panic!("empty argument for command line option {}", s),
    },
  };
  match R::from_str(value.trim()) {
    Ok(res) => Some(res),
    Err(err) => panic!("can't parse command line argument {} {}, {}", s, value, err),
  }
}

#[derive(Debug)]
pub struct CMDOptions {
  pub label: Option<String>,
  pub unit: Option<Unit>,
  pub format_target: bool,
  /// `None` leaves the level to `RUST_LOG`.
  pub level_filter: Option<LevelFilter>,
  pub command: Vec<String>,
}

impl CMDOptions {
  pub fn new<I: Iterator<Item = String>>(it: I) -> Self {
    let mut p = it.peekable();
    let mut label = None;
    let mut unit = None;
    let mut format_target = false;
    let mut level_filter = None;
    loop {
      if let Some(l) = try_parse_arg_option::<String, _>(&mut p, "l", "label") {
        label = Some(l);
        continue;
      }
      if let Some(u) = try_parse_arg_option::<Unit, _>(&mut p, "u", "unit") {
        unit = Some(u);
        continue;
      }
      if try_parse_option(&mut p, "w", "warn") {
        level_filter = Some(LevelFilter::Warn);
        continue;
      }
      if try_parse_option(&mut p, "i", "info") {
        level_filter = Some(LevelFilter::Info);
        continue;
      }
      if try_parse_option(&mut p, "", "debug") {
        level_filter = Some(LevelFilter::Debug);
        continue;
      }
      if try_parse_option(&mut p, "t", "format-target") {
        format_target = true;
        continue;
      }
      if p.peek().map(String::as_str) == Some("--") {
        p.next();
      }
      break;
    }
    CMDOptions {
      label,
      unit,
      format_target,
      level_filter,
      command: p.collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn split_forms() {
    assert_eq!(split_option("--unit", "u", "unit"), Some(None));
    assert_eq!(split_option("--unit=ms", "u", "unit"), Some(Some("ms")));
    assert_eq!(split_option("--units", "u", "unit"), None);
    assert_eq!(split_option("-u", "u", "unit"), Some(None));
    assert_eq!(split_option("-ums", "u", "unit"), Some(Some("ms")));
    assert_eq!(split_option("-x", "u", "unit"), None);
    assert_eq!(split_option("--debug", "", "debug"), Some(None));
    assert_eq!(split_option("-d", "", "debug"), None);
  }
}
