use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use regex::Regex;
use stopwatch::timer::{log_timer, log_timer_at};

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
  fn enabled(&self, _: &Metadata) -> bool {
    true
  }
  fn log(&self, record: &Record) {
    self.0.lock().unwrap().push((record.level(), record.args().to_string()));
  }
  fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn reports_label_and_elapsed() {
  log::set_logger(&LOGGER).unwrap();
  log::set_max_level(LevelFilter::Trace);
  {
    let _t = log_timer("load");
  }
  {
    let _t = log_timer_at("save", Level::Warn);
  }
  let records: Vec<_> = LOGGER
    .0
    .lock()
    .unwrap()
    .iter()
    .filter(|(level, _)| *level <= Level::Info)
    .cloned()
    .collect();
  let re = Regex::new(r"^(load|save): [0-9.]+(ns|µs|ms|s)$").unwrap();
  assert_eq!(records.len(), 2, "{:?}", records);
  assert_eq!(records[0].0, Level::Info);
  assert_eq!(records[1].0, Level::Warn);
  for (_, msg) in records {
    assert!(re.is_match(&msg), "unexpected report `{}`", msg);
  }
}
