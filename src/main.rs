use std::process::{exit, Command};

use log::{error, info};

use stopwatch::cmd_options::{CMDOptions, USAGE};
use stopwatch::Watch;

fn init_logger(opts: &CMDOptions) {
  let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
  if let Some(level) = opts.level_filter {
    builder.filter_level(level);
  }
  builder.format_target(opts.format_target).init();
}

fn main() -> std::io::Result<()> {
  let opts = CMDOptions::new(std::env::args().skip(1));
  init_logger(&opts);
  let (program, args) = match opts.command.split_first() {
    Some(c) => c,
    None => {
      eprintln!("{}", USAGE);
      exit(2);
    }
  };
  let label = opts.label.as_deref().unwrap_or(program);
  info!("running {:?}", opts.command);
  let mut watch = Watch::start();
  let status = Command::new(program).args(args).status().map_err(|err| {
    error!("can't run {}: {}", program, err);
    err
  })?;
  watch.stop();
  match opts.unit {
    Some(unit) => eprintln!("{}: {}{}", label, watch.in_unit(unit), unit),
    None => eprintln!("{}: {}", label, watch),
  }
  if !status.success() {
    error!("{} exited with {}", label, status);
  }
  exit(status.code().unwrap_or(1))
}
