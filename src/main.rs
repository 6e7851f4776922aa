use gb_lockstep::gameboy::GameBoy;
use gb_lockstep::trace::TraceCompare;

use log::LevelFilter;

use std::env;
use std::fs;
use std::fs::OpenOptions;
use std::process;

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() < 2 || args.len() > 3 {
    eprintln!("usage: {} <rom> [trace]", args[0]);
    process::exit(2);
  }

  match OpenOptions::new().create(true).append(true).open("emu_log") {
    Ok(file) => {
      env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    }
    Err(e) => {
      eprintln!("unable to open emu_log: {}", e);
      process::exit(1);
    }
  }

  let rom = match fs::read(&args[1]) {
    Ok(rom) => rom,
    Err(e) => {
      eprintln!("unable to read ROM {}: {}", args[1], e);
      process::exit(1);
    }
  };

  let compare = match args.get(2) {
    Some(path) => match TraceCompare::open(path) {
      Ok(compare) => Some(compare),
      Err(e) => {
        eprintln!("unable to open trace {}: {}", path, e);
        process::exit(1);
      }
    },
    None => None,
  };

  let mut gb = GameBoy::new(rom, compare);
  loop {
    if let Err(e) = gb.step() {
      eprintln!("{}", e);
      process::exit(1);
    }
    // A trace that ran out cleanly means every compared step matched.
    if gb.trace_exhausted() {
      break;
    }
  }
}
