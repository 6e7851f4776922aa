use crate::cpu::Cpu;
use crate::mem;
use crate::mem::Memory;
use crate::trace;
use crate::trace::TraceCompare;
use crate::trace::TraceError;

use log::debug;

use std::io::stdout;
use std::io::Write;

pub struct GameBoy {
  pub cpu: Cpu,
  pub mem: Memory,
  trace: Option<TraceCompare>,
  serial: Vec<u8>,
}

impl GameBoy {
  pub fn new(rom: Vec<u8>, trace: Option<TraceCompare>) -> GameBoy {
    GameBoy {
      cpu: Cpu::new(),
      mem: Memory::new(rom),
      trace,
      serial: Vec::new(),
    }
  }

  /// Run one step: snapshot and compare the trace line, execute one
  /// instruction (or idle while halted/stopped), run the interrupt
  /// phase, then poll the serial side channel.
  /// Returns the T-cycles consumed.
  pub fn step(&mut self) -> Result<u32, TraceError> {
    let line = trace::format_line(&self.cpu.regs, &self.mem);
    debug!("{}", line);
    if let Some(cmp) = self.trace.as_mut() {
      cmp.compare(&line)?;
    }

    let mut t = self.cpu.step(&mut self.mem);
    t += self.cpu.handle_interrupts(&mut self.mem);

    self.check_serial();
    Ok(t)
  }

  /// Blargg's test ROMs report through the serial port: 0x81 in the
  /// transfer-control register means the byte in SB is ready.
  fn check_serial(&mut self) {
    if self.mem.rb(mem::SC) == 0x81 {
      let b = self.mem.rb(mem::SB);
      print!("{}", b as char);
      stdout().flush().unwrap();
      self.serial.push(b);
      self.mem.wb(mem::SC, 0x00);
    }
  }

  /// Everything the program under test has pushed out the serial port.
  pub fn serial_output(&self) -> &[u8] {
    &self.serial
  }

  pub fn trace_exhausted(&self) -> bool {
    self.trace.as_ref().map_or(false, TraceCompare::exhausted)
  }
}
