//! End-to-end scenarios driving the harness the way the CLI does.

use gb_lockstep::cpu::reg;
use gb_lockstep::gameboy::GameBoy;
use gb_lockstep::trace;
use gb_lockstep::trace::TraceCompare;
use gb_lockstep::trace::TraceError;

use std::env;
use std::fs;
use std::path::PathBuf;

/// A flat 32 KiB image with `program` placed at the entry point.
fn rom_with(program: &[u8]) -> Vec<u8> {
  let mut rom = vec![0; 0x8000];
  rom[0x100..0x100 + program.len()].copy_from_slice(program);
  rom
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
  let path = env::temp_dir().join(format!("gb-lockstep-{}-{}", std::process::id(), name));
  fs::write(&path, contents).unwrap();
  path
}

#[test]
fn initial_fetch() {
  let mut gb = GameBoy::new(rom_with(&[0x00]), None);
  let t = gb.step().unwrap();
  assert_eq!(t, 4);
  assert_eq!(gb.cpu.regs.pc, 0x0101);
  assert_eq!(gb.cpu.cycles(), 4);
  assert_eq!(gb.cpu.regs.a, 0x01);
  assert_eq!(gb.cpu.regs.f, 0xb0);
  assert_eq!(gb.cpu.regs.sp, 0xfffe);
}

#[test]
fn add_a_a_overflow() {
  let mut gb = GameBoy::new(rom_with(&[0x87]), None);
  gb.cpu.regs.a = 0x80;
  gb.cpu.regs.f = 0x00;
  let t = gb.step().unwrap();
  assert_eq!(t, 4);
  assert_eq!(gb.cpu.regs.a, 0x00);
  assert_eq!(gb.cpu.regs.f, reg::Z | reg::C);
}

#[test]
fn daa_after_bcd_add() {
  let mut gb = GameBoy::new(rom_with(&[0xc6, 0x38, 0x27]), None);
  gb.cpu.regs.a = 0x45;
  gb.cpu.regs.f = 0x00;
  gb.step().unwrap();
  assert_eq!(gb.cpu.regs.a, 0x7d);
  gb.step().unwrap();
  assert_eq!(gb.cpu.regs.a, 0x83);
  assert_eq!(gb.cpu.regs.f, 0x00);
}

#[test]
fn conditional_jump_not_taken() {
  let mut gb = GameBoy::new(rom_with(&[0x28, 0x05]), None);
  gb.cpu.regs.a = 0x01;
  gb.cpu.regs.f = 0x00;
  let t = gb.step().unwrap();
  assert_eq!(t, 8);
  assert_eq!(gb.cpu.regs.pc, 0x0102);
}

#[test]
fn call_ret_symmetry() {
  let mut rom = rom_with(&[0xcd, 0x34, 0x12]);
  rom[0x1234] = 0xc9;
  let mut gb = GameBoy::new(rom, None);

  gb.step().unwrap();
  assert_eq!(gb.cpu.regs.pc, 0x1234);
  assert_eq!(gb.cpu.regs.sp, 0xfffc);
  assert_eq!(gb.mem.rb(0xfffc), 0x03);
  assert_eq!(gb.mem.rb(0xfffd), 0x01);

  gb.step().unwrap();
  assert_eq!(gb.cpu.regs.pc, 0x0103);
  assert_eq!(gb.cpu.regs.sp, 0xfffe);
}

#[test]
fn ei_delay() {
  let mut gb = GameBoy::new(rom_with(&[0xfb, 0x00]), None);
  gb.step().unwrap();
  assert!(!gb.cpu.regs.ime);
  gb.step().unwrap();
  assert!(gb.cpu.regs.ime);
}

#[test]
fn interrupt_service_round_trip() {
  // EI; NOP; then a pending VBlank interrupt fires, handled by RETI at
  // the vector.
  let mut rom = rom_with(&[0xfb, 0x00, 0x00]);
  rom[0x40] = 0xd9; // RETI
  let mut gb = GameBoy::new(rom, None);
  gb.mem.interrupt_enable = 0x01;

  gb.step().unwrap(); // EI
  gb.mem.interrupt_flags = 0x01;
  gb.step().unwrap(); // NOP; IME turns on, interrupt dispatched
  assert_eq!(gb.cpu.regs.pc, 0x0040);
  assert!(!gb.cpu.regs.ime);
  assert_eq!(gb.mem.interrupt_flags, 0x00);

  gb.step().unwrap(); // RETI returns to the interrupted flow
  assert_eq!(gb.cpu.regs.pc, 0x0102);
}

#[test]
fn matching_trace_passes_and_exhausts() {
  let rom = rom_with(&[0x00, 0x04, 0x05]);

  // A twin run produces the reference.
  let mut twin = GameBoy::new(rom.clone(), None);
  let mut lines = Vec::new();
  for _ in 0..3 {
    lines.push(trace::format_line(&twin.cpu.regs, &twin.mem));
    twin.step().unwrap();
  }
  let path = scratch_file("match", &(lines.join("\n") + "\n"));

  let mut gb = GameBoy::new(rom, Some(TraceCompare::open(&path).unwrap()));
  for _ in 0..3 {
    gb.step().unwrap();
    assert!(!gb.trace_exhausted());
  }
  // The reference ran out; execution continues uncompared.
  gb.step().unwrap();
  assert!(gb.trace_exhausted());
  gb.step().unwrap();

  fs::remove_file(path).ok();
}

#[test]
fn mismatching_trace_fails_with_line_number() {
  let rom = rom_with(&[0x00]);
  let path = scratch_file("mismatch", "A: FF F: B0 nonsense\n");

  let mut gb = GameBoy::new(rom, Some(TraceCompare::open(&path).unwrap()));
  match gb.step() {
    Err(TraceError::Mismatch { line, expected, actual }) => {
      assert_eq!(line, 1);
      assert!(expected.contains("nonsense"));
      assert!(actual.starts_with("A: 01 F: B0"));
    }
    other => panic!("expected mismatch, got {:?}", other.map(|_| ())),
  }

  fs::remove_file(path).ok();
}

#[test]
fn serial_side_channel() {
  // LD A, 'H'; LDH (SB), A; LD A, 0x81; LDH (SC), A
  let mut gb = GameBoy::new(
    rom_with(&[0x3e, b'H', 0xe0, 0x01, 0x3e, 0x81, 0xe0, 0x02]),
    None,
  );
  for _ in 0..4 {
    gb.step().unwrap();
  }
  assert_eq!(gb.serial_output(), b"H");
  assert_eq!(gb.mem.rb(0xff02), 0x00);
}

#[test]
fn halted_steps_keep_tracing_and_counting() {
  let mut gb = GameBoy::new(rom_with(&[0x76]), None);
  gb.step().unwrap();
  let cycles = gb.cpu.cycles();
  let t = gb.step().unwrap();
  assert_eq!(t, 4);
  assert_eq!(gb.cpu.cycles(), cycles + 4);
  assert_eq!(gb.cpu.regs.pc, 0x0101);
}
