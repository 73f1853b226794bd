//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register state and memory image, then steps the
//! CPU a bounded number of times. Errors (unimplemented opcodes, unmapped
//! reads) are expected outcomes; the target only hunts for panics.

#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use emu6502::{Flag, CPU, MMU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    s: u8,
    p: u8,
    decimal: bool,
}

/// Memory image for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x8000.
    program: [u8; 64],
    /// Zero page contents.
    zero_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut mmu = MMU::new();
    // Zero page + stack, program image, and vectors pointing back into
    // the program.
    mmu.add_block(0x0000, 0x4000, false, Some(&input.memory.zero_page), 0)
        .unwrap();
    mmu.add_block(0x8000, 0x4000, false, Some(&input.memory.program), 0)
        .unwrap();
    mmu.add_block(0xF000, 0x1000, false, Some(&[0x00, 0x80]), 0x0FFE)
        .unwrap();
    let mmu = Rc::new(RefCell::new(mmu));

    let mut cpu = CPU::new(Rc::clone(&mmu), Some(0x8000)).unwrap();
    cpu.registers.a = input.cpu_state.a;
    cpu.registers.x = input.cpu_state.x;
    cpu.registers.y = input.cpu_state.y;
    cpu.registers.s = input.cpu_state.s;
    cpu.registers.p = input.cpu_state.p;
    cpu.registers.set_flag(Flag::Decimal, input.cpu_state.decimal);

    for _ in 0..64 {
        // Errors are fine - only panics count.
        if cpu.step().is_err() {
            break;
        }
    }
});
