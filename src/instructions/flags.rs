//! # Flag Instructions
//!
//! Direct set/clear of a named status bit (CLC, CLI, CLV, CLD, SEC, SEI,
//! SED).

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::registers::Flag;

/// SEC, SEI, SED - set the named flag.
pub(crate) fn set<M: MemoryBus>(cpu: &mut CPU<M>, flag: Flag) {
    cpu.registers.set_flag(flag, true);
}

/// CLC, CLI, CLV, CLD - clear the named flag.
pub(crate) fn clear<M: MemoryBus>(cpu: &mut CPU<M>, flag: Flag) {
    cpu.registers.clear_flag(flag);
}
