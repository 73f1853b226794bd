//! # Loads and Stores
//!
//! Loads update Z and N from the loaded value; stores have no flag effect.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// LDA - load the accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.a = value;
    cpu.registers.update_zero_negative(value);
}

/// LDX - load X.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.x = value;
    cpu.registers.update_zero_negative(value);
}

/// LDY - load Y.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.y = value;
    cpu.registers.update_zero_negative(value);
}

/// STA - store the accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let a = cpu.registers.a;
    cpu.write(addr, a)?;
    Ok(())
}

/// STX - store X.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let x = cpu.registers.x;
    cpu.write(addr, x)?;
    Ok(())
}

/// STY - store Y.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let y = cpu.registers.y;
    cpu.write(addr, y)?;
    Ok(())
}
