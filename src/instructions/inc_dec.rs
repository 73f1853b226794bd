//! # Increments and Decrements
//!
//! 8-bit wraparound arithmetic on a memory location (INC/DEC) or an index
//! register (INX/INY/DEX/DEY); Z and N track the new value.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// INC - increment the byte at `addr`.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let value = cpu.read(addr)?.wrapping_add(1);
    cpu.write(addr, value)?;
    cpu.registers.update_zero_negative(value);
    Ok(())
}

/// DEC - decrement the byte at `addr`.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) -> Result<(), ExecutionError> {
    let value = cpu.read(addr)?.wrapping_sub(1);
    cpu.write(addr, value)?;
    cpu.registers.update_zero_negative(value);
    Ok(())
}

/// INX - increment X.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.registers.x = cpu.registers.x.wrapping_add(1);
    let zn = cpu.registers.x;
    cpu.registers.update_zero_negative(zn);
}

/// INY - increment Y.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.registers.y = cpu.registers.y.wrapping_add(1);
    let zn = cpu.registers.y;
    cpu.registers.update_zero_negative(zn);
}

/// DEX - decrement X.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.registers.x = cpu.registers.x.wrapping_sub(1);
    let zn = cpu.registers.x;
    cpu.registers.update_zero_negative(zn);
}

/// DEY - decrement Y.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.registers.y = cpu.registers.y.wrapping_sub(1);
    let zn = cpu.registers.y;
    cpu.registers.update_zero_negative(zn);
}
