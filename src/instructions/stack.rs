//! # Stack Operations
//!
//! Push and pull for the accumulator and the status byte. Pulling into the
//! accumulator updates Z/N; pulling into the status byte forces the unused
//! bit (0x20) set, matching the hardware's behavior for PLP.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// PHA - push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let a = cpu.registers.a;
    cpu.stack_push(a)?;
    Ok(())
}

/// PHP - push the status byte.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let p = cpu.registers.p;
    cpu.stack_push(p)?;
    Ok(())
}

/// PLA - pull into the accumulator and update Z/N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let value = cpu.stack_pop()?;
    cpu.registers.a = value;
    cpu.registers.update_zero_negative(value);
    Ok(())
}

/// PLP - pull into the status byte, forcing the unused bit set.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let value = cpu.stack_pop()?;
    cpu.registers.p = value | 0b0010_0000;
    Ok(())
}
