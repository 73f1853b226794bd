//! # Shifts and Rotates
//!
//! ASL, LSR, ROL, ROR operate on either the accumulator (no resolved
//! operand) or a memory location. Carry receives the bit shifted out;
//! the rotates fold the prior Carry into the vacated bit.

use crate::cpu::{Operand, CPU};
use crate::memory::MemoryBus;
use crate::registers::Flag;
use crate::ExecutionError;

/// ASL - shift left one bit; Carry takes bit 7.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Result<(), ExecutionError> {
    let wide: u16;
    match operand {
        Operand::Address(addr) => {
            wide = u16::from(cpu.read(addr)?) << 1;
            cpu.write(addr, wide as u8)?;
        }
        _ => {
            wide = u16::from(cpu.registers.a) << 1;
            cpu.registers.a = wide as u8;
        }
    }
    cpu.registers.set_flag(Flag::Carry, wide > 0xFF);
    cpu.registers.update_zero_negative(wide as u8);
    Ok(())
}

/// LSR - shift right one bit; Carry takes bit 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Result<(), ExecutionError> {
    let result: u8;
    match operand {
        Operand::Address(addr) => {
            let old = cpu.read(addr)?;
            cpu.registers.set_flag(Flag::Carry, old & 0x01 != 0);
            result = old >> 1;
            cpu.write(addr, result)?;
        }
        _ => {
            let old = cpu.registers.a;
            cpu.registers.set_flag(Flag::Carry, old & 0x01 != 0);
            result = old >> 1;
            cpu.registers.a = result;
        }
    }
    cpu.registers.update_zero_negative(result);
    Ok(())
}

/// ROL - rotate left through Carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Result<(), ExecutionError> {
    let carry_in = u8::from(cpu.registers.get_flag(Flag::Carry));
    let old: u8;
    let new: u8;
    match operand {
        Operand::Address(addr) => {
            old = cpu.read(addr)?;
            new = (old << 1).wrapping_add(carry_in);
            cpu.write(addr, new)?;
        }
        _ => {
            old = cpu.registers.a;
            new = (old << 1).wrapping_add(carry_in);
            cpu.registers.a = new;
        }
    }
    cpu.registers.set_flag(Flag::Carry, old & 0x80 != 0);
    cpu.registers.update_zero_negative(new);
    Ok(())
}

/// ROR - rotate right through Carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Result<(), ExecutionError> {
    let carry_in = u8::from(cpu.registers.get_flag(Flag::Carry));
    let old: u8;
    let new: u8;
    match operand {
        Operand::Address(addr) => {
            old = cpu.read(addr)?;
            new = (old >> 1) | (carry_in << 7);
            cpu.write(addr, new)?;
        }
        _ => {
            old = cpu.registers.a;
            new = (old >> 1) | (carry_in << 7);
            cpu.registers.a = new;
        }
    }
    cpu.registers.set_flag(Flag::Carry, old & 0x01 != 0);
    cpu.registers.update_zero_negative(new);
    Ok(())
}
