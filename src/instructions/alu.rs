//! # Arithmetic and Logic
//!
//! ADC and SBC honor the Decimal flag: with D set both operands are
//! decoded from packed BCD, the arithmetic happens in decimal modulo 100,
//! and the result is re-encoded. The Overflow flag in decimal mode is left
//! as whatever the binary-mode sign test produces for the decimal
//! intermediate; the hardware does not define it meaningfully there, and
//! callers depend on the bit-exact behavior.

use crate::cpu::{from_bcd, to_bcd, CPU};
use crate::memory::MemoryBus;
use crate::registers::{Flag, Registers};

/// ADC - add the operand and the carry to the accumulator.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a;
    let carry_in = u16::from(cpu.registers.get_flag(Flag::Carry));

    let result: u16;
    if cpu.registers.get_flag(Flag::Decimal) {
        result = u16::from(from_bcd(a)) + u16::from(from_bcd(value)) + carry_in;
        cpu.registers.a = to_bcd((result % 100) as u8);
        cpu.registers.set_flag(Flag::Carry, result > 99);
    } else {
        result = u16::from(a) + u16::from(value) + carry_in;
        cpu.registers.a = result as u8;
        cpu.registers.set_flag(Flag::Carry, result > 0xFF);
    }

    let zn = cpu.registers.a;
    cpu.registers.update_zero_negative(zn);
    cpu.registers.set_flag(
        Flag::Overflow,
        (!(a ^ value)) & (a ^ result as u8) & 0x80 != 0,
    );
}

/// SBC - subtract the operand and the borrow from the accumulator.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a;
    let borrow = i16::from(!cpu.registers.get_flag(Flag::Carry));

    let result: i16;
    if cpu.registers.get_flag(Flag::Decimal) {
        result = i16::from(from_bcd(a)) - i16::from(from_bcd(value)) - borrow;
        cpu.registers.a = to_bcd(result.rem_euclid(100) as u8);
    } else {
        result = i16::from(a) - i16::from(value) - borrow;
        cpu.registers.a = result as u8;
    }

    cpu.registers.set_flag(Flag::Carry, result >= 0);
    cpu.registers.set_flag(
        Flag::Overflow,
        (a ^ value) & (a ^ result as u8) & 0x80 != 0,
    );
    let zn = cpu.registers.a;
    cpu.registers.update_zero_negative(zn);
}

/// AND - bitwise AND into the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.a &= value;
    let zn = cpu.registers.a;
    cpu.registers.update_zero_negative(zn);
}

/// ORA - bitwise OR into the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.a |= value;
    let zn = cpu.registers.a;
    cpu.registers.update_zero_negative(zn);
}

/// EOR - bitwise exclusive-OR into the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers.a ^= value;
    let zn = cpu.registers.a;
    cpu.registers.update_zero_negative(zn);
}

/// BIT - Z from `a & operand`; N and V copied from bits 7 and 6 of the
/// operand itself, not of the AND result.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.registers
        .set_flag(Flag::Zero, cpu.registers.a & value == 0);
    cpu.registers.set_flag(Flag::Negative, value & 0x80 != 0);
    cpu.registers.set_flag(Flag::Overflow, value & 0x40 != 0);
}

/// Shared compare core: Z on equality, C iff `value <= register`
/// (unsigned), N from bit 7 of the 8-bit difference.
fn compare(registers: &mut Registers, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    registers.set_flag(Flag::Zero, diff == 0);
    registers.set_flag(Flag::Carry, value <= register);
    registers.set_flag(Flag::Negative, diff & 0x80 != 0);
}

/// CMP - compare the accumulator with the operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a;
    compare(&mut cpu.registers, a, value);
}

/// CPX - compare X with the operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let x = cpu.registers.x;
    compare(&mut cpu.registers, x, value);
}

/// CPY - compare Y with the operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let y = cpu.registers.y;
    compare(&mut cpu.registers, y, value);
}
