//! Tests for the bitwise operations (AND, ORA, EOR, BIT) and the compares
//! (CMP, CPX, CPY).

use std::cell::RefCell;
use std::rc::Rc;

use emu6502::{Flag, CPU, MMU};

fn setup(program: &[u8]) -> (Rc<RefCell<MMU>>, CPU<MMU>) {
    let mut mmu = MMU::new();
    mmu.add_block(0x0000, 0x4000, false, None, 0).unwrap();
    mmu.add_block(0x8000, 0x4000, false, Some(program), 0).unwrap();
    let mmu = Rc::new(RefCell::new(mmu));
    let cpu = CPU::new(Rc::clone(&mmu), Some(0x8000)).unwrap();
    (mmu, cpu)
}

#[test]
fn test_and_masks_accumulator() {
    let (_, mut cpu) = setup(&[0x29, 0x0F]);
    cpu.registers.a = 0xF0;

    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0x00);
    assert!(cpu.registers.get_flag(Flag::Zero));
}

#[test]
fn test_and_leaves_carry_alone() {
    let (_, mut cpu) = setup(&[0x29, 0xFF]);
    cpu.registers.a = 0x81;
    cpu.registers.set_flag(Flag::Carry, true);

    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0x81);
    assert!(cpu.registers.get_flag(Flag::Carry));
    assert!(cpu.registers.get_flag(Flag::Negative));
}

#[test]
fn test_ora_sets_bits() {
    let (_, mut cpu) = setup(&[0x09, 0x80]);
    cpu.registers.a = 0x0F;

    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0x8F);
    assert!(cpu.registers.get_flag(Flag::Negative));
}

#[test]
fn test_eor_toggles_bits() {
    let (_, mut cpu) = setup(&[0x49, 0b0110]);
    cpu.registers.a = 0b1010;

    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0b1100);
}

#[test]
fn test_eor_self_clears() {
    let (_, mut cpu) = setup(&[0x49, 0xFF]);
    cpu.registers.a = 0xFF;

    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0x00);
    assert!(cpu.registers.get_flag(Flag::Zero));
}

#[test]
fn test_bit_copies_operand_high_bits() {
    // N and V come from bits 7 and 6 of the operand itself, not the AND
    // result.
    let (mmu, mut cpu) = setup(&[0x24, 0x10]);
    mmu.borrow_mut().write(0x0010, 0xC0).unwrap();
    cpu.registers.a = 0x01;

    let cycles = cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::Zero)); // 0x01 & 0xC0 == 0
    assert!(cpu.registers.get_flag(Flag::Negative));
    assert!(cpu.registers.get_flag(Flag::Overflow));
    assert_eq!(cpu.registers.a, 0x01); // accumulator untouched
    assert_eq!(cycles, 3);
}

#[test]
fn test_bit_absolute_clear_high_bits() {
    let (mmu, mut cpu) = setup(&[0x2C, 0x00, 0x20]);
    mmu.borrow_mut().write(0x2000, 0x3F).unwrap();
    cpu.registers.a = 0x01;

    let cycles = cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Zero));
    assert!(!cpu.registers.get_flag(Flag::Negative));
    assert!(!cpu.registers.get_flag(Flag::Overflow));
    assert_eq!(cycles, 4);
}

#[test]
fn test_cmp_equal() {
    let (_, mut cpu) = setup(&[0xC9, 0x42]);
    cpu.registers.a = 0x42;

    cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::Zero));
    assert!(cpu.registers.get_flag(Flag::Carry));
    assert!(!cpu.registers.get_flag(Flag::Negative));
    assert_eq!(cpu.registers.a, 0x42); // compare never writes back
}

#[test]
fn test_cmp_register_greater() {
    let (_, mut cpu) = setup(&[0xC9, 0x30]);
    cpu.registers.a = 0x50;

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Zero));
    assert!(cpu.registers.get_flag(Flag::Carry));
    assert!(!cpu.registers.get_flag(Flag::Negative));
}

#[test]
fn test_cmp_register_less() {
    let (_, mut cpu) = setup(&[0xC9, 0x50]);
    cpu.registers.a = 0x30;

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Zero));
    assert!(!cpu.registers.get_flag(Flag::Carry));
    assert!(cpu.registers.get_flag(Flag::Negative));
}

#[test]
fn test_cpx_zero_page() {
    let (mmu, mut cpu) = setup(&[0xE4, 0x10]);
    mmu.borrow_mut().write(0x0010, 0x05).unwrap();
    cpu.registers.x = 0x05;

    let cycles = cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::Zero));
    assert!(cpu.registers.get_flag(Flag::Carry));
    assert_eq!(cycles, 3);
}

#[test]
fn test_cpy_immediate() {
    let (_, mut cpu) = setup(&[0xC0, 0x01]);
    cpu.registers.y = 0x00;

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Carry));
    assert!(cpu.registers.get_flag(Flag::Negative)); // 0x00 - 0x01 = 0xFF
}
