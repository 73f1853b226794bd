//! Tests for BRK/RTI, the interrupt vector table, the flag instructions,
//! and CPU reset.

use std::cell::RefCell;
use std::rc::Rc;

use emu6502::{Flag, Interrupt, CPU, MMU};

/// RAM, program, and a vector block whose BRK/IRQ vector points at 0x9000.
fn setup(program: &[u8]) -> (Rc<RefCell<MMU>>, CPU<MMU>) {
    let mut mmu = MMU::new();
    mmu.add_block(0x0000, 0x4000, false, None, 0).unwrap();
    mmu.add_block(0x8000, 0x4000, false, Some(program), 0).unwrap();
    mmu.add_block(0xF000, 0x1000, false, Some(&[0x00, 0x90]), 0x0FFE)
        .unwrap();
    let mmu = Rc::new(RefCell::new(mmu));
    let cpu = CPU::new(Rc::clone(&mmu), Some(0x8000)).unwrap();
    (mmu, cpu)
}

#[test]
fn test_brk_pushes_state_and_jumps_through_vector() {
    let (mmu, mut cpu) = setup(&[0x00]);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x9000);
    assert_eq!(cycles, 7);

    // pc + 1 (0x8002) pushed high byte first, then the status byte with
    // Break set.
    let m = mmu.borrow();
    assert_eq!(m.read(0x01FF).unwrap(), 0x80);
    assert_eq!(m.read(0x01FE).unwrap(), 0x02);
    assert_eq!(m.read(0x01FD).unwrap(), 0b0011_0100);
    drop(m);

    assert_eq!(cpu.registers.s, 0xFC);
    assert!(cpu.registers.get_flag(Flag::Break));
    assert!(cpu.registers.get_flag(Flag::InterruptDisable));
}

#[test]
fn test_rti_pops_status_then_pc() {
    let (mmu, mut cpu) = setup(&[0x40]);
    {
        let mut m = mmu.borrow_mut();
        m.write(0x01FD, 0x81).unwrap(); // status: N and C
        m.write(0x01FE, 0x34).unwrap();
        m.write(0x01FF, 0x12).unwrap();
    }
    cpu.registers.s = 0xFC;

    let cycles = cpu.step().unwrap();
    // Status comes back exactly as popped; RTI does not force the unused
    // bit the way PLP does.
    assert_eq!(cpu.registers.p, 0x81);
    assert_eq!(cpu.registers.pc, 0x1234);
    assert_eq!(cpu.registers.s, 0xFF);
    assert_eq!(cycles, 6);
}

#[test]
fn test_brk_rti_round_trip() {
    let (mmu, mut cpu) = setup(&[0x00]);
    mmu.borrow_mut().write(0x9000, 0x40).unwrap(); // RTI at the handler

    cpu.step().unwrap();
    let pushed_p = mmu.borrow().read(0x01FD).unwrap();

    cpu.step().unwrap();
    // RTI resumes at the word BRK pushed (pc + 1) with the pushed status.
    assert_eq!(cpu.registers.pc, 0x8002);
    assert_eq!(cpu.registers.p, pushed_p);
    assert_eq!(cpu.registers.s, 0xFF);
}

#[test]
fn test_interrupt_address_reads_vector_table() {
    let (mmu, cpu) = setup(&[]);
    {
        let mut m = mmu.borrow_mut();
        m.write(0xFFFC, 0x00).unwrap();
        m.write(0xFFFD, 0x80).unwrap();
        m.write(0xFFFA, 0x10).unwrap();
        m.write(0xFFFB, 0xC0).unwrap();
    }

    assert_eq!(cpu.interrupt_address(Interrupt::Brk).unwrap(), 0x9000);
    assert_eq!(cpu.interrupt_address(Interrupt::Irq).unwrap(), 0x9000);
    assert_eq!(cpu.interrupt_address(Interrupt::Reset).unwrap(), 0x8000);
    assert_eq!(cpu.interrupt_address(Interrupt::Nmi).unwrap(), 0xC010);
}

#[test]
fn test_interrupt_address_fails_when_vectors_unmapped() {
    let mut mmu = MMU::new();
    mmu.add_block(0x8000, 0x100, false, None, 0).unwrap();
    let cpu = CPU::new(Rc::new(RefCell::new(mmu)), Some(0x8000)).unwrap();

    assert!(cpu.interrupt_address(Interrupt::Brk).is_err());
}

// ========== Flag instructions ==========

#[test]
fn test_sec_clc() {
    let (_, mut cpu) = setup(&[0x38, 0x18]);

    let cycles = cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::Carry));
    assert_eq!(cycles, 2);

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Carry));
}

#[test]
fn test_sed_cld() {
    let (_, mut cpu) = setup(&[0xF8, 0xD8]);

    cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::Decimal));
    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Decimal));
}

#[test]
fn test_sei_cli() {
    let (_, mut cpu) = setup(&[0x58, 0x78]);

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::InterruptDisable));
    cpu.step().unwrap();
    assert!(cpu.registers.get_flag(Flag::InterruptDisable));
}

#[test]
fn test_clv() {
    let (_, mut cpu) = setup(&[0xB8]);
    cpu.registers.set_flag(Flag::Overflow, true);

    cpu.step().unwrap();
    assert!(!cpu.registers.get_flag(Flag::Overflow));
}

// ========== Reset ==========

#[test]
fn test_reset_restores_registers_and_memory() {
    let (mmu, mut cpu) = setup(&[0xA9, 0x42]);
    mmu.borrow_mut().write(0x0010, 0x99).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.registers.a, 0x42);

    cpu.reset();
    assert_eq!(cpu.registers.a, 0x00);
    assert_eq!(cpu.registers.pc, 0x0000);
    assert_eq!(cpu.registers.s, 0xFF);
    assert_eq!(cpu.registers.p, 0b0010_0100);
    // The MMU is back to its registration-time contents.
    assert_eq!(mmu.borrow().read(0x0010).unwrap(), 0x00);
    assert_eq!(mmu.borrow().read(0x8000).unwrap(), 0xA9);
}
