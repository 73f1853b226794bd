//! Tests for NOP and its undocumented aliases: no architectural effect,
//! but each alias still consumes its addressing mode's operand bytes and
//! cycle cost.

use std::cell::RefCell;
use std::rc::Rc;

use emu6502::{CPU, MMU};

fn setup(program: &[u8]) -> (Rc<RefCell<MMU>>, CPU<MMU>) {
    let mut mmu = MMU::new();
    mmu.add_block(0x0000, 0x4000, false, None, 0).unwrap();
    mmu.add_block(0x8000, 0x4000, false, Some(program), 0).unwrap();
    let mmu = Rc::new(RefCell::new(mmu));
    let cpu = CPU::new(Rc::clone(&mmu), Some(0x8000)).unwrap();
    (mmu, cpu)
}

#[test]
fn test_documented_nop() {
    let (_, mut cpu) = setup(&[0xEA]);
    let p_before = cpu.registers.p;

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x8001);
    assert_eq!(cpu.registers.p, p_before);
    assert_eq!(cycles, 2);
}

#[test]
fn test_implied_aliases() {
    for opcode in [0x1A, 0x3A, 0x5A, 0x7A, 0xDA, 0xFA] {
        let (_, mut cpu) = setup(&[opcode]);
        let cycles = cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x8001, "opcode {opcode:#04x}");
        assert_eq!(cycles, 2, "opcode {opcode:#04x}");
    }
}

#[test]
fn test_immediate_alias_consumes_operand() {
    let (_, mut cpu) = setup(&[0x80, 0x55]);
    cpu.registers.a = 0x11;

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x8002);
    assert_eq!(cpu.registers.a, 0x11);
    assert_eq!(cycles, 2);
}

#[test]
fn test_zero_page_alias_reads_memory() {
    let (_, mut cpu) = setup(&[0x04, 0x10]);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x8002);
    assert_eq!(cycles, 3);
}

#[test]
fn test_absolute_alias() {
    let (_, mut cpu) = setup(&[0x0C, 0x00, 0x20]);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x8003);
    assert_eq!(cycles, 4);
}

#[test]
fn test_absolute_x_alias_charges_boundary_penalty() {
    // Even a NOP pays the indexed-mode penalty: 0x00FE + 1 steps past the
    // 0xFF division boundary.
    let (_, mut cpu) = setup(&[0x1C, 0xFE, 0x00]);
    cpu.registers.x = 0x01;

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.registers.pc, 0x8003);
    assert_eq!(cycles, 5);
}

#[test]
fn test_alias_operand_read_can_fail() {
    // The absolute alias dereferences its operand; an unmapped address
    // propagates out of the step like any other read.
    let (_, mut cpu) = setup(&[0x0C, 0x00, 0x70]);

    assert!(cpu.step().is_err());
}
