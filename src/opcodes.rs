//! # Instruction Set and Dispatch Table
//!
//! The single source of truth for the instruction set: a declarative table
//! of operation descriptors (mnemonic, operand class, and the addressing
//! variants with their cycle costs and opcode bytes), compiled once into a
//! 256-entry dispatch table.
//!
//! Compilation validates the table: registering two opcode bytes to the
//! same slot is a construction-time [`DispatchError::DuplicateOpcode`], not
//! a runtime condition.
//!
//! Beyond the 151 documented opcodes, the table maps the undocumented NOP
//! aliases (which still resolve and discard their operand) and the 0xEB
//! SBC alias.

use crate::addressing::AddressingMode as Mode;
use crate::registers::{Flag, Reg};

/// Operation selector bound to each dispatch slot.
///
/// Operations that the source instruction table parameterizes with a fixed
/// operand carry that operand as payload: branches take the flag and the
/// value it must have for the branch to be taken, flag instructions name
/// the flag, transfers name the source and destination registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    Bit,
    /// Conditional branch, taken when `flag` equals `expected`.
    Branch { flag: Flag, expected: bool },
    Brk,
    /// CLC, CLI, CLV, CLD.
    Clear(Flag),
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    /// SEC, SEI, SED.
    Set(Flag),
    Sta,
    Stx,
    Sty,
    /// TAX, TXA, TAY, TYA, TXS, TSX as (source, destination).
    Transfer(Reg, Reg),
}

/// Whether an instruction consumes its operand as a dereferenced value or
/// as a resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandClass {
    /// The operation receives the byte at the resolved address (or the
    /// immediate byte itself).
    Value,
    /// The operation receives the resolved 16-bit address.
    Address,
}

/// One instruction: mnemonic, operand class, and its addressing variants.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    /// Assembler mnemonic.
    pub mnemonic: &'static str,
    /// How operands are delivered to the operation.
    pub class: OperandClass,
    /// The addressing modes this instruction exists in.
    pub variants: &'static [Variant],
}

/// One addressing variant of an instruction.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Operation bound to these opcode bytes.
    pub op: Op,
    /// Addressing mode resolving the operand.
    pub mode: Mode,
    /// Base cycle cost, before page-crossing penalties.
    pub cycles: u8,
    /// Opcode bytes mapping to this variant. Most variants own a single
    /// byte; NOP and SBC also claim their undocumented aliases.
    pub opcodes: &'static [u8],
}

/// The complete instruction set, grouped by mnemonic.
pub const INSTRUCTION_SET: &[Instruction] = &[
    Instruction { mnemonic: "ADC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Adc, mode: Mode::Immediate, cycles: 2, opcodes: &[0x69] },
        Variant { op: Op::Adc, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x65] },
        Variant { op: Op::Adc, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x75] },
        Variant { op: Op::Adc, mode: Mode::Absolute, cycles: 4, opcodes: &[0x6D] },
        Variant { op: Op::Adc, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0x7D] },
        Variant { op: Op::Adc, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0x79] },
        Variant { op: Op::Adc, mode: Mode::IndirectX, cycles: 6, opcodes: &[0x61] },
        Variant { op: Op::Adc, mode: Mode::IndirectY, cycles: 5, opcodes: &[0x71] },
    ]},
    Instruction { mnemonic: "AND", class: OperandClass::Value, variants: &[
        Variant { op: Op::And, mode: Mode::Immediate, cycles: 2, opcodes: &[0x29] },
        Variant { op: Op::And, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x25] },
        Variant { op: Op::And, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x35] },
        Variant { op: Op::And, mode: Mode::Absolute, cycles: 4, opcodes: &[0x2D] },
        Variant { op: Op::And, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0x3D] },
        Variant { op: Op::And, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0x39] },
        Variant { op: Op::And, mode: Mode::IndirectX, cycles: 6, opcodes: &[0x21] },
        Variant { op: Op::And, mode: Mode::IndirectY, cycles: 5, opcodes: &[0x31] },
    ]},
    Instruction { mnemonic: "ASL", class: OperandClass::Address, variants: &[
        Variant { op: Op::Asl, mode: Mode::Accumulator, cycles: 2, opcodes: &[0x0A] },
        Variant { op: Op::Asl, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0x06] },
        Variant { op: Op::Asl, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0x16] },
        Variant { op: Op::Asl, mode: Mode::Absolute, cycles: 6, opcodes: &[0x0E] },
        Variant { op: Op::Asl, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0x1E] },
    ]},
    Instruction { mnemonic: "BPL", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Negative, expected: false }, mode: Mode::Relative, cycles: 2, opcodes: &[0x10] },
    ]},
    Instruction { mnemonic: "BMI", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Negative, expected: true }, mode: Mode::Relative, cycles: 2, opcodes: &[0x30] },
    ]},
    Instruction { mnemonic: "BVC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Overflow, expected: false }, mode: Mode::Relative, cycles: 2, opcodes: &[0x50] },
    ]},
    Instruction { mnemonic: "BVS", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Overflow, expected: true }, mode: Mode::Relative, cycles: 2, opcodes: &[0x70] },
    ]},
    Instruction { mnemonic: "BCC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Carry, expected: false }, mode: Mode::Relative, cycles: 2, opcodes: &[0x90] },
    ]},
    Instruction { mnemonic: "BCS", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Carry, expected: true }, mode: Mode::Relative, cycles: 2, opcodes: &[0xB0] },
    ]},
    Instruction { mnemonic: "BNE", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Zero, expected: false }, mode: Mode::Relative, cycles: 2, opcodes: &[0xD0] },
    ]},
    Instruction { mnemonic: "BEQ", class: OperandClass::Value, variants: &[
        Variant { op: Op::Branch { flag: Flag::Zero, expected: true }, mode: Mode::Relative, cycles: 2, opcodes: &[0xF0] },
    ]},
    Instruction { mnemonic: "BIT", class: OperandClass::Value, variants: &[
        Variant { op: Op::Bit, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x24] },
        Variant { op: Op::Bit, mode: Mode::Absolute, cycles: 4, opcodes: &[0x2C] },
    ]},
    Instruction { mnemonic: "BRK", class: OperandClass::Value, variants: &[
        Variant { op: Op::Brk, mode: Mode::Implicit, cycles: 7, opcodes: &[0x00] },
    ]},
    Instruction { mnemonic: "CMP", class: OperandClass::Value, variants: &[
        Variant { op: Op::Cmp, mode: Mode::Immediate, cycles: 2, opcodes: &[0xC9] },
        Variant { op: Op::Cmp, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xC5] },
        Variant { op: Op::Cmp, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0xD5] },
        Variant { op: Op::Cmp, mode: Mode::Absolute, cycles: 4, opcodes: &[0xCD] },
        Variant { op: Op::Cmp, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0xDD] },
        Variant { op: Op::Cmp, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0xD9] },
        Variant { op: Op::Cmp, mode: Mode::IndirectX, cycles: 6, opcodes: &[0xC1] },
        Variant { op: Op::Cmp, mode: Mode::IndirectY, cycles: 5, opcodes: &[0xD1] },
    ]},
    Instruction { mnemonic: "CPX", class: OperandClass::Value, variants: &[
        Variant { op: Op::Cpx, mode: Mode::Immediate, cycles: 2, opcodes: &[0xE0] },
        Variant { op: Op::Cpx, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xE4] },
        Variant { op: Op::Cpx, mode: Mode::Absolute, cycles: 4, opcodes: &[0xEC] },
    ]},
    Instruction { mnemonic: "CPY", class: OperandClass::Value, variants: &[
        Variant { op: Op::Cpy, mode: Mode::Immediate, cycles: 2, opcodes: &[0xC0] },
        Variant { op: Op::Cpy, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xC4] },
        Variant { op: Op::Cpy, mode: Mode::Absolute, cycles: 4, opcodes: &[0xCC] },
    ]},
    Instruction { mnemonic: "DEC", class: OperandClass::Address, variants: &[
        Variant { op: Op::Dec, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0xC6] },
        Variant { op: Op::Dec, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0xD6] },
        Variant { op: Op::Dec, mode: Mode::Absolute, cycles: 6, opcodes: &[0xCE] },
        Variant { op: Op::Dec, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0xDE] },
    ]},
    Instruction { mnemonic: "DEX", class: OperandClass::Address, variants: &[
        Variant { op: Op::Dex, mode: Mode::Implicit, cycles: 2, opcodes: &[0xCA] },
    ]},
    Instruction { mnemonic: "DEY", class: OperandClass::Address, variants: &[
        Variant { op: Op::Dey, mode: Mode::Implicit, cycles: 2, opcodes: &[0x88] },
    ]},
    Instruction { mnemonic: "EOR", class: OperandClass::Value, variants: &[
        Variant { op: Op::Eor, mode: Mode::Immediate, cycles: 2, opcodes: &[0x49] },
        Variant { op: Op::Eor, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x45] },
        Variant { op: Op::Eor, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x55] },
        Variant { op: Op::Eor, mode: Mode::Absolute, cycles: 4, opcodes: &[0x4D] },
        Variant { op: Op::Eor, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0x5D] },
        Variant { op: Op::Eor, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0x59] },
        Variant { op: Op::Eor, mode: Mode::IndirectX, cycles: 6, opcodes: &[0x41] },
        Variant { op: Op::Eor, mode: Mode::IndirectY, cycles: 5, opcodes: &[0x51] },
    ]},
    Instruction { mnemonic: "CLC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Clear(Flag::Carry), mode: Mode::Implicit, cycles: 2, opcodes: &[0x18] },
    ]},
    Instruction { mnemonic: "CLI", class: OperandClass::Value, variants: &[
        Variant { op: Op::Clear(Flag::InterruptDisable), mode: Mode::Implicit, cycles: 2, opcodes: &[0x58] },
    ]},
    Instruction { mnemonic: "CLV", class: OperandClass::Value, variants: &[
        Variant { op: Op::Clear(Flag::Overflow), mode: Mode::Implicit, cycles: 2, opcodes: &[0xB8] },
    ]},
    Instruction { mnemonic: "CLD", class: OperandClass::Value, variants: &[
        Variant { op: Op::Clear(Flag::Decimal), mode: Mode::Implicit, cycles: 2, opcodes: &[0xD8] },
    ]},
    Instruction { mnemonic: "SEC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Set(Flag::Carry), mode: Mode::Implicit, cycles: 2, opcodes: &[0x38] },
    ]},
    Instruction { mnemonic: "SEI", class: OperandClass::Value, variants: &[
        Variant { op: Op::Set(Flag::InterruptDisable), mode: Mode::Implicit, cycles: 2, opcodes: &[0x78] },
    ]},
    Instruction { mnemonic: "SED", class: OperandClass::Value, variants: &[
        Variant { op: Op::Set(Flag::Decimal), mode: Mode::Implicit, cycles: 2, opcodes: &[0xF8] },
    ]},
    Instruction { mnemonic: "INC", class: OperandClass::Address, variants: &[
        Variant { op: Op::Inc, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0xE6] },
        Variant { op: Op::Inc, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0xF6] },
        Variant { op: Op::Inc, mode: Mode::Absolute, cycles: 6, opcodes: &[0xEE] },
        Variant { op: Op::Inc, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0xFE] },
    ]},
    Instruction { mnemonic: "INX", class: OperandClass::Address, variants: &[
        Variant { op: Op::Inx, mode: Mode::Implicit, cycles: 2, opcodes: &[0xE8] },
    ]},
    Instruction { mnemonic: "INY", class: OperandClass::Address, variants: &[
        Variant { op: Op::Iny, mode: Mode::Implicit, cycles: 2, opcodes: &[0xC8] },
    ]},
    Instruction { mnemonic: "JMP", class: OperandClass::Address, variants: &[
        Variant { op: Op::Jmp, mode: Mode::Absolute, cycles: 3, opcodes: &[0x4C] },
        Variant { op: Op::Jmp, mode: Mode::Indirect, cycles: 5, opcodes: &[0x6C] },
    ]},
    Instruction { mnemonic: "JSR", class: OperandClass::Address, variants: &[
        Variant { op: Op::Jsr, mode: Mode::Absolute, cycles: 6, opcodes: &[0x20] },
    ]},
    Instruction { mnemonic: "LDA", class: OperandClass::Value, variants: &[
        Variant { op: Op::Lda, mode: Mode::Immediate, cycles: 2, opcodes: &[0xA9] },
        Variant { op: Op::Lda, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xA5] },
        Variant { op: Op::Lda, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0xB5] },
        Variant { op: Op::Lda, mode: Mode::Absolute, cycles: 4, opcodes: &[0xAD] },
        Variant { op: Op::Lda, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0xBD] },
        Variant { op: Op::Lda, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0xB9] },
        Variant { op: Op::Lda, mode: Mode::IndirectX, cycles: 6, opcodes: &[0xA1] },
        Variant { op: Op::Lda, mode: Mode::IndirectY, cycles: 5, opcodes: &[0xB1] },
    ]},
    Instruction { mnemonic: "LDX", class: OperandClass::Value, variants: &[
        Variant { op: Op::Ldx, mode: Mode::Immediate, cycles: 2, opcodes: &[0xA2] },
        Variant { op: Op::Ldx, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xA6] },
        Variant { op: Op::Ldx, mode: Mode::ZeroPageY, cycles: 4, opcodes: &[0xB6] },
        Variant { op: Op::Ldx, mode: Mode::Absolute, cycles: 4, opcodes: &[0xAE] },
        Variant { op: Op::Ldx, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0xBE] },
    ]},
    Instruction { mnemonic: "LDY", class: OperandClass::Value, variants: &[
        Variant { op: Op::Ldy, mode: Mode::Immediate, cycles: 2, opcodes: &[0xA0] },
        Variant { op: Op::Ldy, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xA4] },
        Variant { op: Op::Ldy, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0xB4] },
        Variant { op: Op::Ldy, mode: Mode::Absolute, cycles: 4, opcodes: &[0xAC] },
        Variant { op: Op::Ldy, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0xBC] },
    ]},
    Instruction { mnemonic: "LSR", class: OperandClass::Address, variants: &[
        Variant { op: Op::Lsr, mode: Mode::Accumulator, cycles: 2, opcodes: &[0x4A] },
        Variant { op: Op::Lsr, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0x46] },
        Variant { op: Op::Lsr, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0x56] },
        Variant { op: Op::Lsr, mode: Mode::Absolute, cycles: 6, opcodes: &[0x4E] },
        Variant { op: Op::Lsr, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0x5E] },
    ]},
    // 0xEA is the documented NOP; the rest are undocumented aliases that
    // still resolve (and discard) an operand.
    Instruction { mnemonic: "NOP", class: OperandClass::Value, variants: &[
        Variant { op: Op::Nop, mode: Mode::Implicit, cycles: 2, opcodes: &[0x1A, 0x3A, 0x5A, 0x7A, 0xDA, 0xEA, 0xFA] },
        Variant { op: Op::Nop, mode: Mode::Immediate, cycles: 2, opcodes: &[0x80, 0x82, 0x89, 0xC2, 0xE2] },
        Variant { op: Op::Nop, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x04, 0x44, 0x64] },
        Variant { op: Op::Nop, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x14, 0x34, 0x54, 0x74, 0xD4, 0xF4] },
        Variant { op: Op::Nop, mode: Mode::Absolute, cycles: 4, opcodes: &[0x0C] },
        Variant { op: Op::Nop, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0x1C, 0x3C, 0x5C, 0x7C, 0xDC, 0xFC] },
    ]},
    Instruction { mnemonic: "ORA", class: OperandClass::Value, variants: &[
        Variant { op: Op::Ora, mode: Mode::Immediate, cycles: 2, opcodes: &[0x09] },
        Variant { op: Op::Ora, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x05] },
        Variant { op: Op::Ora, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x15] },
        Variant { op: Op::Ora, mode: Mode::Absolute, cycles: 4, opcodes: &[0x0D] },
        Variant { op: Op::Ora, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0x1D] },
        Variant { op: Op::Ora, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0x19] },
        Variant { op: Op::Ora, mode: Mode::IndirectX, cycles: 6, opcodes: &[0x01] },
        Variant { op: Op::Ora, mode: Mode::IndirectY, cycles: 5, opcodes: &[0x11] },
    ]},
    Instruction { mnemonic: "PHA", class: OperandClass::Address, variants: &[
        Variant { op: Op::Pha, mode: Mode::Implicit, cycles: 3, opcodes: &[0x48] },
    ]},
    Instruction { mnemonic: "PLA", class: OperandClass::Address, variants: &[
        Variant { op: Op::Pla, mode: Mode::Implicit, cycles: 4, opcodes: &[0x68] },
    ]},
    Instruction { mnemonic: "PHP", class: OperandClass::Address, variants: &[
        Variant { op: Op::Php, mode: Mode::Implicit, cycles: 3, opcodes: &[0x08] },
    ]},
    Instruction { mnemonic: "PLP", class: OperandClass::Address, variants: &[
        Variant { op: Op::Plp, mode: Mode::Implicit, cycles: 4, opcodes: &[0x28] },
    ]},
    Instruction { mnemonic: "TAX", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::A, Reg::X), mode: Mode::Implicit, cycles: 2, opcodes: &[0xAA] },
    ]},
    Instruction { mnemonic: "TXA", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::X, Reg::A), mode: Mode::Implicit, cycles: 2, opcodes: &[0x8A] },
    ]},
    Instruction { mnemonic: "TAY", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::A, Reg::Y), mode: Mode::Implicit, cycles: 2, opcodes: &[0xA8] },
    ]},
    Instruction { mnemonic: "TYA", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::Y, Reg::A), mode: Mode::Implicit, cycles: 2, opcodes: &[0x98] },
    ]},
    Instruction { mnemonic: "TXS", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::X, Reg::S), mode: Mode::Implicit, cycles: 2, opcodes: &[0x9A] },
    ]},
    Instruction { mnemonic: "TSX", class: OperandClass::Address, variants: &[
        Variant { op: Op::Transfer(Reg::S, Reg::X), mode: Mode::Implicit, cycles: 2, opcodes: &[0xBA] },
    ]},
    Instruction { mnemonic: "ROL", class: OperandClass::Address, variants: &[
        Variant { op: Op::Rol, mode: Mode::Accumulator, cycles: 2, opcodes: &[0x2A] },
        Variant { op: Op::Rol, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0x26] },
        Variant { op: Op::Rol, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0x36] },
        Variant { op: Op::Rol, mode: Mode::Absolute, cycles: 6, opcodes: &[0x2E] },
        Variant { op: Op::Rol, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0x3E] },
    ]},
    Instruction { mnemonic: "ROR", class: OperandClass::Address, variants: &[
        Variant { op: Op::Ror, mode: Mode::Accumulator, cycles: 2, opcodes: &[0x6A] },
        Variant { op: Op::Ror, mode: Mode::ZeroPage, cycles: 5, opcodes: &[0x66] },
        Variant { op: Op::Ror, mode: Mode::ZeroPageX, cycles: 6, opcodes: &[0x76] },
        Variant { op: Op::Ror, mode: Mode::Absolute, cycles: 6, opcodes: &[0x6E] },
        Variant { op: Op::Ror, mode: Mode::AbsoluteX, cycles: 7, opcodes: &[0x7E] },
    ]},
    Instruction { mnemonic: "RTI", class: OperandClass::Address, variants: &[
        Variant { op: Op::Rti, mode: Mode::Implicit, cycles: 6, opcodes: &[0x40] },
    ]},
    Instruction { mnemonic: "RTS", class: OperandClass::Address, variants: &[
        Variant { op: Op::Rts, mode: Mode::Implicit, cycles: 6, opcodes: &[0x60] },
    ]},
    Instruction { mnemonic: "SBC", class: OperandClass::Value, variants: &[
        Variant { op: Op::Sbc, mode: Mode::Immediate, cycles: 2, opcodes: &[0xE9, 0xEB] },
        Variant { op: Op::Sbc, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0xE5] },
        Variant { op: Op::Sbc, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0xF5] },
        Variant { op: Op::Sbc, mode: Mode::Absolute, cycles: 4, opcodes: &[0xED] },
        Variant { op: Op::Sbc, mode: Mode::AbsoluteX, cycles: 4, opcodes: &[0xFD] },
        Variant { op: Op::Sbc, mode: Mode::AbsoluteY, cycles: 4, opcodes: &[0xF9] },
        Variant { op: Op::Sbc, mode: Mode::IndirectX, cycles: 6, opcodes: &[0xE1] },
        Variant { op: Op::Sbc, mode: Mode::IndirectY, cycles: 5, opcodes: &[0xF1] },
    ]},
    Instruction { mnemonic: "STA", class: OperandClass::Address, variants: &[
        Variant { op: Op::Sta, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x85] },
        Variant { op: Op::Sta, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x95] },
        Variant { op: Op::Sta, mode: Mode::Absolute, cycles: 4, opcodes: &[0x8D] },
        Variant { op: Op::Sta, mode: Mode::AbsoluteX, cycles: 5, opcodes: &[0x9D] },
        Variant { op: Op::Sta, mode: Mode::AbsoluteY, cycles: 5, opcodes: &[0x99] },
        Variant { op: Op::Sta, mode: Mode::IndirectX, cycles: 6, opcodes: &[0x81] },
        Variant { op: Op::Sta, mode: Mode::IndirectY, cycles: 6, opcodes: &[0x91] },
    ]},
    Instruction { mnemonic: "STX", class: OperandClass::Address, variants: &[
        Variant { op: Op::Stx, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x86] },
        Variant { op: Op::Stx, mode: Mode::ZeroPageY, cycles: 4, opcodes: &[0x96] },
        Variant { op: Op::Stx, mode: Mode::Absolute, cycles: 4, opcodes: &[0x8E] },
    ]},
    Instruction { mnemonic: "STY", class: OperandClass::Address, variants: &[
        Variant { op: Op::Sty, mode: Mode::ZeroPage, cycles: 3, opcodes: &[0x84] },
        Variant { op: Op::Sty, mode: Mode::ZeroPageX, cycles: 4, opcodes: &[0x94] },
        Variant { op: Op::Sty, mode: Mode::Absolute, cycles: 4, opcodes: &[0x8C] },
    ]},
];

/// How the operand reaches the operation: not at all (implicit,
/// accumulator, and relative variants resolve inside the operation), as a
/// dereferenced value, or as an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    /// No memory operand to resolve before executing.
    None,
    /// Resolve the mode to an address and read the byte there (or take the
    /// immediate byte).
    Value(Mode),
    /// Resolve the mode to an address.
    Address(Mode),
}

/// One compiled dispatch slot: operation, addressing resolver, base cycles.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEntry {
    /// Operation to execute.
    pub op: Op,
    /// Operand resolution bound to this opcode.
    pub resolver: Resolver,
    /// Base cycle cost; page-crossing and branch penalties are added by the
    /// resolver and the operation.
    pub cycles: u8,
}

/// Instruction-table validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Two instruction definitions claim the same opcode byte.
    DuplicateOpcode(u8),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DispatchError::DuplicateOpcode(opcode) => {
                write!(f, "opcode 0x{:02X} is already defined", opcode)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// 256-entry dispatch table compiled from an instruction list.
#[derive(Debug, Clone)]
pub struct DispatchTable {
    entries: [Option<DispatchEntry>; 256],
}

impl DispatchTable {
    /// Compile an instruction list into a dispatch table, validating that
    /// no opcode byte is claimed twice.
    pub fn compile(instructions: &[Instruction]) -> Result<Self, DispatchError> {
        let mut entries: [Option<DispatchEntry>; 256] = [None; 256];

        for instruction in instructions {
            for variant in instruction.variants {
                let resolver = match variant.mode {
                    Mode::Implicit | Mode::Accumulator | Mode::Relative => Resolver::None,
                    mode => match instruction.class {
                        OperandClass::Value => Resolver::Value(mode),
                        OperandClass::Address => Resolver::Address(mode),
                    },
                };

                for &opcode in variant.opcodes {
                    if entries[opcode as usize].is_some() {
                        return Err(DispatchError::DuplicateOpcode(opcode));
                    }
                    entries[opcode as usize] = Some(DispatchEntry {
                        op: variant.op,
                        resolver,
                        cycles: variant.cycles,
                    });
                }
            }
        }

        Ok(DispatchTable { entries })
    }

    /// The dispatch entry for an opcode byte, if one is mapped.
    pub fn entry(&self, opcode: u8) -> Option<DispatchEntry> {
        self.entries[opcode as usize]
    }

    /// Number of opcode bytes with a dispatch entry.
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
