//! # Addressing Modes
//!
//! The addressing modes the dispatch table can bind to an operation. Each
//! mode determines how the CPU turns the bytes following an opcode (and the
//! current register state) into an operand address or value; the resolution
//! itself lives on the CPU.

/// 6502 addressing mode enumeration.
///
/// Operand bytes consumed beyond the opcode:
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions, consumed by the
    /// branch operation itself.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. May cost one extra cycle when the
    /// indexed address crosses a page boundary.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. May cost one extra cycle when the
    /// indexed address crosses a page boundary.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer, reproducing the 6502 page-wrap bug:
    /// a pointer whose low byte is 0xFF fetches its high byte from the
    /// start of the same page rather than the next one. Only used by JMP.
    ///
    /// Example: JMP ($30FF)
    Indirect,

    /// Indexed indirect: the operand byte plus X (wrapping in the zero
    /// page) names a zero-page pointer to dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand byte names a zero-page pointer whose
    /// word is then indexed by Y. May cost one extra cycle on page cross.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}
