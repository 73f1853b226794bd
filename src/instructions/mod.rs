//! # Instruction Implementations
//!
//! The operation semantics, organized by category:
//!
//! - **alu**: arithmetic and logic (ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY)
//! - **branches**: the conditional branches (BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ)
//! - **shifts**: shift and rotate (ASL, LSR, ROL, ROR)
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, BRK, RTI
//! - **stack**: PHA, PLA, PHP, PLP
//! - **flags**: CLC, CLI, CLV, CLD, SEC, SEI, SED
//! - **transfer**: TAX, TXA, TAY, TYA, TXS, TSX

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::cpu::{Operand, CPU};
use crate::memory::MemoryBus;
use crate::opcodes::Op;
use crate::ExecutionError;

/// Invoke the operation bound to a dispatch entry with its resolved
/// operand.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: Op,
    operand: Operand,
) -> Result<(), ExecutionError> {
    match op {
        Op::Adc => alu::adc(cpu, operand.value()),
        Op::And => alu::and(cpu, operand.value()),
        Op::Asl => shifts::asl(cpu, operand)?,
        Op::Bit => alu::bit(cpu, operand.value()),
        Op::Branch { flag, expected } => branches::branch(cpu, flag, expected)?,
        Op::Brk => control::brk(cpu)?,
        Op::Clear(flag) => flags::clear(cpu, flag),
        Op::Cmp => alu::cmp(cpu, operand.value()),
        Op::Cpx => alu::cpx(cpu, operand.value()),
        Op::Cpy => alu::cpy(cpu, operand.value()),
        Op::Dec => inc_dec::dec(cpu, operand.address())?,
        Op::Dex => inc_dec::dex(cpu),
        Op::Dey => inc_dec::dey(cpu),
        Op::Eor => alu::eor(cpu, operand.value()),
        Op::Inc => inc_dec::inc(cpu, operand.address())?,
        Op::Inx => inc_dec::inx(cpu),
        Op::Iny => inc_dec::iny(cpu),
        Op::Jmp => control::jmp(cpu, operand.address()),
        Op::Jsr => control::jsr(cpu, operand.address())?,
        Op::Lda => load_store::lda(cpu, operand.value()),
        Op::Ldx => load_store::ldx(cpu, operand.value()),
        Op::Ldy => load_store::ldy(cpu, operand.value()),
        Op::Lsr => shifts::lsr(cpu, operand)?,
        // The operand (if any) was already resolved and discarded, cycle
        // penalties included.
        Op::Nop => {}
        Op::Ora => alu::ora(cpu, operand.value()),
        Op::Pha => stack::pha(cpu)?,
        Op::Php => stack::php(cpu)?,
        Op::Pla => stack::pla(cpu)?,
        Op::Plp => stack::plp(cpu)?,
        Op::Rol => shifts::rol(cpu, operand)?,
        Op::Ror => shifts::ror(cpu, operand)?,
        Op::Rti => control::rti(cpu)?,
        Op::Rts => control::rts(cpu)?,
        Op::Sbc => alu::sbc(cpu, operand.value()),
        Op::Set(flag) => flags::set(cpu, flag),
        Op::Sta => load_store::sta(cpu, operand.address())?,
        Op::Stx => load_store::stx(cpu, operand.address())?,
        Op::Sty => load_store::sty(cpu, operand.address())?,
        Op::Transfer(src, dst) => transfer::transfer(cpu, src, dst),
    }
    Ok(())
}
