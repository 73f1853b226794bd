//! # CPU State and Execution
//!
//! The CPU owns a [`Registers`] file and a shared handle to the memory bus,
//! and executes exactly one instruction per [`CPU::step`] call: fetch the
//! opcode through the bus at `pc`, look up the dispatch entry, resolve the
//! operand with the bound addressing mode (which may itself perform bus
//! reads and add page-crossing cycles), execute the operation, and add the
//! base cycle cost.
//!
//! Driving a continuous run loop (and accumulating a total cycle count
//! across steps) is a caller responsibility; `cycle_count` is transient
//! per-step output.

use std::cell::RefCell;
use std::rc::Rc;

use crate::addressing::AddressingMode;
use crate::memory::{MemoryBus, MemoryError};
use crate::opcodes::{DispatchError, DispatchTable, Resolver, INSTRUCTION_SET};
use crate::registers::Registers;
use crate::{instructions, ExecutionError};

/// Interrupt sources with a vector table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Abort,
    Cop,
    Irq,
    Brk,
    Nmi,
    Reset,
}

impl Interrupt {
    /// Fixed address of this interrupt's vector word.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Abort => 0xFFF8,
            Interrupt::Cop => 0xFFF4,
            Interrupt::Irq => 0xFFFE,
            Interrupt::Brk => 0xFFFE,
            Interrupt::Nmi => 0xFFFA,
            Interrupt::Reset => 0xFFFC,
        }
    }
}

/// Operand handed to an operation after addressing-mode resolution.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operand {
    /// Implicit, accumulator, and relative variants carry no resolved
    /// operand.
    None,
    /// The dereferenced (or immediate) byte.
    Value(u8),
    /// The resolved 16-bit address.
    Address(u16),
}

impl Operand {
    /// The byte payload. The dispatch table only pairs value operations
    /// with value-producing resolvers.
    pub(crate) fn value(self) -> u8 {
        match self {
            Operand::Value(v) => v,
            _ => unreachable!("value operation dispatched without a value operand"),
        }
    }

    /// The address payload. The dispatch table only pairs address
    /// operations with address-producing resolvers.
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address(a) => a,
            _ => unreachable!("address operation dispatched without an address operand"),
        }
    }
}

/// Decode a branch displacement byte as a signed offset.
pub(crate) fn from_twos_complement(v: u8) -> i32 {
    i32::from(v & 0x7F) - i32::from(v & 0x80)
}

/// Packed BCD byte to its decimal value (0x42 -> 42).
pub(crate) fn from_bcd(v: u8) -> u8 {
    (v >> 4) * 10 + (v & 0x0F)
}

/// Decimal value (0-99) to its packed BCD encoding (42 -> 0x42).
pub(crate) fn to_bcd(v: u8) -> u8 {
    (v / 10) * 16 + (v % 10)
}

/// The 6502 CPU.
///
/// Generic over the memory bus; the bus is shared, not owned, so an
/// embedding system can inspect the memory between steps or drive several
/// CPUs over one bus. Callers must not hold a borrow of the bus across
/// `step` (the shared handle is a `RefCell`, and the step borrows it for
/// every memory access).
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use emu6502::{CPU, MMU};
///
/// let mut mmu = MMU::new();
/// mmu.add_block(0x8000, 0x0100, true, Some(&[0xA9, 0x42]), 0).unwrap(); // LDA #$42
/// let mmu = Rc::new(RefCell::new(mmu));
///
/// let mut cpu = CPU::new(Rc::clone(&mmu), Some(0x8000)).unwrap();
/// let cycles = cpu.step().unwrap();
///
/// assert_eq!(cpu.registers.a, 0x42);
/// assert_eq!(cpu.registers.pc, 0x8002);
/// assert_eq!(cycles, 2);
/// ```
pub struct CPU<M: MemoryBus> {
    /// The register file. Public so callers can stage subroutine calls
    /// (set `pc`, seed registers) and inspect results between steps.
    pub registers: Registers,
    mmu: Rc<RefCell<M>>,
    dispatch: DispatchTable,
    /// Cycles consumed by the instruction currently being stepped; reset
    /// at the start of every `step`.
    pub(crate) cycle_count: u32,
    stack_page: u8,
    magic: u8,
}

impl<M: MemoryBus> CPU<M> {
    /// Create a CPU over the given bus with default options: stack in
    /// page 1, `magic = 0xEE`.
    ///
    /// `pc` preloads the program counter; with `None` it stays at 0, and a
    /// caller that wants vector-derived startup can read
    /// [`Interrupt::Reset`] through [`CPU::interrupt_address`] and assign
    /// the result.
    ///
    /// Fails only if the instruction table is invalid (a duplicate opcode
    /// byte), which is a build-time invariant violation rather than a
    /// runtime condition.
    pub fn new(mmu: Rc<RefCell<M>>, pc: Option<u16>) -> Result<Self, DispatchError> {
        Self::with_options(mmu, pc, 0x01, 0xEE)
    }

    /// Create a CPU with an explicit stack page and magic byte.
    ///
    /// `stack_page` selects the 256-byte page backing the stack
    /// (traditionally page 1). `magic` is an opaque configuration value
    /// reserved for undocumented-opcode behavior; documented operations
    /// never consult it.
    pub fn with_options(
        mmu: Rc<RefCell<M>>,
        pc: Option<u16>,
        stack_page: u8,
        magic: u8,
    ) -> Result<Self, DispatchError> {
        Ok(CPU {
            registers: Registers::new(pc.unwrap_or(0)),
            mmu,
            dispatch: DispatchTable::compile(INSTRUCTION_SET)?,
            cycle_count: 0,
            stack_page,
            magic,
        })
    }

    /// Reset registers to power-up defaults (`pc = 0`) and restore the
    /// bus's power-on contents.
    pub fn reset(&mut self) {
        self.registers.reset(0);
        self.mmu.borrow_mut().reset();
    }

    /// Execute one instruction and return its cycle cost, including any
    /// page-crossing or taken-branch penalties.
    ///
    /// On failure the error aborts the step; register and memory mutations
    /// made before the failure point are not rolled back.
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        self.cycle_count = 0;

        let opcode = self.next_byte()?;
        let entry = self
            .dispatch
            .entry(opcode)
            .ok_or(ExecutionError::UnimplementedOpcode(opcode))?;

        let operand = self.resolve(entry.resolver)?;
        instructions::execute(self, entry.op, operand)?;

        self.cycle_count += u32::from(entry.cycles);
        Ok(self.cycle_count)
    }

    /// Cycles consumed by the most recent `step`.
    pub fn cycles(&self) -> u32 {
        self.cycle_count
    }

    /// The page backing the stack.
    pub fn stack_page(&self) -> u8 {
        self.stack_page
    }

    /// The configuration byte reserved for undocumented-opcode behavior.
    pub fn magic(&self) -> u8 {
        self.magic
    }

    /// Read an interrupt's target address from the vector table.
    pub fn interrupt_address(&self, interrupt: Interrupt) -> Result<u16, MemoryError> {
        self.mmu.borrow().read_word(interrupt.vector())
    }

    // ---- bus access ----

    pub(crate) fn read(&self, addr: u16) -> Result<u8, MemoryError> {
        self.mmu.borrow().read(addr)
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        self.mmu.borrow_mut().write(addr, value)
    }

    /// Fetch the byte at `pc` and advance `pc`.
    pub(crate) fn next_byte(&mut self) -> Result<u8, MemoryError> {
        let v = self.read(self.registers.pc)?;
        self.registers.pc = self.registers.pc.wrapping_add(1);
        Ok(v)
    }

    /// Fetch a little-endian word at `pc` and advance `pc` past it.
    pub(crate) fn next_word(&mut self) -> Result<u16, MemoryError> {
        let low = self.next_byte()?;
        let high = self.next_byte()?;
        Ok((u16::from(high) << 8) | u16::from(low))
    }

    // ---- stack ----

    /// Push a byte at `stack_page * 0x100 + s`, then decrement `s`. The
    /// pointer wraps silently; the stack never overflows into an error.
    pub(crate) fn stack_push(&mut self, value: u8) -> Result<(), MemoryError> {
        let addr = u16::from(self.stack_page) * 0x100 + u16::from(self.registers.s);
        self.write(addr, value)?;
        self.registers.s = self.registers.s.wrapping_sub(1);
        Ok(())
    }

    /// Push a word, high byte first.
    pub(crate) fn stack_push_word(&mut self, value: u16) -> Result<(), MemoryError> {
        self.stack_push((value >> 8) as u8)?;
        self.stack_push((value & 0xFF) as u8)
    }

    /// Increment `s` (wrapping), then read the byte it points at.
    pub(crate) fn stack_pop(&mut self) -> Result<u8, MemoryError> {
        let addr =
            u16::from(self.stack_page) * 0x100 + u16::from(self.registers.s.wrapping_add(1));
        let v = self.read(addr)?;
        self.registers.s = self.registers.s.wrapping_add(1);
        Ok(v)
    }

    /// Pop a word, low byte first.
    pub(crate) fn stack_pop_word(&mut self) -> Result<u16, MemoryError> {
        let low = self.stack_pop()?;
        let high = self.stack_pop()?;
        Ok((u16::from(high) << 8) | u16::from(low))
    }

    // ---- addressing-mode resolution ----

    fn resolve(&mut self, resolver: Resolver) -> Result<Operand, ExecutionError> {
        match resolver {
            Resolver::None => Ok(Operand::None),
            Resolver::Value(mode) => Ok(Operand::Value(self.operand_value(mode)?)),
            Resolver::Address(mode) => Ok(Operand::Address(self.operand_address(mode)?)),
        }
    }

    /// Resolve a value-producing operand: the immediate byte, or the byte
    /// at the mode's resolved address.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Immediate => Ok(self.next_byte()?),
            _ => {
                let addr = self.operand_address(mode)?;
                Ok(self.read(addr)?)
            }
        }
    }

    /// Resolve an address-producing operand, advancing `pc` past the
    /// operand bytes and charging page-crossing penalties where the mode
    /// defines them.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        match mode {
            AddressingMode::ZeroPage => Ok(u16::from(self.next_byte()?)),
            AddressingMode::ZeroPageX => {
                let base = self.next_byte()?;
                Ok(u16::from(base.wrapping_add(self.registers.x)))
            }
            AddressingMode::ZeroPageY => {
                let base = self.next_byte()?;
                Ok(u16::from(base.wrapping_add(self.registers.y)))
            }
            AddressingMode::Absolute => Ok(self.next_word()?),
            AddressingMode::AbsoluteX => {
                let base = self.next_word()?;
                let index = self.registers.x;
                Ok(self.indexed(base, index))
            }
            AddressingMode::AbsoluteY => {
                let base = self.next_word()?;
                let index = self.registers.y;
                Ok(self.indexed(base, index))
            }
            AddressingMode::Indirect => {
                // The pointer read doesn't carry: a pointer low byte of
                // 0xFF fetches its high byte from xx00, not the next page.
                let pointer = self.next_word()?;
                let high_pointer = if pointer & 0x00FF == 0x00FF {
                    pointer - 0x00FF
                } else {
                    pointer.wrapping_add(1)
                };
                let low = self.read(pointer)?;
                let high = self.read(high_pointer)?;
                Ok((u16::from(high) << 8) | u16::from(low))
            }
            AddressingMode::IndirectX => {
                let pointer = self.next_byte()?.wrapping_add(self.registers.x);
                let low = self.read(u16::from(pointer))?;
                let high = self.read(u16::from(pointer.wrapping_add(1)))?;
                Ok((u16::from(high) << 8) | u16::from(low))
            }
            AddressingMode::IndirectY => {
                let pointer = self.next_byte()?;
                let low = self.read(u16::from(pointer))?;
                let high = self.read(u16::from(pointer.wrapping_add(1)))?;
                let base = (u16::from(high) << 8) | u16::from(low);
                let index = self.registers.y;
                Ok(self.indexed(base, index))
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                unreachable!("mode carries no memory address")
            }
        }
    }

    /// Add an index to a base address, charging one cycle when the result
    /// lands past a 0xFF-division boundary of the base.
    ///
    /// The boundary test divides by 0xFF rather than 0x100, so it also
    /// fires at exact multiples of 0xFF (0x00FF, 0x01FE, ...) and misses
    /// some true page crossings. See `crosses_boundary`.
    fn indexed(&mut self, base: u16, index: u8) -> u16 {
        let addr = u32::from(base) + u32::from(index);
        if crosses_boundary(i32::from(base), addr as i32) {
            self.cycle_count += 1;
        }
        (addr & 0xFFFF) as u16
    }
}

/// The page-crossing boundary test: compares `floor(addr / 0xFF)` for the
/// pre- and post-index addresses.
///
/// Note the divisor is 0xFF, not 0x100: the detected boundaries sit at
/// multiples of 255, so the test fires at 0x00FF, 0x01FE, ... and misses
/// some true page crossings. Branch penalties and indexed-mode penalties
/// both use this test.
pub(crate) fn crosses_boundary(base: i32, addr: i32) -> bool {
    base.div_euclid(0xFF) != addr.div_euclid(0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MMU;

    fn setup(program: &[u8]) -> CPU<MMU> {
        let mut mmu = MMU::new();
        mmu.add_block(0x0000, 0x4000, false, None, 0).unwrap();
        mmu.add_block(0x8000, 0x4000, false, Some(program), 0).unwrap();
        CPU::new(Rc::new(RefCell::new(mmu)), Some(0x8000)).unwrap()
    }

    #[test]
    fn test_power_up_state() {
        let cpu = setup(&[]);
        assert_eq!(cpu.registers.pc, 0x8000);
        assert_eq!(cpu.registers.s, 0xFF);
        assert_eq!(cpu.registers.p, 0b0010_0100);
        assert_eq!(cpu.stack_page(), 0x01);
        assert_eq!(cpu.magic(), 0xEE);
    }

    #[test]
    fn test_unmapped_opcode_fails_after_fetch() {
        let mut cpu = setup(&[0x02]);
        assert_eq!(cpu.step(), Err(ExecutionError::UnimplementedOpcode(0x02)));
        // The opcode fetch already advanced pc.
        assert_eq!(cpu.registers.pc, 0x8001);
    }

    #[test]
    fn test_fetch_outside_any_block_fails() {
        let mut cpu = setup(&[]);
        cpu.registers.pc = 0x7000;
        assert_eq!(
            cpu.step(),
            Err(ExecutionError::Memory(MemoryError::AddressOutOfRange(0x7000)))
        );
    }

    #[test]
    fn test_bcd_conversions() {
        assert_eq!(from_bcd(0x42), 42);
        assert_eq!(from_bcd(0x99), 99);
        assert_eq!(to_bcd(42), 0x42);
        assert_eq!(to_bcd(9), 0x09);
    }

    #[test]
    fn test_twos_complement_decoding() {
        assert_eq!(from_twos_complement(0x00), 0);
        assert_eq!(from_twos_complement(0x7F), 127);
        assert_eq!(from_twos_complement(0x80), -128);
        assert_eq!(from_twos_complement(0xFF), -1);
    }

    #[test]
    fn test_boundary_test_divides_by_0xff() {
        // True page cross at a 255 multiple is seen...
        assert!(crosses_boundary(0x00FE, 0x0100));
        // ...a bare step onto 0x00FF also counts (the 0xFF quirk)...
        assert!(crosses_boundary(0x00FE, 0x00FF));
        // ...while a true cross between multiples is missed.
        assert!(!crosses_boundary(0x01FF, 0x0201));
    }

    #[test]
    fn test_interrupt_vectors() {
        assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
        assert_eq!(Interrupt::Brk.vector(), 0xFFFE);
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
        assert_eq!(Interrupt::Abort.vector(), 0xFFF8);
        assert_eq!(Interrupt::Cop.vector(), 0xFFF4);
    }
}
