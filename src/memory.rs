//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the concrete memory
//! implementation, allowing the segmented [`MMU`](crate::MMU) to be swapped
//! for test doubles or alternative memory maps.
//!
//! Unlike a raw hardware bus, accesses here are fallible: the segmented
//! memory model rejects reads of unmapped addresses and writes to read-only
//! blocks, and those failures propagate out of the instruction step that
//! triggered them.

/// Errors raised by the memory subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// A newly registered block's address range intersects an existing
    /// block's range.
    Overlap {
        /// Start of the rejected block.
        start: u16,
        /// Length of the rejected block.
        length: u16,
        /// Start of the block already claiming part of the range.
        existing_start: u16,
        /// Length of the existing block.
        existing_length: u16,
    },

    /// No block claims the address.
    AddressOutOfRange(u16),

    /// The address is claimed by a read-only block; the write was rejected
    /// entirely.
    ReadOnlyViolation(u16),

    /// Reading initial block contents from a byte stream failed.
    Io(std::io::ErrorKind),
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryError::Overlap {
                start,
                length,
                existing_start,
                existing_length,
            } => {
                write!(
                    f,
                    "memory block 0x{:04X}-0x{:04X} overlaps existing block 0x{:04X}-0x{:04X}",
                    start,
                    (*start as u32 + *length as u32).saturating_sub(1),
                    existing_start,
                    (*existing_start as u32 + *existing_length as u32).saturating_sub(1),
                )
            }
            MemoryError::AddressOutOfRange(addr) => {
                write!(f, "address 0x{:04X} is not mapped to any block", addr)
            }
            MemoryError::ReadOnlyViolation(addr) => {
                write!(f, "write to read-only address 0x{:04X}", addr)
            }
            MemoryError::Io(kind) => {
                write!(f, "reading initial block contents failed: {}", kind)
            }
        }
    }
}

impl std::error::Error for MemoryError {}

/// Byte-addressable memory as seen by the CPU.
///
/// The provided implementation is the segmented [`MMU`](crate::MMU); custom
/// implementations can model mirrored regions, bank switching, or test
/// fixtures.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, MMU};
///
/// let mut mmu = MMU::new();
/// mmu.add_block(0x0000, 0x0100, false, None, 0).unwrap();
///
/// mmu.write(0x0010, 0x42).unwrap();
/// assert_eq!(mmu.read(0x0010).unwrap(), 0x42);
/// assert!(mmu.read(0x4000).is_err()); // unmapped
/// ```
pub trait MemoryBus {
    /// Read the byte at `addr`.
    fn read(&self, addr: u16) -> Result<u8, MemoryError>;

    /// Write a byte to `addr`. A failed write has no effect on memory.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError>;

    /// Read a little-endian word: low byte at `addr`, high byte at
    /// `addr + 1`. Used for the interrupt vector table.
    fn read_word(&self, addr: u16) -> Result<u16, MemoryError> {
        let low = self.read(addr)?;
        let high = self.read(addr.wrapping_add(1))?;
        Ok((u16::from(high) << 8) | u16::from(low))
    }

    /// Restore power-on contents. The default is a no-op for buses without
    /// a notion of initial state.
    fn reset(&mut self) {}
}
