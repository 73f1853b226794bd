//! # Conditional Branches
//!
//! Every branch is the same operation parameterized by a flag and the
//! value it must have for the branch to be taken. The displacement byte is
//! always consumed; a taken branch costs one extra cycle, or two when the
//! jump lands past a page boundary (as detected by the same
//! divide-by-0xFF test the indexed addressing modes use).

use crate::cpu::{crosses_boundary, from_twos_complement, CPU};
use crate::memory::MemoryBus;
use crate::registers::Flag;
use crate::ExecutionError;

/// Branch if `flag` equals `expected`.
pub(crate) fn branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Flag,
    expected: bool,
) -> Result<(), ExecutionError> {
    let displacement = cpu.next_byte()?;

    if cpu.registers.get_flag(flag) == expected {
        let origin = i32::from(cpu.registers.pc);
        let target = origin + from_twos_complement(displacement);

        if crosses_boundary(origin, target) {
            cpu.cycle_count += 2;
        } else {
            cpu.cycle_count += 1;
        }

        cpu.registers.pc = target as u16;
    }

    Ok(())
}
