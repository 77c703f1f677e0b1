//! Machinery shared by the 2019 puzzle solutions: an Intcode virtual machine
//! and the drivers the later days build on top of it.

#[macro_use]
extern crate failure;
extern crate itertools;

pub mod amplifier;
pub mod machine;
pub mod memory;
pub mod opcode;
pub mod program;
pub mod search;

/// The Intcode scalar. Memory cells, addresses, and I/O values are all the
/// same type; day 9 multiplies eight-digit numbers, so it must be 64 bits.
pub type Word = i64;

/// A runtime fault. Faults are fatal: the machine that raises one records it
/// and refuses to run any further.
#[derive(Clone, Copy, Debug, Eq, Fail, PartialEq)]
pub enum Fault {
    #[fail(display = "unrecognized opcode {}", _0)]
    InvalidOpcode(Word),
    #[fail(display = "unrecognized parameter mode {}", _0)]
    InvalidParameterMode(Word),
    #[fail(display = "immediate parameter used as a write destination")]
    InvalidWriteMode,
    #[fail(display = "negative address {}", _0)]
    NegativeAddress(Word),
    #[fail(display = "input requested with nothing queued")]
    InputStarvation,
}
