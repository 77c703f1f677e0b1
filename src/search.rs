//! The gravity-assist diagnostic: find the noun and verb that make a program
//! leave a target value at address 0.

use std::ops::RangeInclusive;

use itertools::Itertools;

use machine::Machine;
use program::Program;
use {Fault, Word};

/// Run `program` with addresses 1 and 2 preset to `noun` and `verb`, and
/// report what it leaves at address 0.
pub fn output_for(program: &Program, noun: Word, verb: Word) -> Result<Word, Fault> {
    let mut machine = Machine::new(program);
    machine.memory_mut().write(1, noun)?;
    machine.memory_mut().write(2, verb)?;
    machine.run_to_halt()?;
    machine.memory().get(0)
}

/// Try every noun/verb pair in row-major order (all verbs for the first
/// noun, then the next noun) and report the first pair that leaves `target`
/// at address 0. `Ok(None)` means the whole grid came up empty; a machine
/// fault abandons the search instead, since every later probe would run the
/// same broken program.
pub fn find_noun_verb(
    program: &Program,
    nouns: RangeInclusive<Word>,
    verbs: RangeInclusive<Word>,
    target: Word,
) -> Result<Option<(Word, Word)>, Fault> {
    for (noun, verb) in nouns.cartesian_product(verbs) {
        if output_for(program, noun, verb)? == target {
            return Ok(Some((noun, verb)));
        }
    }
    Ok(None)
}
