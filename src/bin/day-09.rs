extern crate advent_of_code_2019 as aoc;
extern crate failure;

use failure::Error;
use std::io::Read;
use std::str::FromStr;

use aoc::machine::Machine;
use aoc::program::Program;
use aoc::Word;

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }
    let program = Program::parse(&input);

    let mut machine = Machine::new(&program);
    let mut fed = false;
    for arg in std::env::args().skip(1) {
        machine.push_input(Word::from_str(&arg)?);
        fed = true;
    }
    if !fed {
        // Mode 1 runs the BOOST program's self-test.
        machine.push_input(1);
    }

    machine.run_to_halt()?;
    for value in machine.drain_output() {
        println!("output: {}", value);
    }

    Ok(())
}
