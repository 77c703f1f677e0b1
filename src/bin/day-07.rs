extern crate advent_of_code_2019 as aoc;
extern crate failure;

use failure::Error;
use std::io::Read;

use aoc::amplifier::best_signal;
use aoc::program::Program;

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }
    let program = Program::parse(&input);

    let highest = best_signal(&program, &[5, 6, 7, 8, 9])?;
    println!("highest signal: {}", highest);

    Ok(())
}
