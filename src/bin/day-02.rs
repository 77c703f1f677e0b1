extern crate advent_of_code_2019 as aoc;
extern crate failure;

use failure::Error;
use std::io::Read;

use aoc::program::Program;
use aoc::search::find_noun_verb;
use aoc::Word;

const TARGET: Word = 19690720;

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }
    let program = Program::parse(&input);

    match find_noun_verb(&program, 0..=99, 0..=99, TARGET)? {
        Some((noun, verb)) => println!("100 * noun + verb: {}", 100 * noun + verb),
        None => eprintln!("unable to find the right pair"),
    }

    Ok(())
}
