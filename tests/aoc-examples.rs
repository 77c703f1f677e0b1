//! The worked examples from the 2019 problem statements, run end to end.

extern crate advent_of_code_2019 as aoc;
#[macro_use]
extern crate lazy_static;

use aoc::machine::Machine;
use aoc::program::Program;
use aoc::Word;

/// Feed `inputs` to a fresh machine, run it to completion, and collect
/// everything it outputs.
fn run_collecting(program: &Program, inputs: &[Word]) -> Vec<Word> {
    let mut machine = Machine::new(program);
    for &value in inputs {
        machine.push_input(value);
    }
    machine.run_to_halt().unwrap();
    machine.drain_output()
}

mod day2 {
    use super::*;
    use aoc::search::{find_noun_verb, output_for};

    lazy_static! {
        static ref EXTENDED: Program = Program::parse("1,9,10,3,2,3,11,0,99,30,40,50");
    }

    #[test]
    fn extended_example() {
        let mut machine = Machine::new(&EXTENDED);
        machine.run_to_halt().unwrap();
        assert_eq!(machine.memory().get(0), Ok(3500));
        assert_eq!(&machine.memory().cells()[..4], &[3500, 9, 10, 70]);
    }

    #[test]
    fn probe_leaves_target_at_zero() {
        // Noun 9, verb 10 is the program as published.
        assert_eq!(output_for(&EXTENDED, 9, 10), Ok(3500));
        assert_eq!(output_for(&EXTENDED, 9, 9), Ok(3000));
    }

    #[test]
    fn search_finds_the_published_pair() {
        assert_eq!(
            find_noun_verb(&EXTENDED, 0..=11, 0..=11, 3500),
            Ok(Some((9, 10)))
        );
    }
}

mod day5 {
    use super::*;

    #[test]
    fn echo() {
        let program = Program::parse("3,0,4,0,99");
        for value in -5..=5 {
            assert_eq!(run_collecting(&program, &[value]), vec![value]);
        }
    }

    #[test]
    fn immediate_multiply_writes_a_halt() {
        let program = Program::parse("1002,4,3,4,33");
        let mut machine = Machine::new(&program);
        machine.run_to_halt().unwrap();
        assert_eq!(machine.memory().cells(), &[1002, 4, 3, 4, 99]);
    }

    #[test]
    fn comparisons() {
        // Position mode: is the input equal to 8? Less than 8?
        let equals = Program::parse("3,9,8,9,10,9,4,9,99,-1,8");
        assert_eq!(run_collecting(&equals, &[8]), vec![1]);
        assert_eq!(run_collecting(&equals, &[7]), vec![0]);

        let less = Program::parse("3,9,7,9,10,9,4,9,99,-1,8");
        assert_eq!(run_collecting(&less, &[7]), vec![1]);
        assert_eq!(run_collecting(&less, &[9]), vec![0]);

        // The same pair in immediate mode.
        let equals = Program::parse("3,3,1108,-1,8,3,4,3,99");
        assert_eq!(run_collecting(&equals, &[8]), vec![1]);
        assert_eq!(run_collecting(&equals, &[9]), vec![0]);

        let less = Program::parse("3,3,1107,-1,8,3,4,3,99");
        assert_eq!(run_collecting(&less, &[7]), vec![1]);
        assert_eq!(run_collecting(&less, &[8]), vec![0]);
    }

    #[test]
    fn jumps_report_nonzero_input() {
        let position = Program::parse("3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9");
        assert_eq!(run_collecting(&position, &[0]), vec![0]);
        assert_eq!(run_collecting(&position, &[13]), vec![1]);

        let immediate = Program::parse("3,3,1105,-1,9,1101,0,0,12,4,12,99,1");
        assert_eq!(run_collecting(&immediate, &[0]), vec![0]);
        assert_eq!(run_collecting(&immediate, &[13]), vec![1]);
    }

    #[test]
    fn larger_example_brackets_eight() {
        let program = Program::parse(
            "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,1106,0,36,98,0,0,\
             1002,21,125,20,4,20,1105,1,46,104,999,1105,1,46,1101,1000,1,20,4,20,\
             1105,1,46,98,99",
        );
        assert_eq!(run_collecting(&program, &[7]), vec![999]);
        assert_eq!(run_collecting(&program, &[8]), vec![1000]);
        assert_eq!(run_collecting(&program, &[9]), vec![1001]);
    }
}

mod day7 {
    use aoc::amplifier::{best_signal, run_ring};
    use aoc::program::Program;

    lazy_static! {
        static ref SERIAL_1: Program =
            Program::parse("3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0");
        static ref SERIAL_2: Program = Program::parse(
            "3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0"
        );
        static ref SERIAL_3: Program = Program::parse(
            "3,31,3,32,1002,32,10,32,1001,31,-2,31,1007,31,0,33,1002,33,7,33,1,33,31,\
             31,1,32,31,31,4,31,99,0,0,0"
        );
        static ref FEEDBACK_1: Program = Program::parse(
            "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,4,27,1001,28,-1,28,1005,\
             28,6,99,0,0,5"
        );
        static ref FEEDBACK_2: Program = Program::parse(
            "3,52,1001,52,-5,52,3,53,1,52,56,54,1007,54,5,55,1005,55,26,1001,54,-5,54,\
             1105,1,12,1,53,54,53,1008,54,0,55,1001,55,1,55,2,53,55,53,4,53,1001,56,\
             -1,56,1005,56,6,99,0,0,0,0,10"
        );
    }

    #[test]
    fn serial_chains() {
        assert_eq!(run_ring(&SERIAL_1, &[4, 3, 2, 1, 0]), Ok(43210));
        assert_eq!(run_ring(&SERIAL_2, &[0, 1, 2, 3, 4]), Ok(54321));
        assert_eq!(run_ring(&SERIAL_3, &[1, 0, 4, 3, 2]), Ok(65210));
    }

    #[test]
    fn serial_search() {
        assert_eq!(best_signal(&SERIAL_1, &[0, 1, 2, 3, 4]), Ok(43210));
        assert_eq!(best_signal(&SERIAL_2, &[0, 1, 2, 3, 4]), Ok(54321));
        assert_eq!(best_signal(&SERIAL_3, &[0, 1, 2, 3, 4]), Ok(65210));
    }

    #[test]
    fn feedback_loops() {
        assert_eq!(run_ring(&FEEDBACK_1, &[9, 8, 7, 6, 5]), Ok(139629729));
        assert_eq!(run_ring(&FEEDBACK_2, &[9, 7, 8, 5, 6]), Ok(18216));
    }

    #[test]
    fn feedback_search() {
        assert_eq!(best_signal(&FEEDBACK_1, &[5, 6, 7, 8, 9]), Ok(139629729));
        assert_eq!(best_signal(&FEEDBACK_2, &[5, 6, 7, 8, 9]), Ok(18216));
    }
}

mod day9 {
    use super::*;

    #[test]
    fn quine() {
        let program =
            Program::parse("109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99");
        assert_eq!(run_collecting(&program, &[]), program.cells());
    }

    #[test]
    fn sixteen_digit_product() {
        let program = Program::parse("1102,34915192,34915192,7,4,7,99,0");
        let output = run_collecting(&program, &[]);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].to_string().len(), 16);
    }

    #[test]
    fn large_immediate_output() {
        let program = Program::parse("104,1125899906842624,99");
        assert_eq!(run_collecting(&program, &[]), vec![1125899906842624]);
    }
}
