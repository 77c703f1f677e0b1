//! The Intcode machine.
//!
//! A `Machine` owns its memory, instruction pointer, relative base, and two
//! FIFO queues, one for input and one for output. Execution is cooperative:
//! `step` runs a single instruction, and `run` keeps stepping until the
//! machine halts, faults, or wants input that is not there yet. A machine
//! that runs dry parks on the input instruction itself, so pushing more
//! input and calling `run` again picks up exactly where it stopped.

use std::collections::VecDeque;

use memory::Memory;
use opcode::{decode, Instruction, Mode, Op};
use program::Program;
use {Fault, Word};

/// What a machine is doing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// There are more instructions to execute.
    Running,
    /// Parked on an input instruction with an empty input queue.
    AwaitingInput,
    /// Executed a halt instruction. Terminal.
    Halted,
    /// Raised a fault. Terminal.
    Faulted(Fault),
}

pub struct Machine {
    memory: Memory,
    ip: Word,
    relative_base: Word,
    state: State,
    input: VecDeque<Word>,
    output: VecDeque<Word>,
}

impl Machine {
    pub fn new(program: &Program) -> Machine {
        Machine {
            memory: Memory::new(program.cells().to_vec()),
            ip: 0,
            relative_base: 0,
            state: State::Running,
            input: VecDeque::new(),
            output: VecDeque::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Queue `value` for the machine's next unsatisfied input instruction.
    pub fn push_input(&mut self, value: Word) {
        self.input.push_back(value);
    }

    /// Take the oldest value the machine has output, if any.
    pub fn pop_output(&mut self) -> Option<Word> {
        self.output.pop_front()
    }

    /// Take everything the machine has output, oldest first.
    pub fn drain_output(&mut self) -> Vec<Word> {
        self.output.drain(..).collect()
    }

    /// Execute one instruction and report the machine's new state. Stepping a
    /// halted machine is a no-op; stepping a faulted machine returns its
    /// fault again without touching anything.
    pub fn step(&mut self) -> Result<State, Fault> {
        match self.state {
            State::Halted => return Ok(State::Halted),
            State::Faulted(fault) => return Err(fault),
            State::Running | State::AwaitingInput => {}
        }
        match self.execute() {
            Ok(state) => {
                self.state = state;
                Ok(state)
            }
            Err(fault) => {
                self.state = State::Faulted(fault);
                Err(fault)
            }
        }
    }

    /// Step until the machine halts, faults, or parks awaiting input.
    pub fn run(&mut self) -> Result<State, Fault> {
        loop {
            match self.step()? {
                State::Running => continue,
                state => return Ok(state),
            }
        }
    }

    /// Run a machine that will never be fed again. Parking on input with an
    /// empty queue is starvation here, not a pause.
    pub fn run_to_halt(&mut self) -> Result<(), Fault> {
        match self.run()? {
            State::Halted => Ok(()),
            State::AwaitingInput => {
                self.state = State::Faulted(Fault::InputStarvation);
                Err(Fault::InputStarvation)
            }
            state => unreachable!("run stopped while {:?}", state),
        }
    }

    fn execute(&mut self) -> Result<State, Fault> {
        let insn = decode(self.memory.read(self.ip)?)?;
        match insn.op {
            Op::Add => {
                let a = self.parameter(&insn, 0)?;
                let b = self.parameter(&insn, 1)?;
                let dest = self.destination(&insn, 2)?;
                self.memory.write(dest, ops::add(a, b))?;
                self.advance(&insn)
            }
            Op::Multiply => {
                let a = self.parameter(&insn, 0)?;
                let b = self.parameter(&insn, 1)?;
                let dest = self.destination(&insn, 2)?;
                self.memory.write(dest, ops::mul(a, b))?;
                self.advance(&insn)
            }
            Op::Input => match self.input.pop_front() {
                // Leave ip alone: the retry must land on this instruction.
                None => Ok(State::AwaitingInput),
                Some(value) => {
                    let dest = self.destination(&insn, 0)?;
                    self.memory.write(dest, value)?;
                    self.advance(&insn)
                }
            },
            Op::Output => {
                let value = self.parameter(&insn, 0)?;
                self.output.push_back(value);
                self.advance(&insn)
            }
            Op::JumpIfTrue => {
                let condition = self.parameter(&insn, 0)?;
                let target = self.parameter(&insn, 1)?;
                if condition != 0 {
                    self.jump(target)
                } else {
                    self.advance(&insn)
                }
            }
            Op::JumpIfFalse => {
                let condition = self.parameter(&insn, 0)?;
                let target = self.parameter(&insn, 1)?;
                if condition == 0 {
                    self.jump(target)
                } else {
                    self.advance(&insn)
                }
            }
            Op::LessThan => {
                let a = self.parameter(&insn, 0)?;
                let b = self.parameter(&insn, 1)?;
                let dest = self.destination(&insn, 2)?;
                self.memory.write(dest, ops::lt(a, b))?;
                self.advance(&insn)
            }
            Op::Equals => {
                let a = self.parameter(&insn, 0)?;
                let b = self.parameter(&insn, 1)?;
                let dest = self.destination(&insn, 2)?;
                self.memory.write(dest, ops::eq(a, b))?;
                self.advance(&insn)
            }
            Op::AdjustRelativeBase => {
                let delta = self.parameter(&insn, 0)?;
                self.relative_base = ops::add(self.relative_base, delta);
                self.advance(&insn)
            }
            Op::Halt => Ok(State::Halted),
        }
    }

    /// The value of parameter `index`, resolved through its mode.
    fn parameter(&mut self, insn: &Instruction, index: usize) -> Result<Word, Fault> {
        let raw = self.memory.read(self.ip + 1 + index as Word)?;
        match insn.mode(index) {
            Mode::Immediate => Ok(raw),
            Mode::Position => self.memory.read(raw),
            Mode::Relative => self.memory.read(ops::add(self.relative_base, raw)),
        }
    }

    /// The address parameter `index` writes to. An immediate parameter has no
    /// address, so it can never be a destination.
    fn destination(&mut self, insn: &Instruction, index: usize) -> Result<Word, Fault> {
        let raw = self.memory.read(self.ip + 1 + index as Word)?;
        match insn.mode(index) {
            Mode::Position => Ok(raw),
            Mode::Relative => Ok(ops::add(self.relative_base, raw)),
            Mode::Immediate => Err(Fault::InvalidWriteMode),
        }
    }

    fn advance(&mut self, insn: &Instruction) -> Result<State, Fault> {
        self.ip += 1 + insn.op.parameter_count() as Word;
        Ok(State::Running)
    }

    fn jump(&mut self, target: Word) -> Result<State, Fault> {
        if target < 0 {
            return Err(Fault::NegativeAddress(target));
        }
        self.ip = target;
        Ok(State::Running)
    }
}

mod ops {
    use Word;

    pub fn add(a: Word, b: Word) -> Word {
        a.checked_add(b).unwrap()
    }

    pub fn mul(a: Word, b: Word) -> Word {
        a.checked_mul(b).unwrap()
    }

    pub fn lt(a: Word, b: Word) -> Word {
        if a < b {
            1
        } else {
            0
        }
    }

    pub fn eq(a: Word, b: Word) -> Word {
        if a == b {
            1
        } else {
            0
        }
    }
}
