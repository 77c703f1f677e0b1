//! Instruction decoding.
//!
//! An instruction cell packs the operation into its two low decimal digits
//! and one parameter mode per remaining digit, least significant first.
//! Missing mode digits mean Position; digits beyond the operation's
//! parameter count are never read, so they are never validated either.

use {Fault, Word};

/// The machine's operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Multiply,
    Input,
    Output,
    JumpIfTrue,
    JumpIfFalse,
    LessThan,
    Equals,
    AdjustRelativeBase,
    Halt,
}

impl Op {
    pub fn from_value(value: Word) -> Result<Op, Fault> {
        Ok(match value {
            1 => Op::Add,
            2 => Op::Multiply,
            3 => Op::Input,
            4 => Op::Output,
            5 => Op::JumpIfTrue,
            6 => Op::JumpIfFalse,
            7 => Op::LessThan,
            8 => Op::Equals,
            9 => Op::AdjustRelativeBase,
            99 => Op::Halt,
            other => return Err(Fault::InvalidOpcode(other)),
        })
    }

    pub fn value(self) -> Word {
        match self {
            Op::Add => 1,
            Op::Multiply => 2,
            Op::Input => 3,
            Op::Output => 4,
            Op::JumpIfTrue => 5,
            Op::JumpIfFalse => 6,
            Op::LessThan => 7,
            Op::Equals => 8,
            Op::AdjustRelativeBase => 9,
            Op::Halt => 99,
        }
    }

    /// How many parameter cells follow the instruction cell.
    pub fn parameter_count(self) -> usize {
        match self {
            Op::Add | Op::Multiply | Op::LessThan | Op::Equals => 3,
            Op::JumpIfTrue | Op::JumpIfFalse => 2,
            Op::Input | Op::Output | Op::AdjustRelativeBase => 1,
            Op::Halt => 0,
        }
    }
}

/// How a parameter cell is interpreted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// The parameter is an address.
    Position,
    /// The parameter is the value itself.
    Immediate,
    /// The parameter is an offset from the machine's relative base.
    Relative,
}

impl Mode {
    pub fn from_digit(digit: Word) -> Result<Mode, Fault> {
        match digit {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            2 => Ok(Mode::Relative),
            other => Err(Fault::InvalidParameterMode(other)),
        }
    }

    pub fn digit(self) -> Word {
        match self {
            Mode::Position => 0,
            Mode::Immediate => 1,
            Mode::Relative => 2,
        }
    }
}

/// A decoded instruction cell: the operation plus one mode per parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Instruction {
    pub op: Op,
    modes: [Mode; 3],
}

impl Instruction {
    /// The mode of parameter `index`, counting from zero.
    pub fn mode(&self, index: usize) -> Mode {
        assert!(index < self.op.parameter_count());
        self.modes[index]
    }
}

/// Decode one instruction cell. Negative cells never name an operation.
pub fn decode(cell: Word) -> Result<Instruction, Fault> {
    if cell < 0 {
        return Err(Fault::InvalidOpcode(cell));
    }
    let op = Op::from_value(cell % 100)?;
    let mut modes = [Mode::Position; 3];
    let mut digits = cell / 100;
    for slot in modes.iter_mut().take(op.parameter_count()) {
        *slot = Mode::from_digit(digits % 10)?;
        digits /= 10;
    }
    Ok(Instruction { op, modes })
}

/// The cell `decode` would turn into `op` with the given modes. Trailing
/// Position modes may be left off; the result is the canonical spelling.
pub fn encode(op: Op, modes: &[Mode]) -> Word {
    assert!(modes.len() <= op.parameter_count());
    let mut cell = op.value();
    let mut scale = 100;
    for mode in modes {
        cell += mode.digit() * scale;
        scale *= 10;
    }
    cell
}
