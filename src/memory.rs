//! A machine's working store.
//!
//! Memory starts as a copy of the program and grows on demand: a read or
//! write past the current end first extends the store with zeroes up to the
//! touched address. Only negative addresses are errors.

use {Fault, Word};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    pub fn new(cells: Vec<Word>) -> Memory {
        Memory { cells }
    }

    /// Read the cell at `addr`, growing the store to cover it if necessary.
    /// A freshly grown cell reads as 0.
    pub fn read(&mut self, addr: Word) -> Result<Word, Fault> {
        let index = index(addr)?;
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
        Ok(self.cells[index])
    }

    /// Write `value` at `addr`, growing the store to cover it if necessary.
    pub fn write(&mut self, addr: Word, value: Word) -> Result<(), Fault> {
        let index = index(addr)?;
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
        self.cells[index] = value;
        Ok(())
    }

    /// Inspect the cell at `addr` without growing the store. Drivers use this
    /// to pull results out of a finished machine.
    pub fn get(&self, addr: Word) -> Result<Word, Fault> {
        let index = index(addr)?;
        Ok(self.cells.get(index).cloned().unwrap_or(0))
    }

    /// Every cell the store currently covers, in address order.
    pub fn cells(&self) -> &[Word] {
        &self.cells
    }
}

fn index(addr: Word) -> Result<usize, Fault> {
    if addr < 0 {
        Err(Fault::NegativeAddress(addr))
    } else {
        Ok(addr as usize)
    }
}
