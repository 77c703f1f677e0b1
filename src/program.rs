//! Intcode source text.

use Word;

/// A parsed program: the cell image every fresh machine copies its memory
/// from. The program itself never changes; machines mutate their own copies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    cells: Vec<Word>,
}

impl Program {
    /// Parse comma-separated cells. Tokens that do not parse as numbers are
    /// skipped rather than reported, so trailing newlines and stray junk
    /// cannot shift the cells that do parse; a well-formed program survives
    /// intact.
    pub fn parse(text: &str) -> Program {
        let cells = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(|token| token.parse().ok())
            .collect();
        Program { cells }
    }

    pub fn cells(&self) -> &[Word] {
        &self.cells
    }
}

impl From<Vec<Word>> for Program {
    fn from(cells: Vec<Word>) -> Program {
        Program { cells }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Program::parse("1,9,10,3,99").cells(), &[1, 9, 10, 3, 99]);
        assert_eq!(Program::parse("1,-4,\n2,0\n").cells(), &[1, -4, 2, 0]);
        assert_eq!(Program::parse("104,1125899906842624,99").cells(),
                   &[104, 1125899906842624, 99]);
    }

    #[test]
    fn test_parse_skips_junk() {
        assert_eq!(Program::parse("1, x, 3,,99").cells(), &[1, 3, 99]);
        assert_eq!(Program::parse("12abc,7").cells(), &[7]);
        assert!(Program::parse("").cells().is_empty());
        assert!(Program::parse("nope").cells().is_empty());
    }
}
