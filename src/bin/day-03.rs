#[macro_use]
extern crate failure;

use failure::Error;
use std::collections::HashSet;
use std::io::Read;
use std::str::FromStr;

#[derive(Clone, Copy, Debug)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn vector(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Movement {
    direction: Direction,
    amount: i64,
}

impl FromStr for Movement {
    type Err = Error;
    fn from_str(s: &str) -> Result<Movement, Error> {
        let direction = match s.chars().next() {
            Some('U') => Direction::Up,
            Some('R') => Direction::Right,
            Some('D') => Direction::Down,
            Some('L') => Direction::Left,
            _ => return Err(format_err!("bad movement: {:?}", s)),
        };
        let amount = i64::from_str(s[1..].trim())?;
        Ok(Movement { direction, amount })
    }
}

fn parse_wire(line: &str) -> Result<Vec<Movement>, Error> {
    line.trim().split(',').map(Movement::from_str).collect()
}

/// Every cell the wire passes through. The central port is not part of the
/// trail unless the wire loops back over it.
fn trail(movements: &[Movement]) -> HashSet<(i64, i64)> {
    let mut visited = HashSet::new();
    let (mut x, mut y) = (0, 0);
    for movement in movements {
        let (dx, dy) = movement.direction.vector();
        for _ in 0..movement.amount {
            x += dx;
            y += dy;
            visited.insert((x, y));
        }
    }
    visited
}

/// The cells where the two wires touch, central port excluded.
fn crossings(first: &[Movement], second: &[Movement]) -> Vec<(i64, i64)> {
    let first = trail(first);
    let second = trail(second);
    first
        .intersection(&second)
        .cloned()
        .filter(|&cell| cell != (0, 0))
        .collect()
}

fn closest_distance(crossings: &[(i64, i64)]) -> Option<i64> {
    crossings.iter().map(|&(x, y)| x.abs() + y.abs()).min()
}

#[test]
fn test_closest_crossing() {
    fn check(a: &str, b: &str, expected: i64) {
        let first = parse_wire(a).unwrap();
        let second = parse_wire(b).unwrap();
        assert_eq!(closest_distance(&crossings(&first, &second)), Some(expected));
    }
    check("R8,U5,L5,D3", "U7,R6,D4,L4", 6);
    check(
        "R75,D30,R83,U83,L12,D49,R71,U7,L72",
        "U62,R66,U55,R34,D71,R55,D58,R83",
        159,
    );
    check(
        "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
        "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
        135,
    );
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let mut wires = Vec::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        wires.push(parse_wire(line)?);
    }
    if wires.len() != 2 {
        return Err(format_err!("expected two wires, got {}", wires.len()));
    }

    let crossings = crossings(&wires[0], &wires[1]);
    eprintln!("found {} crossings", crossings.len());

    let closest = closest_distance(&crossings).expect("the wires never cross");
    println!("closest crossing distance: {}", closest);

    Ok(())
}
