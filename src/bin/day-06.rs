#[macro_use]
extern crate failure;

use failure::Error;
use std::collections::HashMap;
use std::io::Read;

/// Parse `A)B` lines ("B orbits A") into orbiter-to-center links.
fn parse_orbits(input: &str) -> Result<HashMap<&str, &str>, Error> {
    let mut orbits = HashMap::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ')');
        match (parts.next(), parts.next()) {
            (Some(center), Some(orbiter)) => {
                orbits.insert(orbiter, center);
            }
            _ => return Err(format_err!("bad orbit: {:?}", line)),
        }
    }
    Ok(orbits)
}

/// How many objects `object` orbits, directly or through its center.
fn chain_length(orbits: &HashMap<&str, &str>, object: &str) -> usize {
    let mut length = 0;
    let mut current = object;
    while let Some(&center) = orbits.get(current) {
        length += 1;
        current = center;
    }
    length
}

fn total_orbits(orbits: &HashMap<&str, &str>) -> usize {
    orbits
        .keys()
        .map(|object| chain_length(orbits, object))
        .sum()
}

#[test]
fn test_total_orbits() {
    let input = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\n";
    let orbits = parse_orbits(input).unwrap();
    assert_eq!(total_orbits(&orbits), 42);
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let orbits = parse_orbits(&input)?;
    println!("total orbits: {}", total_orbits(&orbits));

    Ok(())
}
