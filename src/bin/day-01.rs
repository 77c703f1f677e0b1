extern crate failure;

use failure::Error;
use std::io::Read;
use std::str::FromStr;

/// Fuel to lift `mass`, ignoring the fuel's own weight.
fn fuel(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel to lift `mass` plus the fuel itself, iterated until the remainder
/// lifts for free.
fn fuel_for_fuel(mass: i64) -> i64 {
    let mut total = 0;
    let mut load = fuel(mass);
    while load > 0 {
        total += load;
        load = fuel(load);
    }
    total
}

#[test]
fn test_fuel() {
    assert_eq!(fuel(12), 2);
    assert_eq!(fuel(14), 2);
    assert_eq!(fuel(1969), 654);
    assert_eq!(fuel(100756), 33583);
}

#[test]
fn test_fuel_for_fuel() {
    assert_eq!(fuel_for_fuel(14), 2);
    assert_eq!(fuel_for_fuel(1969), 966);
    assert_eq!(fuel_for_fuel(100756), 50346);
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let mut naive = 0;
    let mut proper = 0;
    for line in input.lines() {
        let mass = i64::from_str(line.trim())?;
        naive += fuel(mass);
        proper += fuel_for_fuel(mass);
    }

    println!("naive total fuel: {}", naive);
    println!("proper total fuel: {}", proper);

    Ok(())
}
