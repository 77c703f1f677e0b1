extern crate itertools;

use itertools::Itertools;

const LOW: u32 = 172930;
const HIGH: u32 = 683082;

fn never_decreases(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] <= pair[1])
}

/// A run of exactly two equal digits somewhere; longer runs don't count.
fn has_exact_double(digits: &[u8]) -> bool {
    let runs = digits.iter().group_by(|&&digit| digit);
    runs.into_iter().any(|(_, run)| run.count() == 2)
}

fn is_valid(number: u32) -> bool {
    let text = number.to_string();
    let digits = text.as_bytes();
    never_decreases(digits) && has_exact_double(digits)
}

#[test]
fn test_is_valid() {
    assert!(is_valid(112233));
    assert!(is_valid(111122));
    assert!(!is_valid(123444));
    assert!(!is_valid(111111));
    assert!(!is_valid(223450));
    assert!(!is_valid(123789));
}

fn main() {
    let count = (LOW..=HIGH).filter(|&number| is_valid(number)).count();
    println!("count of matching numbers: {}", count);
}
