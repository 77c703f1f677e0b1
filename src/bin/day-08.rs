#[macro_use]
extern crate failure;
extern crate ndarray;

use failure::Error;
use ndarray::{Array3, Axis};
use std::io::Read;

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

fn parse_digits(input: &str) -> Vec<u32> {
    input
        .trim()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// On the layer with the fewest zeroes, the number of ones times the number
/// of twos.
fn checksum(digits: Vec<u32>, width: usize, height: usize) -> Result<usize, Error> {
    if digits.is_empty() || digits.len() % (width * height) != 0 {
        return Err(format_err!(
            "image is not a whole number of {}x{} layers",
            width,
            height
        ));
    }
    let layers = digits.len() / (width * height);
    let image = Array3::from_shape_vec((layers, height, width), digits)?;

    let best = image
        .axis_iter(Axis(0))
        .min_by_key(|layer| layer.iter().filter(|&&d| d == 0).count())
        .expect("image has no layers");
    let ones = best.iter().filter(|&&d| d == 1).count();
    let twos = best.iter().filter(|&&d| d == 2).count();
    Ok(ones * twos)
}

#[test]
fn test_checksum() {
    let digits = parse_digits("123456789012");
    assert_eq!(checksum(digits, 3, 2).unwrap(), 1);
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let digits = parse_digits(&input);
    println!("checksum: {}", checksum(digits, WIDTH, HEIGHT)?);

    Ok(())
}
