extern crate failure;
extern crate itertools;

use failure::Error;
use itertools::Itertools;
use std::io::Read;

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

fn parse_asteroids(input: &str) -> Vec<(i64, i64)> {
    let mut asteroids = Vec::new();
    for (y, line) in input.lines().enumerate() {
        for (x, cell) in line.trim().chars().enumerate() {
            if cell == '#' {
                asteroids.push((x as i64, y as i64));
            }
        }
    }
    asteroids
}

/// Asteroids visible from `origin`: one per distinct direction, since the
/// nearest asteroid along a direction hides everything behind it.
fn visible_from(origin: (i64, i64), asteroids: &[(i64, i64)]) -> usize {
    asteroids
        .iter()
        .filter(|&&asteroid| asteroid != origin)
        .map(|&(x, y)| {
            let (dx, dy) = (x - origin.0, y - origin.1);
            let g = gcd(dx, dy);
            (dx / g, dy / g)
        })
        .unique()
        .count()
}

fn best_station(asteroids: &[(i64, i64)]) -> usize {
    asteroids
        .iter()
        .map(|&origin| visible_from(origin, asteroids))
        .max()
        .expect("no asteroids on the map")
}

#[test]
fn test_best_station() {
    let small = ".#..#\n.....\n#####\n....#\n...##";
    assert_eq!(best_station(&parse_asteroids(small)), 8);

    let medium = "......#.#.\n#..#.#....\n..#######.\n.#.#.###..\n.#..#.....\n\
                  ..#....#.#\n#..#....#.\n.##.#..###\n##...#..#.\n.#....####";
    assert_eq!(best_station(&parse_asteroids(medium)), 33);
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }

    let asteroids = parse_asteroids(&input);
    println!("most visible asteroids: {}", best_station(&asteroids));

    Ok(())
}
