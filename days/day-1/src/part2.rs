use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Rotation {
    direction: Direction,
    clicks: i64,
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let direction = choice((
        just('L').to(Direction::Left),
        just('R').to(Direction::Right),
    ));

    let rotation = direction
        .then(text::int(10).from_str::<i64>().unwrapped())
        .map(|(direction, clicks)| Rotation { direction, clicks });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Counts how many times a move from `from` to `from + delta` on the
/// unwrapped number line passes over or lands on a multiple of 100.
///
/// Moving right covers the integers in `(from, from + delta]`; moving left
/// covers `[from + delta, from)`. The multiples of 100 inside an inclusive
/// interval `[a, b]` number `b.div_euclid(100) - (a - 1).div_euclid(100)`.
fn zero_passes(from: i64, delta: i64) -> i64 {
    let to = from + delta;
    match delta {
        0 => 0,
        d if d > 0 => to.div_euclid(100) - from.div_euclid(100),
        _ => (from - 1).div_euclid(100) - (to - 1).div_euclid(100),
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut position: i64 = 50;
    let mut crossings: i64 = 0;

    for rotation in rotations {
        let delta = match rotation.direction {
            Direction::Left => -rotation.clicks,
            Direction::Right => rotation.clicks,
        };

        crossings += zero_passes(position, delta);
        position = (position + delta).rem_euclid(100);
    }

    Ok(crossings.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(50, -500, 5)]
    #[case(50, 50, 1)]
    #[case(0, -100, 1)]
    #[case(0, 99, 0)]
    #[case(50, 0, 0)]
    fn counts_every_lap(#[case] from: i64, #[case] delta: i64, #[case] expected: i64) {
        assert_eq!(expected, zero_passes(from, delta));
    }

    #[test]
    fn full_left_turn_passes_zero_each_lap() -> Result<()> {
        assert_eq!("5", process("L500")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82";
        assert_eq!("6", process(input)?);
        Ok(())
    }
}
