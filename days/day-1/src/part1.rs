use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// One line of input: a direction and a click count, e.g. `L68` or `R48`.
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

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // The dial has positions 0..=99 and starts at 50.
    let mut position: i64 = 50;
    let mut rests_on_zero = 0;

    for rotation in rotations {
        let delta = match rotation.direction {
            Direction::Left => -rotation.clicks,
            Direction::Right => rotation.clicks,
        };
        position = (position + delta).rem_euclid(100);

        if position == 0 {
            rests_on_zero += 1;
        }
    }

    Ok(rests_on_zero.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("L50\nR50")]
    #[case("R50\nL50")]
    fn wrapping_back_to_zero_counts_once(#[case] input: &str) -> Result<()> {
        assert_eq!("1", process(input)?);
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
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
