use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// An ID is invalid when its decimal digits are one block repeated exactly
/// twice, e.g. 11 or 123123. An odd digit count can never split evenly.
fn is_doubled_id(n: u64) -> bool {
    if n < 10 {
        return false;
    }

    let digits = n.ilog10() + 1;
    if digits % 2 != 0 {
        return false;
    }

    // Compare the two halves numerically instead of via strings:
    // n = left * 10^(digits/2) + right.
    let split = 10_u64.pow(digits / 2);
    n / split == n % split
}

/// Sorts and coalesces overlapping ranges so every ID is visited once even
/// when the input ranges overlap.
fn merge(ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges
        .into_iter()
        .sorted()
        .coalesce(|a, b| {
            if b.0 <= a.1 {
                Ok((a.0, a.1.max(b.1)))
            } else {
                Err((a, b))
            }
        })
        .collect()
}

/// Parses a list of ranges "min-max" separated by commas, tolerating line
/// breaks after the commas.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(u64, u64)>, extra::Err<Rich<'a, char>>> {
    let range = text::int(10)
        .from_str::<u64>()
        .unwrapped()
        .then_ignore(just('-'))
        .then(text::int(10).from_str::<u64>().unwrapped())
        .padded();

    range.separated_by(just(',')).allow_trailing().collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let sum: u64 = merge(ranges)
        .into_iter()
        .flat_map(|(start, end)| start..=end)
        .filter(|&id| is_doubled_id(id))
        .sum();

    Ok(sum.to_string())
}
