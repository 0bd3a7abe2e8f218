use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

/// An ID is invalid when its decimal digits are one block repeated two or
/// more times: 123123 (123 x 2), 1212121212 (12 x 5), 999 (9 x 3).
fn is_repeated_id(n: u64) -> bool {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let len = bytes.len();

    // Only block lengths that divide the digit count can tile it exactly.
    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| bytes.chunks(block).all(|chunk| chunk == &bytes[..block]))
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

    // Ranges are disjoint after merging, so the per-range scans can run in
    // parallel without double counting.
    let sum: u64 = merge(ranges)
        .into_par_iter()
        .map(|(start, end)| (start..=end).filter(|&id| is_repeated_id(id)).sum::<u64>())
        .sum();

    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(11)]
    #[case(123123)]
    #[case(12341234)]
    #[case(123123123)]
    #[case(1212121212)]
    #[case(1111111)]
    #[case(999)]
    #[case(1010)]
    fn repeated_ids_are_invalid(#[case] id: u64) {
        assert!(is_repeated_id(id));
    }

    #[rstest]
    #[case(7)]
    #[case(101)]
    #[case(12345)]
    #[case(12123)]
    fn irregular_ids_are_valid(#[case] id: u64) {
        assert!(!is_repeated_id(id));
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";
        assert_eq!("4174379265", process(input)?);
        Ok(())
    }
}
