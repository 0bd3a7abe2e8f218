use chumsky::prelude::*;
use miette::*;

use crate::selector;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut total: u64 = 0;
    for bank in banks {
        total += selector::largest_display(&selector::bank_from_line(bank), 2)?;
    }

    Ok(total.to_string())
}
