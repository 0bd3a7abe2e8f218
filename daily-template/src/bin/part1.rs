use miette::*;

use {{crate_name | snake_case}}::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let answer = part1::process(input)?;
    println!("{answer}");
    Ok(())
}
