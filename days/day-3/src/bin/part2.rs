use miette::*;

use advent_day_3::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let answer = part2::process(input)?;
    println!("{answer}");
    Ok(())
}
