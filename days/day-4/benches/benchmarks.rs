use std::hint::black_box;

use advent_day_4::{part1, part2};

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    black_box(part1::process(black_box(include_str!("../input1.txt"))).unwrap());
}

#[divan::bench]
fn bench_part2() {
    black_box(part2::process(black_box(include_str!("../input2.txt"))).unwrap());
}
