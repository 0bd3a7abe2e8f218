use std::collections::VecDeque;

use miette::*;

use crate::grid::Grid;

/// A roll is accessible while fewer than 4 of its 8 neighbors are rolls.
/// Removing one can make its neighbors accessible in turn, so removals
/// propagate through a work queue until nothing qualifies.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = Grid::parse(input)?;

    let mut queue = VecDeque::new();
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.marked(x as isize, y as isize) && grid.marked_neighbors(x, y) < 4 {
                queue.push_back((x, y));
            }
        }
    }

    let mut removed = 0;
    while let Some((x, y)) = queue.pop_front() {
        // A cell can be queued more than once; skip it after the first
        // removal.
        if !grid.marked(x as isize, y as isize) {
            continue;
        }

        grid.unmark(x, y);
        removed += 1;

        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let (nx, ny) = (x as isize + dx, y as isize + dy);
                if grid.marked(nx, ny) && grid.marked_neighbors(nx as usize, ny as usize) < 4 {
                    queue.push_back((nx as usize, ny as usize));
                }
            }
        }
    }

    Ok(removed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_rolls_all_disappear() -> Result<()> {
        assert_eq!("3", process("@.@\n...\n..@")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("43", process(input)?);
        Ok(())
    }
}
