use miette::*;

use crate::grid::Grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;

    let mut accessible = 0;
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.marked(x as isize, y as isize) && grid.marked_neighbors(x, y) < 4 {
                accessible += 1;
            }
        }
    }

    Ok(accessible.to_string())
}
