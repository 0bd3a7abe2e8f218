use miette::*;

/// Row-major warehouse floor: `true` marks a roll of paper, `false` an
/// empty spot.
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in input.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            if width == 0 {
                width = line.len();
            } else if line.len() != width {
                return Err(miette!(
                    "row {y} is {} cells wide, expected {width}",
                    line.len()
                ));
            }

            for (x, c) in line.chars().enumerate() {
                match c {
                    '@' => cells.push(true),
                    '.' => cells.push(false),
                    other => return Err(miette!("unexpected cell {other:?} at ({x}, {y})")),
                }
            }
            height += 1;
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Returns whether (x, y) holds a roll; out-of-bounds reads as empty.
    pub fn marked(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x]
    }

    /// Counts rolls among the 8 surrounding cells.
    pub fn marked_neighbors(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && self.marked(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn unmark(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_neighbors_at_the_edge() -> Result<()> {
        let grid = Grid::parse("@@.\n.@@\n@..")?;
        assert_eq!(2, grid.marked_neighbors(0, 0));
        assert_eq!(4, grid.marked_neighbors(1, 1));
        assert_eq!(2, grid.marked_neighbors(2, 2));
        Ok(())
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Grid::parse("@@.\n.@").is_err());
    }

    #[test]
    fn rejects_unknown_cells() {
        assert!(Grid::parse("@#.").is_err());
    }
}
