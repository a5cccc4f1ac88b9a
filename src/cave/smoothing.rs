//! Light cleanup pass run after corridors are carved

use super::grid::{count_wall_neighbors, CaveGrid, Cell};

/// More than this many wall neighbors forces WALL
const FILL_ABOVE: usize = 5;
/// Fewer than this many wall neighbors forces FLOOR
const CLEAR_BELOW: usize = 3;

/// One micro-smoothing pass over interior cells.
///
/// Counts come from the grid as it was before the pass. Cells with 3 to 5
/// wall neighbors keep their state; border cells are never touched.
pub fn micro_smooth(grid: &CaveGrid) -> CaveGrid {
    let mut next = grid.clone();

    for y in 1..grid.height.saturating_sub(1) {
        for x in 1..grid.width.saturating_sub(1) {
            let n = count_wall_neighbors(grid, x, y);
            if n > FILL_ABOVE {
                next.set(x, y, Cell::Wall);
            } else if n < CLEAR_BELOW {
                next.set(x, y, Cell::Floor);
            }
        }
    }

    next
}

/// Run `passes` micro-smoothing passes.
pub fn run_micro_smoothing(mut grid: CaveGrid, passes: usize) -> CaveGrid {
    for _ in 0..passes {
        grid = micro_smooth(&grid);
    }
    grid
}
