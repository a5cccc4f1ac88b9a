//! Birth/survive cellular automaton
//!
//! Turns seeded noise into organic cave shapes. Every pass reads only the
//! previous generation, so the result does not depend on scan order.

use super::grid::{count_wall_neighbors, CaveGrid, Cell};

/// Compute the next generation of the whole grid, border included.
///
/// A WALL cell stays WALL with at least `survive` wall neighbors; a FLOOR cell
/// turns to WALL with at least `birth` wall neighbors.
pub fn automaton_step(grid: &CaveGrid, birth: usize, survive: usize) -> CaveGrid {
    let mut next = grid.clone();

    for y in 0..grid.height {
        for x in 0..grid.width {
            let n = count_wall_neighbors(grid, x, y);
            let threshold = match grid.get(x, y) {
                Cell::Wall => survive,
                Cell::Floor => birth,
            };
            next.set(x, y, if n >= threshold { Cell::Wall } else { Cell::Floor });
        }
    }

    next
}

/// Run `steps` automaton passes and return the final generation.
pub fn run_automaton(mut grid: CaveGrid, birth: usize, survive: usize, steps: usize) -> CaveGrid {
    for _ in 0..steps {
        grid = automaton_step(&grid, birth, survive);
    }
    grid
}
