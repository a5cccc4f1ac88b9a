//! Cave cells and the neighbor-counting rule shared by every pass.

use crate::tilemap::Tilemap;

/// State of a single cave cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Impassable rock
    #[default]
    Wall,
    /// Open space
    Floor,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_floor(self) -> bool {
        self == Cell::Floor
    }
}

/// A generated cave: `height` rows of `width` cells.
pub type CaveGrid = Tilemap<Cell>;

/// Count WALL cells among the 8 cells surrounding `(x, y)`.
///
/// Positions outside the grid count as WALL, as if the map were embedded in
/// infinite rock. This is what pulls cells near the edge toward WALL and keeps
/// the cave enclosed.
pub fn count_wall_neighbors(grid: &CaveGrid, x: usize, y: usize) -> usize {
    let mut count = 0;

    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            match grid.get_checked(x as i64 + dx, y as i64 + dy) {
                Some(cell) if cell.is_floor() => {}
                _ => count += 1,
            }
        }
    }

    count
}

/// Number of FLOOR cells in the grid.
pub fn floor_count(grid: &CaveGrid) -> usize {
    grid.iter().filter(|(_, _, cell)| cell.is_floor()).count()
}

/// True when every cell on the outer ring is WALL.
pub fn border_is_sealed(grid: &CaveGrid) -> bool {
    grid.iter()
        .filter(|&(x, y, _)| grid.is_border(x, y))
        .all(|(_, _, cell)| cell.is_wall())
}

/// Force the outer ring back to WALL. Returns how many cells were changed.
pub fn seal_border(grid: &mut CaveGrid) -> usize {
    let (width, height) = (grid.width, grid.height);
    let mut changed = 0;

    for (x, y, cell) in grid.iter_mut() {
        let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
        if on_border && cell.is_floor() {
            *cell = Cell::Wall;
            changed += 1;
        }
    }

    changed
}
