//! Connected FLOOR region detection
//!
//! Breadth-first flood fill over 8-connected FLOOR cells.

use std::collections::VecDeque;

use crate::tilemap::Tilemap;

use super::grid::CaveGrid;

/// One maximal 8-connected group of FLOOR cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Cell coordinates as `(x, y)`, sorted row by row
    pub cells: Vec<(usize, usize)>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find every 8-connected FLOOR region.
///
/// Regions come out in raster order of their first cell, and the cells in
/// each region are listed row by row. A grid without FLOOR yields no regions.
pub fn find_regions(grid: &CaveGrid) -> Vec<Region> {
    let mut visited = Tilemap::new_with(grid.width, grid.height, false);
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..grid.height {
        for x in 0..grid.width {
            if *visited.get(x, y) || grid.get(x, y).is_wall() {
                continue;
            }

            let mut cells = Vec::new();
            visited.set(x, y, true);
            queue.push_back((x, y));

            while let Some((cx, cy)) = queue.pop_front() {
                cells.push((cx, cy));

                for (nx, ny) in grid.neighbors_8(cx, cy) {
                    if !*visited.get(nx, ny) && grid.get(nx, ny).is_floor() {
                        visited.set(nx, ny, true);
                        queue.push_back((nx, ny));
                    }
                }
            }

            cells.sort_unstable_by_key(|&(cx, cy)| (cy, cx));
            regions.push(Region { cells });
        }
    }

    regions
}

/// Pick the region with the most cells; the earliest one wins ties.
///
/// Returns the index alongside the region, or `None` when there are no
/// regions at all.
pub fn largest_region(regions: &[Region]) -> Option<(usize, &Region)> {
    let mut best: Option<(usize, &Region)> = None;

    for (idx, region) in regions.iter().enumerate() {
        match best {
            Some((_, current)) if region.len() <= current.len() => {}
            _ => best = Some((idx, region)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::grid::Cell;

    fn carve_block(grid: &mut CaveGrid, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                grid.set(x, y, Cell::Floor);
            }
        }
    }

    #[test]
    fn test_two_separated_blocks() {
        let mut grid = CaveGrid::new_with(11, 5, Cell::Wall);
        carve_block(&mut grid, 1, 1, 3, 3);
        carve_block(&mut grid, 6, 1, 3, 3);

        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].len(), 9);
        assert_eq!(regions[1].len(), 9);

        assert!(regions[0].cells.contains(&(2, 2)));
        assert!(!regions[0].cells.contains(&(7, 2)));
        assert_eq!(regions[1].cells.first(), Some(&(6, 1)));
        assert_eq!(regions[1].cells.last(), Some(&(8, 3)));
    }

    #[test]
    fn test_diagonal_contact_joins_regions() {
        let mut grid = CaveGrid::new_with(5, 5, Cell::Wall);
        grid.set(1, 1, Cell::Floor);
        grid.set(2, 2, Cell::Floor);
        grid.set(3, 3, Cell::Floor);

        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].cells, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut grid = CaveGrid::new_with(6, 6, Cell::Wall);
        // A U shape so BFS order differs from raster order
        carve_block(&mut grid, 1, 1, 1, 4);
        carve_block(&mut grid, 4, 1, 1, 4);
        carve_block(&mut grid, 1, 4, 4, 1);

        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 1);
        let cells = &regions[0].cells;
        assert_eq!(cells[0], (1, 1));
        assert_eq!(cells[1], (4, 1));
        assert!(cells.windows(2).all(|w| (w[0].1, w[0].0) < (w[1].1, w[1].0)));
    }

    #[test]
    fn test_no_floor_means_no_regions() {
        let grid = CaveGrid::new_with(8, 8, Cell::Wall);
        let regions = find_regions(&grid);
        assert!(regions.is_empty());
        assert!(largest_region(&regions).is_none());
    }

    #[test]
    fn test_largest_region_prefers_first_on_tie() {
        let mut grid = CaveGrid::new_with(12, 5, Cell::Wall);
        carve_block(&mut grid, 1, 1, 2, 2);
        carve_block(&mut grid, 5, 1, 2, 3);
        carve_block(&mut grid, 9, 1, 2, 3);

        let regions = find_regions(&grid);
        let (idx, main) = largest_region(&regions).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(main.len(), 6);
    }
}
