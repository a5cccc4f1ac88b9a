//! Corridor carving between disconnected regions

use rand::Rng;

use super::grid::{CaveGrid, Cell};
use super::regions::{largest_region, Region};

/// Find the closest pair of cells `(p in a, q in b)` by Manhattan distance.
///
/// Exhaustive O(|a| * |b|) scan: only a strictly shorter distance replaces the
/// current best, so the first minimal pair in scan order wins. Fine for cave
/// sized maps, quadratic on very large regions. Returns `None` if either
/// region is empty.
pub fn nearest_pair(a: &Region, b: &Region) -> Option<((usize, usize), (usize, usize))> {
    let mut best = None;
    let mut best_dist = usize::MAX;

    for &p in &a.cells {
        for &q in &b.cells {
            let dist = p.0.abs_diff(q.0) + p.1.abs_diff(q.1);
            if dist < best_dist {
                best_dist = dist;
                best = Some((p, q));
            }
        }
    }

    best
}

/// Carve an L-shaped corridor of FLOOR from `from` to `to`.
///
/// With even odds the corridor runs along the row of `from` and then the
/// column of `to`, otherwise along the column of `from` and then the row of
/// `to`. Returns the number of cells that changed from WALL to FLOOR.
pub fn carve_corridor<R: Rng + ?Sized>(
    grid: &mut CaveGrid,
    from: (usize, usize),
    to: (usize, usize),
    rng: &mut R,
) -> usize {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let (min_x, max_x) = (x1.min(x2), x1.max(x2));
    let (min_y, max_y) = (y1.min(y2), y1.max(y2));

    let mut opened = 0;
    let mut open = |grid: &mut CaveGrid, x: usize, y: usize| {
        let cell = grid.get_mut(x, y);
        if cell.is_wall() {
            *cell = Cell::Floor;
            opened += 1;
        }
    };

    if rng.gen::<f64>() < 0.5 {
        for x in min_x..=max_x {
            open(grid, x, y1);
        }
        for y in min_y..=max_y {
            open(grid, x2, y);
        }
    } else {
        for y in min_y..=max_y {
            open(grid, x1, y);
        }
        for x in min_x..=max_x {
            open(grid, x, y2);
        }
    }

    opened
}

/// Summary of one connection pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Regions linked to the main region
    pub corridors: usize,
    /// Regions left disconnected because they were below the size threshold
    pub abandoned: usize,
    /// Cells turned from WALL to FLOOR by corridors
    pub cells_carved: usize,
}

/// Link every region of at least `min_region` cells to the largest region.
///
/// Corridors always target the main region's original cell set; regions are
/// not recomputed between carvings. Smaller regions are left as isolated
/// pockets.
pub fn connect_regions<R: Rng + ?Sized>(
    grid: &mut CaveGrid,
    regions: &[Region],
    min_region: usize,
    rng: &mut R,
) -> ConnectionStats {
    let mut stats = ConnectionStats::default();

    let Some((main_idx, main)) = largest_region(regions) else {
        return stats;
    };

    for (idx, region) in regions.iter().enumerate() {
        if idx == main_idx {
            continue;
        }
        if region.len() < min_region {
            stats.abandoned += 1;
            continue;
        }

        if let Some((p, q)) = nearest_pair(main, region) {
            stats.cells_carved += carve_corridor(grid, p, q, rng);
            stats.corridors += 1;
        }
    }

    stats
}
