//! ASCII rendering for cave maps
//!
//! Text views of a generated grid, used by the command line driver.

use crate::cave::{find_regions, largest_region, CaveGrid, Cell};
use crate::tilemap::Tilemap;

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsciiMode {
    /// `#` for WALL, `.` for FLOOR
    Plain,
    /// FLOOR cells lettered by connected region, main region as `.`
    Regions,
}

/// Get ASCII character for a cell
pub fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Wall => '#',
        Cell::Floor => '.',
    }
}

/// Character for a secondary region: a-z, then A-Z, then `?`
fn region_char(ordinal: usize) -> char {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    LETTERS.get(ordinal).map_or('?', |&b| b as char)
}

/// Render a cave to an ASCII string, one line per row
pub fn render_ascii_map(grid: &CaveGrid, mode: AsciiMode) -> String {
    let mut chars = Tilemap::new_with(grid.width, grid.height, ' ');
    for (x, y, &cell) in grid.iter() {
        chars.set(x, y, cell_char(cell));
    }

    if mode == AsciiMode::Regions {
        let regions = find_regions(grid);
        let main_idx = largest_region(&regions).map(|(idx, _)| idx);

        let mut ordinal = 0;
        for (idx, region) in regions.iter().enumerate() {
            if Some(idx) == main_idx {
                continue;
            }
            let ch = region_char(ordinal);
            ordinal += 1;
            for &(x, y) in &region.cells {
                chars.set(x, y, ch);
            }
        }
    }

    let mut result = String::with_capacity((grid.width + 1) * grid.height);
    for y in 0..grid.height {
        for x in 0..grid.width {
            result.push(*chars.get(x, y));
        }
        result.push('\n');
    }
    result
}

/// Print ASCII map to stdout
pub fn print_ascii_map(grid: &CaveGrid, mode: AsciiMode) {
    print!("{}", render_ascii_map(grid, mode));
}
