//! Initial random fill

use rand::Rng;

use super::grid::{CaveGrid, Cell};

/// Build a fresh grid of random noise.
///
/// Border cells are always WALL. Each interior cell draws one uniform sample
/// in [0, 1), row by row, and becomes WALL when it falls below `fill_prob`.
pub fn seed_noise<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    fill_prob: f64,
    rng: &mut R,
) -> CaveGrid {
    let mut grid = CaveGrid::new_with(width, height, Cell::Wall);

    for y in 0..height {
        for x in 0..width {
            if grid.is_border(x, y) {
                continue;
            }
            if rng.gen::<f64>() >= fill_prob {
                grid.set(x, y, Cell::Floor);
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::grid::{border_is_sealed, floor_count};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_border_is_wall_after_seeding() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // Even with no interior walls at all
        let grid = seed_noise(30, 12, 0.0, &mut rng);

        assert!(border_is_sealed(&grid));
        assert_eq!(floor_count(&grid), 28 * 10);
    }

    #[test]
    fn test_full_fill_is_solid() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = seed_noise(20, 20, 1.0, &mut rng);
        assert_eq!(floor_count(&grid), 0);
    }

    #[test]
    fn test_fill_ratio_tracks_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let grid = seed_noise(202, 202, 0.45, &mut rng);

        let interior = 200.0 * 200.0;
        let wall_ratio = 1.0 - floor_count(&grid) as f64 / interior;
        assert!((wall_ratio - 0.45).abs() < 0.03, "wall ratio {}", wall_ratio);
    }

    #[test]
    fn test_thin_grids_are_all_border() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = seed_noise(1, 5, 0.0, &mut rng);
        assert_eq!(floor_count(&grid), 0);

        let grid = seed_noise(6, 2, 0.0, &mut rng);
        assert_eq!(floor_count(&grid), 0);
    }
}
