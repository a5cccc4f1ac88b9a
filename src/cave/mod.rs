//! Cave generation pipeline
//!
//! Builds a 2D cave map in five stages:
//! - **Noise seeding**: random WALL/FLOOR interior inside a solid border
//! - **Cellular automaton**: birth/survive passes turn noise into caverns
//! - **Region finding**: 8-connected FLOOR components
//! - **Corridor carving**: L-shaped links from side regions to the main one
//! - **Micro-smoothing**: cleanup of single-cell artifacts left by carving

pub mod automaton;
pub mod corridors;
pub mod error;
pub mod grid;
pub mod params;
pub mod regions;
pub mod seeding;
pub mod smoothing;

pub use corridors::ConnectionStats;
pub use error::CaveError;
pub use grid::{count_wall_neighbors, CaveGrid, Cell};
pub use params::{CaveParams, CavePreset};
pub use regions::{find_regions, largest_region, Region};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// What happened during one generation run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationStats {
    /// FLOOR regions found after the automaton
    pub regions_found: usize,
    /// Cells in the largest region (0 if there was none)
    pub main_region_size: usize,
    pub connections: ConnectionStats,
    /// Border cells forced back to WALL (only with `seal_border`)
    pub border_cells_sealed: usize,
    /// FLOOR cells in the final grid
    pub floor_cells: usize,
}

impl GenerationStats {
    /// Fraction of the final grid that is FLOOR
    pub fn floor_ratio(&self, params: &CaveParams) -> f64 {
        self.floor_cells as f64 / (params.width * params.height) as f64
    }
}

/// Generate a cave with the given parameters and random source.
pub fn generate_cave<R: Rng + ?Sized>(
    params: &CaveParams,
    rng: &mut R,
) -> Result<CaveGrid, CaveError> {
    generate_cave_with_stats(params, rng).map(|(grid, _)| grid)
}

/// Generate a cave from a seed. The same seed and parameters always give the
/// same grid.
pub fn generate_cave_from_seed(params: &CaveParams, seed: u64) -> Result<CaveGrid, CaveError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_cave(params, &mut rng)
}

/// Generate a cave and report what each stage did.
pub fn generate_cave_with_stats<R: Rng + ?Sized>(
    params: &CaveParams,
    rng: &mut R,
) -> Result<(CaveGrid, GenerationStats), CaveError> {
    params.validate()?;
    let mut stats = GenerationStats::default();

    let grid = seeding::seed_noise(params.width, params.height, params.fill_prob, rng);
    let mut grid = automaton::run_automaton(grid, params.birth, params.survive, params.ca_steps);

    let regions = find_regions(&grid);
    stats.regions_found = regions.len();
    stats.main_region_size = largest_region(&regions).map_or(0, |(_, main)| main.len());
    stats.connections = corridors::connect_regions(&mut grid, &regions, params.min_region, rng);

    if params.seal_border {
        stats.border_cells_sealed += grid::seal_border(&mut grid);
    }

    let mut grid = smoothing::run_micro_smoothing(grid, params.smoothing_passes);

    if params.seal_border {
        stats.border_cells_sealed += grid::seal_border(&mut grid);
    }

    stats.floor_cells = grid::floor_count(&grid);
    Ok((grid, stats))
}

/// Generate one independent cave per seed, in parallel.
///
/// Results are in seed order and match `generate_cave_from_seed` for each
/// seed.
pub fn generate_caves(
    params: &CaveParams,
    seeds: &[u64],
) -> Result<Vec<(CaveGrid, GenerationStats)>, CaveError> {
    params.validate()?;

    seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_cave_with_stats(params, &mut rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::grid::{border_is_sealed, floor_count};

    #[test]
    fn test_same_seed_same_cave() {
        let params = CaveParams::default();
        let a = generate_cave_from_seed(&params, 1234).unwrap();
        let b = generate_cave_from_seed(&params, 1234).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.width, a.height), (100, 40));

        let c = generate_cave_from_seed(&params, 1235).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let params = CaveParams { fill_prob: 1.5, ..Default::default() };
        let err = generate_cave_from_seed(&params, 0).unwrap_err();
        assert!(matches!(err, CaveError::InvalidParameter { name: "fill_prob", .. }));

        let params = CaveParams::default().with_size(0, 0);
        assert!(generate_caves(&params, &[1, 2]).is_err());
    }

    #[test]
    fn test_solid_fill_gives_solid_cave() {
        let params = CaveParams { fill_prob: 1.0, ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let (grid, stats) = generate_cave_with_stats(&params, &mut rng).unwrap();

        assert_eq!(floor_count(&grid), 0);
        assert_eq!(stats.regions_found, 0);
        assert_eq!(stats.main_region_size, 0);
        assert_eq!(stats.connections, ConnectionStats::default());
    }

    #[test]
    fn test_empty_fill_without_passes_is_open_room() {
        let params = CaveParams {
            width: 12,
            height: 9,
            fill_prob: 0.0,
            ca_steps: 0,
            smoothing_passes: 0,
            ..Default::default()
        };
        let grid = generate_cave_from_seed(&params, 0).unwrap();

        assert!(border_is_sealed(&grid));
        assert_eq!(floor_count(&grid), 10 * 7);
        assert_eq!(find_regions(&grid).len(), 1);
    }

    #[test]
    fn test_connected_regions_merge() {
        let params = CaveParams { min_region: 0, smoothing_passes: 0, ..Default::default() };
        for seed in 0..4 {
            let grid = generate_cave_from_seed(&params, seed).unwrap();
            assert!(find_regions(&grid).len() <= 1, "seed {} left pockets", seed);
        }
    }

    #[test]
    fn test_seal_border_restores_walls() {
        let params = CaveParams { seal_border: true, ..CaveParams::from_preset(CavePreset::Open) };
        for seed in 0..4 {
            let grid = generate_cave_from_seed(&params, seed).unwrap();
            assert!(border_is_sealed(&grid));
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let params = CaveParams::default().with_size(48, 24);
        let seeds = [3, 1, 4, 1, 5];
        let batch = generate_caves(&params, &seeds).unwrap();

        assert_eq!(batch.len(), seeds.len());
        for (&seed, (grid, stats)) in seeds.iter().zip(&batch) {
            assert_eq!(grid, &generate_cave_from_seed(&params, seed).unwrap());
            assert_eq!(stats.floor_cells, floor_count(grid));
        }
    }

    #[test]
    fn test_stats_are_consistent() {
        let params = CaveParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let (grid, stats) = generate_cave_with_stats(&params, &mut rng).unwrap();

        assert_eq!(stats.floor_cells, floor_count(&grid));
        assert!(stats.regions_found >= 1);
        assert_eq!(
            stats.connections.corridors + stats.connections.abandoned,
            stats.regions_found - 1
        );
        assert!(stats.floor_ratio(&params) > 0.0 && stats.floor_ratio(&params) < 1.0);
        assert_eq!(stats.border_cells_sealed, 0);
    }
}
