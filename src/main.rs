use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cave_generator::ascii::{self, AsciiMode};
use cave_generator::cave::{self, CaveParams, CavePreset, GenerationStats};
use cave_generator::export;

#[derive(Parser, Debug)]
#[command(name = "cave_generator")]
#[command(about = "Generate cave maps with a cellular automaton")]
struct Args {
    /// Starting parameter set (open, classic, dense)
    #[arg(long, default_value_t = CavePreset::Classic)]
    preset: CavePreset,

    /// JSON parameter file (replaces the preset, flags still override it)
    #[arg(long)]
    config: Option<String>,

    /// Width of the map in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Height of the map in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Probability that an interior cell starts as wall
    #[arg(long)]
    fill_prob: Option<f64>,

    /// Wall-neighbor count that turns floor into wall
    #[arg(long)]
    birth: Option<usize>,

    /// Wall-neighbor count that keeps a wall standing
    #[arg(long)]
    survive: Option<usize>,

    /// Number of cellular automaton passes
    #[arg(long)]
    ca_steps: Option<usize>,

    /// Smallest region that gets a corridor to the main cave
    #[arg(long)]
    min_region: Option<usize>,

    /// Number of micro-smoothing passes
    #[arg(long)]
    smoothing_passes: Option<usize>,

    /// Force the outer ring back to wall after carving and smoothing
    #[arg(long)]
    seal_border: bool,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate this many maps in parallel (seeds seed, seed+1, ...)
    #[arg(long, conflicts_with_all = ["png", "show_regions"])]
    batch: Option<usize>,

    /// Letter disconnected pockets instead of the plain view
    #[arg(long)]
    show_regions: bool,

    /// Skip printing the map
    #[arg(short, long)]
    quiet: bool,

    /// Export the map to PNG
    #[arg(long)]
    png: Option<String>,

    /// Pixels per cell in the PNG export
    #[arg(long, default_value = "8")]
    png_scale: u32,
}

impl Args {
    fn params(&self) -> Result<CaveParams, Box<dyn Error>> {
        let mut params = match self.config {
            Some(ref path) => CaveParams::load_from_file(path)?,
            None => CaveParams::from_preset(self.preset),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(fill_prob) = self.fill_prob {
            params.fill_prob = fill_prob;
        }
        if let Some(birth) = self.birth {
            params.birth = birth;
        }
        if let Some(survive) = self.survive {
            params.survive = survive;
        }
        if let Some(ca_steps) = self.ca_steps {
            params.ca_steps = ca_steps;
        }
        if let Some(min_region) = self.min_region {
            params.min_region = min_region;
        }
        if let Some(passes) = self.smoothing_passes {
            params.smoothing_passes = passes;
        }
        if self.seal_border {
            params.seal_border = true;
        }

        params.validate()?;
        Ok(params)
    }
}

fn print_stats(seed: u64, params: &CaveParams, stats: &GenerationStats) {
    println!(
        "seed {}: {} regions (main {} cells), {} corridors carving {} cells, \
         {} pockets abandoned, {:.1}% floor",
        seed,
        stats.regions_found,
        stats.main_region_size,
        stats.connections.corridors,
        stats.connections.cells_carved,
        stats.connections.abandoned,
        100.0 * stats.floor_ratio(params),
    );
    if stats.border_cells_sealed > 0 {
        println!("  sealed {} border cells", stats.border_cells_sealed);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let params = args.params()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    println!("Map size: {}x{}", params.width, params.height);
    println!(
        "Fill {:.2}, birth {}, survive {}, {} automaton steps, min region {}, {} smoothing passes",
        params.fill_prob,
        params.birth,
        params.survive,
        params.ca_steps,
        params.min_region,
        params.smoothing_passes,
    );

    if let Some(count) = args.batch {
        println!("Generating {} caves from seed {}...", count, seed);
        let seeds: Vec<u64> = (0..count as u64).map(|i| seed.wrapping_add(i)).collect();
        let caves = cave::generate_caves(&params, &seeds)?;
        for (&cave_seed, (_, stats)) in seeds.iter().zip(&caves) {
            print_stats(cave_seed, &params, stats);
        }
        return Ok(());
    }

    println!("Generating cave with seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (grid, stats) = cave::generate_cave_with_stats(&params, &mut rng)?;
    print_stats(seed, &params, &stats);

    if !args.quiet {
        let mode = if args.show_regions { AsciiMode::Regions } else { AsciiMode::Plain };
        ascii::print_ascii_map(&grid, mode);
    }

    if let Some(ref path) = args.png {
        export::export_cave_png(&grid, path, args.png_scale)?;
        println!("Exported cave to: {}", path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(flags: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cave_generator").chain(flags.iter().copied()))
    }

    #[test]
    fn test_batch_rejects_single_map_outputs() {
        let err = parse(&["--batch", "4", "--png", "out.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["--show-regions", "--batch", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_batch_alone_parses() {
        let args = parse(&["--batch", "4", "-s", "7"]).unwrap();
        assert_eq!(args.batch, Some(4));
        assert_eq!(args.seed, Some(7));

        let args = parse(&["--png", "out.png", "--show-regions"]).unwrap();
        assert_eq!(args.batch, None);
    }

    #[test]
    fn test_flags_override_preset() {
        let args = parse(&["--preset", "dense", "-W", "60", "--min-region", "0"]).unwrap();
        let params = args.params().unwrap();
        let dense = CaveParams::from_preset(CavePreset::Dense);

        assert_eq!(params.width, 60);
        assert_eq!(params.min_region, 0);
        assert_eq!(params.height, dense.height);
        assert_eq!(params.fill_prob, dense.fill_prob);
    }
}
