//! Debug tool for comparing cave presets visually
//! Renders every preset for a few seeds into one image: one row per preset

use cave_generator::cave::{generate_cave_from_seed, CaveParams, CavePreset};
use cave_generator::export::render_cave_image;
use image::{GrayImage, ImageBuffer, Luma};

const WIDTH: usize = 100;
const HEIGHT: usize = 40;
const SEEDS: [u64; 3] = [42, 43, 44];
const SCALE: u32 = 4;
const GAP: u32 = 6;

fn main() {
    println!("Generating preset comparison grid...");

    let mut rows: Vec<Vec<GrayImage>> = Vec::new();
    for &preset in CavePreset::all() {
        let params = CaveParams::from_preset(preset).with_size(WIDTH, HEIGHT);
        println!("  Row {}: {} ({})", rows.len() + 1, preset, preset.description());

        let mut row = Vec::new();
        for &seed in &SEEDS {
            let rendered = generate_cave_from_seed(&params, seed)
                .and_then(|grid| render_cave_image(&grid, SCALE));
            match rendered {
                Ok(img) => row.push(img),
                Err(e) => {
                    eprintln!("Failed to generate {} with seed {}: {}", preset, seed, e);
                    return;
                }
            }
        }
        rows.push(row);
    }

    let grid = create_grid(&rows);
    match grid.save("preset_comparison.png") {
        Ok(()) => println!("Saved preset_comparison.png ({} seeds per row)", SEEDS.len()),
        Err(e) => eprintln!("Failed to save grid: {}", e),
    }
}

fn create_grid(rows: &[Vec<GrayImage>]) -> GrayImage {
    let Some(first) = rows.first().and_then(|row| row.first()) else {
        return ImageBuffer::new(1, 1);
    };

    let cell_width = first.width();
    let cell_height = first.height();
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;

    let grid_width = cols * (cell_width + GAP) + GAP;
    let grid_height = rows.len() as u32 * (cell_height + GAP) + GAP;
    let mut grid: GrayImage = ImageBuffer::from_pixel(grid_width, grid_height, Luma([96]));

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, img) in row.iter().enumerate() {
            let x_offset = GAP + col_idx as u32 * (cell_width + GAP);
            let y_offset = GAP + row_idx as u32 * (cell_height + GAP);

            for (x, y, pixel) in img.enumerate_pixels() {
                grid.put_pixel(x_offset + x, y_offset + y, *pixel);
            }
        }
    }

    grid
}
