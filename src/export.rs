use image::{GrayImage, ImageBuffer, Luma};

use crate::cave::{CaveError, CaveGrid, Cell};

const WALL_SHADE: u8 = 0;
const FLOOR_SHADE: u8 = 255;

/// Pixel length of `cells` cells at `scale`, `None` if it does not fit in u32.
fn scaled_len(cells: usize, scale: u32) -> Option<u32> {
    u32::try_from(cells).ok()?.checked_mul(scale)
}

/// Render a cave as a grayscale image, each cell a `scale` x `scale` square.
/// WALL is black and FLOOR white.
///
/// Fails with `InvalidParameter` when the scaled image would be wider or
/// taller than `u32::MAX` pixels.
pub fn render_cave_image(grid: &CaveGrid, scale: u32) -> Result<GrayImage, CaveError> {
    let scale = scale.max(1);
    let (width, height) = match (scaled_len(grid.width, scale), scaled_len(grid.height, scale)) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(CaveError::invalid(
                "png_scale",
                format!(
                    "{}x{} cells at scale {} overflows the image size",
                    grid.width, grid.height, scale
                ),
            ))
        }
    };

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let cell = *grid.get((px / scale) as usize, (py / scale) as usize);
        match cell {
            Cell::Wall => Luma([WALL_SHADE]),
            Cell::Floor => Luma([FLOOR_SHADE]),
        }
    }))
}

/// Export a cave as a PNG preview.
pub fn export_cave_png(grid: &CaveGrid, path: &str, scale: u32) -> Result<(), CaveError> {
    render_cave_image(grid, scale)?.save(path)?;
    Ok(())
}
