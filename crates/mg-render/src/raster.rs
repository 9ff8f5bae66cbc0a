//! Raster output (binary PPM and PNG)

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use mg_core::Grid;

use crate::error::RenderError;
use crate::palette::Palette;

/// Image container chosen from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl ImageFormat {
    /// `.ppm` or `.png`, case-insensitive
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("ppm") => Ok(ImageFormat::Ppm),
            Some("png") => Ok(ImageFormat::Png),
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Write `grid` as a binary P6 pixmap, one pixel per tile, row-major.
pub fn write_ppm<W: Write>(grid: &Grid, palette: &Palette, mut writer: W) -> Result<(), RenderError> {
    if grid.area() == 0 {
        return Err(RenderError::EmptyGrid);
    }

    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;
    let mut row_buf = Vec::with_capacity(grid.width() * 3);
    for row in grid.rows() {
        row_buf.clear();
        for &tile in row {
            row_buf.extend_from_slice(&palette.color(tile));
        }
        writer.write_all(&row_buf)?;
    }
    writer.flush()?;
    Ok(())
}

/// One RGB pixel per tile
pub fn to_rgb_image(grid: &Grid, palette: &Palette) -> RgbImage {
    RgbImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Rgb(palette.color(grid.get(x as usize, y as usize)))
    })
}

/// Encode `grid` as PNG
pub fn write_png<W: Write + Seek>(
    grid: &Grid,
    palette: &Palette,
    writer: &mut W,
) -> Result<(), RenderError> {
    if grid.area() == 0 {
        return Err(RenderError::EmptyGrid);
    }
    to_rgb_image(grid, palette).write_to(writer, image::ImageFormat::Png)?;
    Ok(())
}

/// Render `grid` to `path`, choosing the format from its extension.
pub fn save_image(grid: &Grid, palette: &Palette, path: &Path) -> Result<(), RenderError> {
    let format = ImageFormat::from_path(path)?;
    if grid.area() == 0 {
        return Err(RenderError::EmptyGrid);
    }

    match format {
        ImageFormat::Ppm => {
            let file = File::create(path)?;
            write_ppm(grid, palette, BufWriter::new(file))?;
        }
        ImageFormat::Png => {
            to_rgb_image(grid, palette).save_with_format(path, image::ImageFormat::Png)?;
        }
    }

    log::debug!(
        "wrote {}x{} {:?} image to {}",
        grid.width(),
        grid.height(),
        format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::{Room, Tile};
    use std::io::Cursor;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(3, 2);
        grid.fill_rect(&Room::new(0, 0, 1, 2), Tile::Room);
        grid.set(1, 1, Tile::Hallway);
        grid
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("out.ppm")).unwrap(), ImageFormat::Ppm);
        assert_eq!(ImageFormat::from_path(Path::new("dir/OUT.PNG")).unwrap(), ImageFormat::Png);
        assert!(matches!(
            ImageFormat::from_path(Path::new("out.jpg")),
            Err(RenderError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ImageFormat::from_path(Path::new("maze")),
            Err(RenderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_ppm_header_and_pixels() {
        let mut out = Vec::new();
        write_ppm(&sample_grid(), &Palette::default(), &mut out).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        let pixels = &out[header.len()..];
        assert_eq!(pixels.len(), 3 * 2 * 3);
        // row 0: room, empty, empty
        assert_eq!(&pixels[0..3], &[50, 130, 255]);
        assert_eq!(&pixels[3..6], &[245, 245, 245]);
        // row 1: room, hallway, empty
        assert_eq!(&pixels[9..12], &[50, 130, 255]);
        assert_eq!(&pixels[12..15], &[30, 30, 30]);
        assert_eq!(&pixels[15..18], &[245, 245, 245]);
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let mut out = Vec::new();
        assert!(matches!(
            write_ppm(&Grid::new(0, 5), &Palette::default(), &mut out),
            Err(RenderError::EmptyGrid)
        ));
        assert!(out.is_empty());

        let mut cursor = Cursor::new(Vec::new());
        assert!(matches!(
            write_png(&Grid::new(4, 0), &Palette::default(), &mut cursor),
            Err(RenderError::EmptyGrid)
        ));
    }

    #[test]
    fn test_rgb_image_matches_grid() {
        let image = to_rgb_image(&sample_grid(), &Palette::default());
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(1, 1), &Rgb([30, 30, 30]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([50, 130, 255]));
    }

    #[test]
    fn test_png_signature() {
        let mut cursor = Cursor::new(Vec::new());
        write_png(&sample_grid(), &Palette::default(), &mut cursor).unwrap();
        let bytes = cursor.into_inner();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
