//! Image output for rendered pixels.
//!
//! Renders arrive as a stream of 8-bit RGB triples in row-major order, top
//! row first. PPM is written as the stream is consumed; PNG needs the whole
//! image and buffers it first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Expected {expected} pixels, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text `P3` portable pixmap
    Ppm,
    /// Portable Network Graphics
    Png,
}

impl OutputFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("ppm") => Ok(OutputFormat::Ppm),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Write pixels as a `P3` PPM.
///
/// The header is `P3`, `<width> <height>`, `255`, each on its own line,
/// followed by one `r g b` line per pixel.
pub fn write_ppm<W, I>(mut writer: W, width: u32, height: u32, pixels: I) -> OutputResult<()>
where
    W: Write,
    I: IntoIterator<Item = [u8; 3]>,
{
    let expected = width as usize * height as usize;

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    let mut written = 0;
    let mut pixels = pixels.into_iter();
    while let Some([r, g, b]) = pixels.next() {
        if written == expected {
            return Err(OutputError::PixelCount {
                expected,
                actual: expected + 1 + pixels.count(),
            });
        }
        writeln!(writer, "{} {} {}", r, g, b)?;
        written += 1;
    }

    if written != expected {
        return Err(OutputError::PixelCount {
            expected,
            actual: written,
        });
    }

    writer.flush()?;
    Ok(())
}

/// Buffer pixels into an RGB image and encode it as PNG.
pub fn save_png<I>(path: &Path, width: u32, height: u32, pixels: I) -> OutputResult<()>
where
    I: IntoIterator<Item = [u8; 3]>,
{
    let expected = width as usize * height as usize;
    let mut bytes = Vec::with_capacity(expected * 3);
    for pixel in pixels {
        bytes.extend_from_slice(&pixel);
    }

    let actual = bytes.len() / 3;
    let image = image::RgbImage::from_raw(width, height, bytes)
        .filter(|_| actual == expected)
        .ok_or(OutputError::PixelCount { expected, actual })?;

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Write pixels to `path`, choosing the encoder from its extension.
pub fn save<I>(path: &Path, width: u32, height: u32, pixels: I) -> OutputResult<()>
where
    I: IntoIterator<Item = [u8; 3]>,
{
    let format = OutputFormat::from_path(path)?;
    log::debug!("Writing {}x{} {:?} image to {}", width, height, format, path.display());

    match format {
        OutputFormat::Ppm => {
            let writer = BufWriter::new(File::create(path)?);
            write_ppm(writer, width, height, pixels)
        }
        OutputFormat::Png => save_png(path, width, height, pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_layout() {
        let pixels = vec![[255, 0, 0], [0, 254, 0], [0, 0, 7], [1, 2, 3]];
        let mut out = Vec::new();
        write_ppm(&mut out, 2, 2, pixels).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n255 0 0\n0 254 0\n0 0 7\n1 2 3\n");
    }

    #[test]
    fn test_ppm_too_few_pixels() {
        let mut out = Vec::new();
        let result = write_ppm(&mut out, 2, 2, vec![[0, 0, 0]; 3]);
        assert!(matches!(
            result,
            Err(OutputError::PixelCount {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_ppm_too_many_pixels() {
        let mut out = Vec::new();
        let result = write_ppm(&mut out, 1, 2, vec![[0, 0, 0]; 5]);
        assert!(matches!(
            result,
            Err(OutputError::PixelCount {
                expected: 2,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.ppm")).unwrap(), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path(Path::new("OUT.PNG")).unwrap(), OutputFormat::Png);
        assert!(matches!(
            OutputFormat::from_path(Path::new("out.jpg")),
            Err(OutputError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_png_round_trip() {
        let path = std::env::temp_dir().join(format!("lumen_output_test_{}.png", std::process::id()));
        let pixels = vec![[10, 20, 30], [40, 50, 60], [70, 80, 90]];
        save(&path, 3, 1, pixels).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.dimensions(), (3, 1));
        assert_eq!(decoded.get_pixel(1, 0).0, [40, 50, 60]);
    }

    #[test]
    fn test_png_pixel_count_mismatch() {
        let path = std::env::temp_dir().join("lumen_output_never_written.png");
        let result = save_png(&path, 2, 2, vec![[0, 0, 0]; 3]);
        assert!(matches!(result, Err(OutputError::PixelCount { .. })));
    }
}
