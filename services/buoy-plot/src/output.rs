//! Output stage: write the figure to disk or hand it to a viewer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use image::{ImageBuffer, ImageFormat, RgbaImage};
use tracing::{debug, warn};

use buoy_common::{plot_filename, BuoyError, BuoyResult};
use renderer::{png, Canvas};

/// Write the figure into the current directory as
/// `buoys_<YYYYMMDD_HHMMZ>.<format>`, overwriting any existing file of that
/// name. Returns the path written.
pub fn save_timestamped(canvas: &Canvas, format: &str, now: DateTime<Utc>) -> BuoyResult<PathBuf> {
    let path = PathBuf::from(plot_filename(now, format));
    save(canvas, format, &path)?;
    Ok(path)
}

/// Write the figure to `path` in the requested format.
pub fn save(canvas: &Canvas, format: &str, path: &Path) -> BuoyResult<()> {
    match format.to_ascii_lowercase().as_str() {
        "png" => {
            let bytes = encode_png(canvas)?;
            fs::write(path, bytes)?;
        }
        "jpg" | "jpeg" => {
            // JPEG has no alpha channel
            let rgb = image::DynamicImage::ImageRgba8(to_image(canvas)?).to_rgb8();
            rgb.save_with_format(path, ImageFormat::Jpeg)
                .map_err(|e| BuoyError::Render(format!("jpeg encode failed: {}", e)))?;
        }
        "bmp" => {
            to_image(canvas)?
                .save_with_format(path, ImageFormat::Bmp)
                .map_err(|e| BuoyError::Render(format!("bmp encode failed: {}", e)))?;
        }
        "tif" | "tiff" => {
            to_image(canvas)?
                .save_with_format(path, ImageFormat::Tiff)
                .map_err(|e| BuoyError::Render(format!("tiff encode failed: {}", e)))?;
        }
        other => return Err(BuoyError::UnsupportedFormat(other.to_string())),
    }

    debug!(path = %path.display(), format = format, "Figure written");
    Ok(())
}

/// Show the figure in the platform image viewer and block until it exits.
///
/// The figure goes to a temporary PNG which lives for the duration of the
/// viewer process.
pub fn display(canvas: &Canvas) -> BuoyResult<()> {
    let bytes = encode_png(canvas)?;

    let mut file = tempfile::Builder::new()
        .prefix("buoys_")
        .suffix(".png")
        .tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;

    let status = Command::new(viewer_command()).arg(file.path()).status()?;
    if !status.success() {
        warn!(status = %status, "Viewer exited with a failure status");
    }
    Ok(())
}

fn encode_png(canvas: &Canvas) -> BuoyResult<Vec<u8>> {
    png::encode_auto(
        canvas.pixels(),
        canvas.width() as usize,
        canvas.height() as usize,
    )
    .map_err(BuoyError::Render)
}

fn to_image(canvas: &Canvas) -> BuoyResult<RgbaImage> {
    ImageBuffer::from_raw(canvas.width(), canvas.height(), canvas.pixels().to_vec())
        .ok_or_else(|| BuoyError::Render("canvas buffer has the wrong length".to_string()))
}

fn viewer_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::Color;

    fn small_canvas() -> Canvas {
        Canvas::filled(16, 12, Color::rgb(151, 182, 222))
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save(&small_canvas(), "png", &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_save_jpeg_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save(&small_canvas(), "jpg", &path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_unsupported_format_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.webp");
        let err = save(&small_canvas(), "webp", &path).unwrap_err();
        assert!(matches!(err, BuoyError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_timestamped_filename() {
        let dir = tempfile::tempdir().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let now = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 3, 5, 14, 7, 0).unwrap();
        let path = save_timestamped(&small_canvas(), "png", now).unwrap();

        std::env::set_current_dir(prev).unwrap();
        assert_eq!(path, PathBuf::from("buoys_20240305_1407Z.png"));
    }
}
