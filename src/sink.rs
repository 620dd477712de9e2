//! 画像の書き出し

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};
use log::info;

use crate::common::colors::ColorGrid;
use crate::common::histogram::cell_count;
use crate::error::{Error, Result};

/// 幅・高さと RGB バイト列（行優先、1ピクセル3バイト）を受け取る出力先
pub trait ImageSink {
    fn write_image(&mut self, width: usize, height: usize, rgb: &[u8]) -> Result<()>;
}

fn check_buffer(width: usize, height: usize, rgb: &[u8]) -> Result<()> {
    let expected = cell_count(width, height)?
        .checked_mul(3)
        .ok_or(Error::InvalidDimensions { width, height })?;
    if rgb.len() != expected {
        return Err(Error::BufferSize {
            expected,
            got: rgb.len(),
        });
    }
    Ok(())
}

/// バイナリ PPM (P6) 形式
pub struct PpmSink<W: Write> {
    writer: W,
}

impl<W: Write> PpmSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PpmSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ImageSink for PpmSink<W> {
    fn write_image(&mut self, width: usize, height: usize, rgb: &[u8]) -> Result<()> {
        check_buffer(width, height, rgb)?;
        writeln!(self.writer, "P6 {} {} {}", width, height, 255)?;
        self.writer.write_all(rgb)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// image クレートで対応している形式（PNG など）
pub struct ImageFileSink {
    path: PathBuf,
    format: ImageFormat,
}

impl ImageFileSink {
    pub fn new(path: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

impl ImageSink for ImageFileSink {
    fn write_image(&mut self, width: usize, height: usize, rgb: &[u8]) -> Result<()> {
        check_buffer(width, height, rgb)?;
        let too_large = |_| Error::InvalidDimensions { width, height };
        let w = u32::try_from(width).map_err(too_large)?;
        let h = u32::try_from(height).map_err(too_large)?;
        image::save_buffer_with_format(
            &self.path,
            rgb,
            w,
            h,
            ColorType::Rgb8,
            self.format,
        )?;
        Ok(())
    }
}

/// 拡張子から出力形式を選んでカラーマップを保存する
pub fn save_image(path: impl AsRef<Path>, colors: &ColorGrid) -> Result<()> {
    let path = path.as_ref();
    let is_pnm = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ppm") || e.eq_ignore_ascii_case("pnm"))
        .unwrap_or(false);

    let mut sink: Box<dyn ImageSink> = if is_pnm {
        Box::new(PpmSink::create(path)?)
    } else {
        let format = ImageFormat::from_path(path)
            .map_err(|_| Error::UnsupportedFormat(path.to_path_buf()))?;
        Box::new(ImageFileSink::new(path, format))
    };

    sink.write_image(colors.width(), colors.height(), &colors.to_rgb_bytes())?;
    info!(
        "{}x{} の画像を保存しました: {}",
        colors.width(),
        colors.height(),
        path.display()
    );
    Ok(())
}
