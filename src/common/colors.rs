//! 密度から色への変換

use super::histogram::DensityGrid;
use super::rescale::Rescale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// 一度も訪問されていないセルの色
    pub const EMPTY: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// u32形式: 0xRRGGBB
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// 正規化済みの密度 (0〜255) から色を計算
///
/// 密度が上がるほど黒に近づく。緑 (×8) が最初に 0 になり、次に青 (×5)、
/// 最後に赤 (×2)。
pub fn get_hue(density: f64) -> Color {
    Color {
        r: (255.0 - density * 2.0).clamp(0.0, 255.0) as u8,
        g: (255.0 - density * 8.0).clamp(0.0, 255.0) as u8,
        b: (255.0 - density * 5.0).clamp(0.0, 255.0) as u8,
    }
}

/// セルごとの色（行優先）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ColorGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Color {
        self.pixels[row * self.width + col]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 画像出力用の RGB バイト列（1ピクセル3バイト、上の行から）
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.pixels.len() * 3);
        for c in &self.pixels {
            buf.extend_from_slice(&[c.r, c.g, c.b]);
        }
        buf
    }

    /// minifb 用のバッファ
    pub fn to_u32_buffer(&self) -> Vec<u32> {
        self.pixels.iter().map(|c| c.to_u32()).collect()
    }
}

/// ヒストグラム全体の正のカウントの最小値と最大値
fn count_range(grid: &DensityGrid) -> Option<(u64, u64)> {
    grid.cells()
        .iter()
        .filter(|&&c| c > 0)
        .fold(None, |acc, &c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })
}

/// ヒストグラムをカラーマップに変換する
///
/// 正のカウントの最小値を密度 0、最大値を密度 255 に正規化してから
/// `get_hue` を適用する。カウント 0 のセルは常に `Color::EMPTY`。
pub fn make_color_map(grid: &DensityGrid) -> ColorGrid {
    let rescale = match count_range(grid) {
        Some((min, max)) => Rescale::fit(min as f64, max as f64, 255.0),
        None => Rescale::FLAT,
    };

    let pixels = grid
        .cells()
        .iter()
        .map(|&count| {
            if count == 0 {
                Color::EMPTY
            } else {
                get_hue(rescale.apply(count as f64))
            }
        })
        .collect();

    ColorGrid {
        width: grid.width(),
        height: grid.height(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_at_zero_is_white() {
        assert_eq!(get_hue(0.0), Color::EMPTY);
    }

    #[test]
    fn hue_channels_fall_at_different_rates() {
        let c = get_hue(40.0);
        // r = 255 - 80, g = 255 - 320 -> 0, b = 255 - 200
        assert_eq!(c, Color { r: 175, g: 0, b: 55 });
        assert_eq!(get_hue(255.0), Color { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn hue_truncates_fractions() {
        assert_eq!(get_hue(0.3).r, 254);
    }

    #[test]
    fn packs_rgb_into_u32() {
        let c = Color { r: 0x12, g: 0x34, b: 0x56 };
        assert_eq!(c.to_u32(), 0x123456);
    }

    #[test]
    fn empty_histogram_is_all_white() {
        let grid = DensityGrid::new(3, 2).unwrap();
        let colors = make_color_map(&grid);
        assert!(colors.pixels().iter().all(|&c| c == Color::EMPTY));
    }

    #[test]
    fn zero_cells_stay_white_and_dense_cells_darken() {
        let grid = DensityGrid::from_counts(2, 2, vec![0, 1, 1, 100]).unwrap();
        let colors = make_color_map(&grid);
        assert_eq!(colors.get(0, 0), Color::EMPTY);

        let dense = colors.get(1, 1);
        for sparse in [colors.get(1, 0), colors.get(0, 1)] {
            assert!(dense.r <= sparse.r);
            assert!(dense.g <= sparse.g);
            assert!(dense.b <= sparse.b);
        }
        assert_eq!(dense, Color { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn equal_counts_share_one_color() {
        let grid = DensityGrid::from_counts(3, 1, vec![7, 0, 7]).unwrap();
        let colors = make_color_map(&grid);
        assert_eq!(colors.get(0, 0), get_hue(0.0));
        assert_eq!(colors.get(0, 0), colors.get(2, 0));
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let grid = DensityGrid::from_counts(2, 1, vec![0, 1]).unwrap();
        let bytes = make_color_map(&grid).to_rgb_bytes();
        assert_eq!(bytes.len(), 6);
        assert_eq!(&bytes[..3], &[255, 255, 255]);
    }
}
