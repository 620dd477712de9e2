//! 点群の密度ヒストグラム

use log::debug;

use super::attractor::{AttractorParams, Bounds, Orbit, Point};
use super::rescale::Rescale;
use crate::error::{Error, Result};

/// ピクセルごとの訪問回数（行優先）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityGrid {
    width: usize,
    height: usize,
    counts: Vec<u64>,
}

impl DensityGrid {
    /// 全セル 0 のグリッドを確保する
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cells = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            counts: vec![0; cells],
        })
    }

    /// 既存のカウント列からグリッドを作る
    pub fn from_counts(width: usize, height: usize, counts: Vec<u64>) -> Result<Self> {
        let cells = cell_count(width, height)?;
        if counts.len() != cells {
            return Err(Error::GridSize {
                expected: cells,
                got: counts.len(),
            });
        }
        Ok(Self {
            width,
            height,
            counts,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> u64 {
        self.counts[row * self.width + col]
    }

    pub fn cells(&self) -> &[u64] {
        &self.counts
    }

    /// 全セルの合計（＝集計した点の数）
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// 1回以上訪問されたセルの数
    pub fn visited(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    fn increment(&mut self, col: usize, row: usize) {
        self.counts[row * self.width + col] += 1;
    }
}

/// `width × height` のセル数（0 や桁あふれはエラー）
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(cells) if cells > 0 => Ok(cells),
        _ => Err(Error::InvalidDimensions { width, height }),
    }
}

/// 境界ボックスをグリッドに合わせる変換（x, y）
fn fit_bounds(bounds: &Bounds, width: usize, height: usize) -> (Rescale, Rescale) {
    let sx = Rescale::fit(bounds.min_x, bounds.max_x, width as f64);
    let sy = Rescale::fit(bounds.min_y, bounds.max_y, height as f64);
    if sx.is_flat() || sy.is_flat() {
        debug!(
            "境界ボックスの幅が 0 です: x=[{}, {}] y=[{}, {}]",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        );
    }
    (sx, sy)
}

fn bin_into<I>(grid: &mut DensityGrid, points: I, sx: Rescale, sy: Rescale)
where
    I: IntoIterator<Item = Point>,
{
    let (w, h) = (grid.width, grid.height);
    for p in points {
        grid.increment(sx.index(p.x, w), sy.index(p.y, h));
    }
}

/// 軌道を `width × height` のヒストグラムに集計する
///
/// 境界ボックスの最小値がセル 0、最大値が最後のセルに入る。全ての点が
/// ちょうど1回ずつ数えられるので、合計は `points.len()` に一致する。
pub fn make_histogram(points: &[Point], width: usize, height: usize) -> Result<DensityGrid> {
    let mut grid = DensityGrid::new(width, height)?;
    let bounds = Bounds::of(points);
    if bounds.is_empty() {
        return Ok(grid);
    }

    let (sx, sy) = fit_bounds(&bounds, width, height);
    bin_into(&mut grid, points.iter().copied(), sx, sy);
    Ok(grid)
}

/// 軌道を保持せずに集計する
///
/// 1回目で境界ボックスを求め、2回目で同じ軌道を再生成して集計する。
/// 結果は `make_histogram(&generate(iters, params), ..)` と同一。
pub fn make_histogram_streaming(
    iters: usize,
    params: &AttractorParams,
    width: usize,
    height: usize,
) -> Result<DensityGrid> {
    let mut grid = DensityGrid::new(width, height)?;
    let mut bounds = Bounds::EMPTY;
    for p in Orbit::new(*params).take(iters) {
        bounds.include(p);
    }
    if bounds.is_empty() {
        return Ok(grid);
    }

    let (sx, sy) = fit_bounds(&bounds, width, height);
    bin_into(&mut grid, Orbit::new(*params).take(iters), sx, sy);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::attractor::generate;

    fn reference() -> AttractorParams {
        AttractorParams::new(-2.0, -2.0, -1.2, 2.0).unwrap()
    }

    #[test]
    fn total_equals_point_count() {
        let points = generate(10_000, &reference());
        let grid = make_histogram(&points, 64, 48).unwrap();
        assert_eq!(grid.total(), 10_000);
        assert_eq!(grid.cells().len(), 64 * 48);
    }

    #[test]
    fn extreme_points_land_in_corner_cells() {
        let points = [
            Point { x: -1.0, y: -1.0 },
            Point { x: 1.0, y: 1.0 },
            Point { x: 0.0, y: 0.0 },
        ];
        let grid = make_histogram(&points, 4, 4).unwrap();
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(3, 3), 1);
        assert_eq!(grid.get(2, 2), 1);
        assert_eq!(grid.total(), 3);
    }

    #[test]
    fn single_point_uses_degenerate_range() {
        let points = generate(1, &reference());
        let grid = make_histogram(&points, 4, 4).unwrap();
        assert_eq!(grid.total(), 1);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.visited(), 1);
    }

    #[test]
    fn flat_axis_collapses_to_first_column() {
        let points: Vec<Point> = (0..5).map(|i| Point { x: 0.5, y: i as f64 }).collect();
        let grid = make_histogram(&points, 3, 5).unwrap();
        for row in 0..5 {
            assert_eq!(grid.get(0, row), 1);
        }
        assert_eq!(grid.total(), 5);
    }

    #[test]
    fn empty_points_give_empty_grid() {
        let grid = make_histogram(&[], 2, 2).unwrap();
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            make_histogram(&[Point::ORIGIN], 0, 4),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(make_histogram_streaming(10, &reference(), 4, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        assert!(matches!(
            make_histogram(&[Point::ORIGIN], usize::MAX, 2),
            Err(Error::InvalidDimensions { height: 2, .. })
        ));
        assert!(make_histogram_streaming(10, &reference(), 2, usize::MAX).is_err());
        assert!(DensityGrid::from_counts(usize::MAX, usize::MAX, vec![]).is_err());
        assert_eq!(cell_count(3, 4).unwrap(), 12);
    }

    #[test]
    fn zero_iterations_give_empty_grid() {
        let grid = make_histogram_streaming(0, &reference(), 3, 3).unwrap();
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn streaming_matches_materialized() {
        let params = AttractorParams::new(2.01, 2.53, 1.61, -0.33).unwrap();
        let points = generate(5_000, &params);
        let a = make_histogram(&points, 32, 32).unwrap();
        let b = make_histogram_streaming(5_000, &params, 32, 32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_counts_checks_length() {
        assert!(matches!(
            DensityGrid::from_counts(2, 2, vec![1, 2, 3]),
            Err(Error::GridSize { expected: 4, got: 3 })
        ));
        let grid = DensityGrid::from_counts(2, 1, vec![4, 5]).unwrap();
        assert_eq!(grid.get(1, 0), 5);
    }
}
