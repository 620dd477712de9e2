//! パイプラインの組み立て

use std::time::Instant;

use log::{debug, info};

use crate::common::attractor::generate;
use crate::common::colors::{make_color_map, ColorGrid};
use crate::common::histogram::{make_histogram, make_histogram_streaming, DensityGrid};
use crate::config::RenderConfig;
use crate::error::Result;

/// 設定に従ってヒストグラムを作る
pub fn render_histogram(config: &RenderConfig) -> Result<DensityGrid> {
    config.validate()?;

    let start = Instant::now();
    let grid = if config.streaming {
        make_histogram_streaming(config.iters, &config.params, config.width, config.height)?
    } else {
        let points = generate(config.iters, &config.params);
        debug!("軌道 {} 点を生成: {:.2?}", points.len(), start.elapsed());
        // points はここで解放される
        make_histogram(&points, config.width, config.height)?
    };

    info!(
        "ヒストグラム {}x{}: {} 点, 訪問セル {} ({:.2?})",
        grid.width(),
        grid.height(),
        grid.total(),
        grid.visited(),
        start.elapsed()
    );
    Ok(grid)
}

/// パラメータ → 軌道 → ヒストグラム → カラーマップ
pub fn render(config: &RenderConfig) -> Result<ColorGrid> {
    let grid = render_histogram(config)?;
    let start = Instant::now();
    let colors = make_color_map(&grid);
    debug!("カラーマップ完了: {:.2?}", start.elapsed());
    Ok(colors)
}
