//! Peters アトラクター描画 (バッチ版)
//!
//! 軌道を反復してヒストグラムを作り、カラーマップを画像として保存する。
//!
//! 例:
//!   peters                          # 既定値 (-2, -2, -1.2, 2) で test.ppm を出力
//!   peters 2.01 2.53 1.61 -0.33 -o out.png
//!   peters --preset 1 -n 10000000 -s 800x800
//!
//! ログは RUST_LOG=info で表示される。

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use peters::config::CliArgs;
use peters::render::render;
use peters::sink::save_image;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = CliArgs::parse();
    let config = cli.render_config()?;
    info!(
        "描画開始: {} (反復 {}, {}x{}, streaming={})",
        config.params, config.iters, config.width, config.height, config.streaming
    );

    let start = Instant::now();
    let colors = render(&config).context("描画に失敗しました")?;
    save_image(&cli.output, &colors)
        .with_context(|| format!("画像の保存に失敗しました: {}", cli.output.display()))?;

    println!(
        "画像を保存しました: {} ({:.2?})",
        cli.output.display(),
        start.elapsed()
    );
    Ok(())
}
