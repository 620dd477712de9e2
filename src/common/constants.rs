//! 共通定数

use super::attractor::AttractorParams;

/// 既定の反復回数
pub const DEFAULT_ITERS: usize = 120_000_000;
/// 既定の画像幅
pub const DEFAULT_WIDTH: usize = 1400;
/// 既定の画像高さ
pub const DEFAULT_HEIGHT: usize = 1400;
/// 既定の出力ファイル
pub const DEFAULT_OUTPUT: &str = "test.ppm";

/// 見栄えの良いパラメータの組
pub const PRESETS: [AttractorParams; 2] = [
    AttractorParams::from_raw(-2.0, -2.0, -1.2, 2.0),
    AttractorParams::from_raw(2.01, 2.53, 1.61, -0.33),
];

/// ビューアの描画領域
pub const VIEW_WIDTH: usize = 700;
pub const VIEW_HEIGHT: usize = 700;

/// ビューアでの反復回数（対話操作向けに少なめ）
pub const VIEW_ITERS: usize = 2_000_000;

/// キー1回あたりのパラメータ変化量
pub const PARAM_STEP: f64 = 0.01;
