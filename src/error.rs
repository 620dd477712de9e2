//! エラー型

use std::path::PathBuf;

/// ライブラリ全体のエラー
///
/// 計算側のエラーと出力側 (`Io` / `Image`) のエラーは別の variant で区別する。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("グリッドサイズ {width}x{height} は扱えません（正の値で、セル数が usize に収まる必要があります）")]
    InvalidDimensions { width: usize, height: usize },
    #[error("反復回数は1以上が必要です")]
    ZeroIterations,
    #[error("係数 {name} が有限ではありません: {value}")]
    NonFiniteParameter { name: char, value: f64 },
    #[error("グリッドのセル数が {got} です（期待値 {expected}）")]
    GridSize { expected: usize, got: usize },
    #[error("ピクセルバッファが {got} バイトです（期待値 {expected}）")]
    BufferSize { expected: usize, got: usize },
    #[error("対応していない画像形式です: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("引数が不正です: {0}")]
    InvalidArgument(String),
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("画像のエンコードに失敗しました: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
