//! Peters アトラクター密度レンダラー
//!
//! 漸化式 `x' = sin(a*y) - cos(b*x)`, `y' = sin(c*x) - cos(d*y)` を反復し、
//! 得られた点群を固定サイズのヒストグラムに集計してから色に変換する。
//!
//! 処理の流れ: パラメータ → 軌道 → ヒストグラム → カラーマップ → 画像出力

pub mod common;
pub mod config;
pub mod error;
pub mod render;
pub mod sink;

pub use error::{Error, Result};
