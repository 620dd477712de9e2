//! 描画パイプラインの中核

pub mod attractor;
pub mod colors;
pub mod constants;
pub mod histogram;
pub mod rescale;
