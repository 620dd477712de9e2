//! 描画設定とコマンドライン引数

use std::path::PathBuf;

use clap::Parser;

use crate::common::attractor::AttractorParams;
use crate::common::constants::*;
use crate::common::histogram::cell_count;
use crate::error::{Error, Result};

/// 1回の描画に必要な設定
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub params: AttractorParams,
    pub iters: usize,
    pub width: usize,
    pub height: usize,
    /// true なら軌道を保持せず2パスで集計する
    pub streaming: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            params: AttractorParams::default(),
            iters: DEFAULT_ITERS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            streaming: true,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iters == 0 {
            return Err(Error::ZeroIterations);
        }
        cell_count(self.width, self.height)?;
        Ok(())
    }
}

/// `WxH` 形式の画像サイズ
fn parse_size(s: &str) -> std::result::Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("WxH 形式で指定してください: '{}'", s))?;
    let w = w.parse().map_err(|_| format!("幅が数値ではありません: '{}'", w))?;
    let h = h.parse().map_err(|_| format!("高さが数値ではありません: '{}'", h))?;
    Ok((w, h))
}

/// Peters アトラクターの密度画像を描画する
#[derive(Debug, Clone, Parser)]
#[command(name = "peters", version)]
pub struct CliArgs {
    /// 係数 a b c d（省略時は既定値 -2 -2 -1.2 2）
    #[arg(value_name = "COEF", allow_negative_numbers = true, conflicts_with = "preset")]
    pub coefficients: Vec<f64>,

    /// プリセットの係数を使う (0 または 1)
    #[arg(long)]
    pub preset: Option<usize>,

    /// 反復回数
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERS)]
    pub iters: usize,

    /// 画像サイズ (例: 1400x1400)
    #[arg(short, long, value_name = "WxH", value_parser = parse_size)]
    pub size: Option<(usize, usize)>,

    /// 出力ファイル (.ppm / .png など)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 軌道を全てメモリに保持して集計する
    #[arg(long)]
    pub in_memory: bool,
}

impl CliArgs {
    fn params(&self) -> Result<AttractorParams> {
        if let Some(index) = self.preset {
            return PRESETS.get(index).copied().ok_or_else(|| {
                Error::InvalidArgument(format!("プリセット {} は存在しません", index))
            });
        }
        match self.coefficients.as_slice() {
            [] => Ok(AttractorParams::default()),
            &[a, b, c, d] => AttractorParams::new(a, b, c, d),
            other => Err(Error::InvalidArgument(format!(
                "係数は a b c d の4つが必要です（{} 個指定されました）",
                other.len()
            ))),
        }
    }

    /// 引数から描画設定を組み立てて検証する
    pub fn render_config(&self) -> Result<RenderConfig> {
        let (width, height) = self.size.unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let config = RenderConfig {
            params: self.params()?,
            iters: self.iters,
            width,
            height,
            streaming: !self.in_memory,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("peters").chain(args.iter().copied())).unwrap()
    }

    fn config(args: &[&str]) -> Result<RenderConfig> {
        parse(args).render_config()
    }

    #[test]
    fn defaults_follow_constants() {
        let cli = parse(&[]);
        let config = cli.render_config().unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.params, PRESETS[0]);
        assert_eq!(cli.output, PathBuf::from("test.ppm"));
    }

    #[test]
    fn parses_negative_coefficients() {
        let p = config(&["2.01", "-2.53", "1.61", "-0.33"]).unwrap().params;
        assert_eq!((p.a(), p.b(), p.c(), p.d()), (2.01, -2.53, 1.61, -0.33));
    }

    #[test]
    fn parses_options() {
        let cli = parse(&[
            "--preset", "1", "-n", "5000", "--size", "320x200", "-o", "out.png", "--in-memory",
        ]);
        let config = cli.render_config().unwrap();
        assert_eq!(config.params, PRESETS[1]);
        assert_eq!(config.iters, 5000);
        assert_eq!((config.width, config.height), (320, 200));
        assert!(!config.streaming);
        assert_eq!(cli.output, PathBuf::from("out.png"));
    }

    #[test]
    fn clap_rejects_malformed_flags() {
        let bad: [&[&str]; 4] = [
            &["--bogus"],
            &["--size", "12"],
            &["-n"],
            &["--preset", "0", "1", "2", "3", "4"],
        ];
        for args in bad {
            let argv = std::iter::once("peters").chain(args.iter().copied());
            assert!(CliArgs::try_parse_from(argv).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(config(&["1", "2"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(config(&["--preset", "9"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(config(&["-n", "0"]), Err(Error::ZeroIterations)));
        assert!(matches!(
            config(&["-s", "0x10"]),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            config(&["nan", "0", "0", "0"]),
            Err(Error::NonFiniteParameter { .. })
        ));
    }

    #[test]
    fn rejects_overflowing_size() {
        let size = format!("{}x2", usize::MAX);
        assert!(matches!(
            config(&["-s", &size]),
            Err(Error::InvalidDimensions { height: 2, .. })
        ));
    }
}
