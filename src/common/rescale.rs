//! 最小値・最大値による線形スケーリング

/// `[min, max]` を `[0, target]` に写す一次変換
///
/// `apply(v) = v * scale - offset`。範囲の幅が 0（または範囲が空）の場合は
/// `scale = 0` として、全ての値を 0 に写す。ゼロ除算はしない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescale {
    pub scale: f64,
    pub offset: f64,
}

impl Rescale {
    pub const FLAT: Rescale = Rescale {
        scale: 0.0,
        offset: 0.0,
    };

    pub fn fit(min: f64, max: f64, target: f64) -> Self {
        let span = max - min;
        if !(span.is_finite() && span > 0.0) {
            return Self::FLAT;
        }
        let scale = target / span;
        Self {
            scale,
            offset: min * scale,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.scale == 0.0
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        v * self.scale - self.offset
    }

    /// `apply` の結果を `0..len` のセル番号に丸める
    ///
    /// 最大値はちょうど `len` に写るので、最後のセルに寄せる。
    #[inline]
    pub fn index(&self, v: f64, len: usize) -> usize {
        // 負の値や NaN は `as usize` で 0 になる
        (self.apply(v).floor() as usize).min(len - 1)
    }
}
