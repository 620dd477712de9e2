//! アトラクターの軌道計算

use std::fmt;

use crate::error::{Error, Result};

/// 漸化式の係数 (a, b, c, d)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractorParams {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl AttractorParams {
    /// 係数を検証して生成する
    ///
    /// sin/cos は有界なので、有限な係数からは NaN や無限大は生じない。
    /// 逆に非有限の係数は軌道全体を NaN にするため、ここで弾く。
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        for (name, value) in [('a', a), ('b', b), ('c', c), ('d', d)] {
            if !value.is_finite() {
                return Err(Error::NonFiniteParameter { name, value });
            }
        }
        Ok(Self { a, b, c, d })
    }

    /// 定数用（検証なし）
    pub(crate) const fn from_raw(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// 係数を1つだけずらした新しいパラメータを返す（ビューア用）
    pub fn nudged(&self, name: char, delta: f64) -> Result<Self> {
        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);
        match name {
            'a' => a += delta,
            'b' => b += delta,
            'c' => c += delta,
            'd' => d += delta,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "係数名 '{}' は存在しません",
                    other
                )))
            }
        }
        Self::new(a, b, c, d)
    }

    /// 1ステップ分の写像
    #[inline]
    pub fn step(&self, p: Point) -> Point {
        Point {
            x: (self.a * p.y).sin() - (self.b * p.x).cos(),
            y: (self.c * p.x).sin() - (self.d * p.y).cos(),
        }
    }
}

impl Default for AttractorParams {
    fn default() -> Self {
        super::constants::PRESETS[0]
    }
}

impl fmt::Display for AttractorParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={:.3} b={:.3} c={:.3} d={:.3}",
            self.a, self.b, self.c, self.d
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// 原点から始まる無限の軌道
///
/// 各点は直前の点とパラメータだけで決まるので、同じパラメータなら
/// 何度生成しても同じ列になる。
#[derive(Debug, Clone)]
pub struct Orbit {
    params: AttractorParams,
    next: Point,
}

impl Orbit {
    pub fn new(params: AttractorParams) -> Self {
        Self {
            params,
            next: Point::ORIGIN,
        }
    }
}

impl Iterator for Orbit {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next;
        self.next = self.params.step(current);
        Some(current)
    }
}

/// 軌道を `iters` 点ぶん生成する（先頭は原点）
pub fn generate(iters: usize, params: &AttractorParams) -> Vec<Point> {
    Orbit::new(*params).take(iters).collect()
}

/// 軸ごとの最小値・最大値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// 点を含まない空の範囲
    pub const EMPTY: Bounds = Bounds {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn of<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut bounds = Self::EMPTY;
        for p in points {
            bounds.include(*p);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}
