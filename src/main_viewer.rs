//! Peters アトラクター インタラクティブビューア
//!
//! 操作方法:
//!   - ← / →: a を減らす / 増やす
//!   - ↓ / ↑: b を減らす / 増やす
//!   - Z / X: c を減らす / 増やす
//!   - C / V: d を減らす / 増やす
//!   - 1 / 2: プリセットを選択
//!   - R キー: 初期表示にリセット
//!   - S キー: 現在の表示を画像として保存
//!   - Q / Escape キー: 終了

use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use peters::common::attractor::AttractorParams;
use peters::common::colors::{make_color_map, ColorGrid};
use peters::common::constants::*;
use peters::common::histogram::make_histogram_streaming;
use peters::sink::save_image;

/// キーと、そのキーで動かす係数・向き
const NUDGE_KEYS: [(Key, char, f64); 8] = [
    (Key::Left, 'a', -1.0),
    (Key::Right, 'a', 1.0),
    (Key::Down, 'b', -1.0),
    (Key::Up, 'b', 1.0),
    (Key::Z, 'c', -1.0),
    (Key::X, 'c', 1.0),
    (Key::C, 'd', -1.0),
    (Key::V, 'd', 1.0),
];

/// ビューアの状態
struct ViewerState {
    params: AttractorParams,
    colors: Option<ColorGrid>,
    buffer: Vec<u32>,
    needs_redraw: bool,
    save_counter: u32,
}

impl ViewerState {
    fn new() -> Self {
        Self {
            params: AttractorParams::default(),
            colors: None,
            buffer: vec![0xFFFFFF; VIEW_WIDTH * VIEW_HEIGHT],
            needs_redraw: true,
            save_counter: 0,
        }
    }

    fn set_params(&mut self, params: AttractorParams) {
        if params != self.params {
            self.params = params;
            self.needs_redraw = true;
        }
    }

    fn nudge(&mut self, name: char, direction: f64) {
        match self.params.nudged(name, direction * PARAM_STEP) {
            Ok(params) => self.set_params(params),
            Err(e) => warn!("{}", e),
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let grid = make_histogram_streaming(VIEW_ITERS, &self.params, VIEW_WIDTH, VIEW_HEIGHT)?;
        let colors = make_color_map(&grid);
        self.buffer = colors.to_u32_buffer();
        self.colors = Some(colors);
        self.needs_redraw = false;
        Ok(())
    }

    fn save_image(&mut self) {
        let Some(colors) = &self.colors else {
            return;
        };
        self.save_counter += 1;
        let filename = format!("attractor_{:03}.png", self.save_counter);
        match save_image(&filename, colors) {
            Ok(()) => println!("画像を保存しました: {} ({})", filename, self.params),
            Err(e) => eprintln!("画像の保存に失敗しました: {}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Peters アトラクター ビューア");
    println!("操作方法:");
    println!("  - ← / →, ↓ / ↑: a, b を変更");
    println!("  - Z / X, C / V: c, d を変更");
    println!("  - 1 / 2: プリセット");
    println!("  - R キー: リセット");
    println!("  - S キー: 画像として保存");
    println!("  - Q / Escape キー: 終了");
    println!();

    let mut window = Window::new(
        "Peters アトラクター",
        VIEW_WIDTH,
        VIEW_HEIGHT,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .context("ウィンドウの作成に失敗しました")?;

    window.set_target_fps(60);

    let mut state = ViewerState::new();

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            state.set_params(AttractorParams::default());
            println!("リセット");
        }
        if window.is_key_pressed(Key::Key1, KeyRepeat::No) {
            state.set_params(PRESETS[0]);
        }
        if window.is_key_pressed(Key::Key2, KeyRepeat::No) {
            state.set_params(PRESETS[1]);
        }
        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            state.save_image();
        }

        for (key, name, direction) in NUDGE_KEYS {
            if window.is_key_pressed(key, KeyRepeat::Yes) {
                state.nudge(name, direction);
            }
        }

        if state.needs_redraw {
            let start = Instant::now();
            state.render()?;
            let elapsed = start.elapsed();
            window.set_title(&format!(
                "Peters アトラクター [{}] {:.1} ms",
                state.params,
                elapsed.as_secs_f32() * 1000.0
            ));
            info!("再描画: {:.2?} | {}", elapsed, state.params);
        }

        window
            .update_with_buffer(&state.buffer, VIEW_WIDTH, VIEW_HEIGHT)
            .context("バッファの更新に失敗しました")?;
    }

    println!("終了しました");
    Ok(())
}
