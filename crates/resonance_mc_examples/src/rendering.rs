use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::histogram::Histogram1D;

/// Installs a compact stderr subscriber. The level is read from
/// `RESONANCE_MC_LOG` (`error`..`trace`) and defaults to `info`.
pub fn init_tracing() {
    let level = std::env::var("RESONANCE_MC_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(level)
        .with(stderr_layer)
        .try_init();
}

/// Colours of one histogram panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    pub bar: [u8; 3],
    /// Bars below zero, as produced by subtractions.
    pub negative_bar: [u8; 3],
    pub axis: [u8; 3],
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            bar: [90, 160, 235],
            negative_bar: [235, 110, 90],
            axis: [200, 200, 200],
        }
    }
}

/// Layout of a histogram sheet.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Size of a single panel in pixels.
    pub panel_size: (u32, u32),
    /// Panels per row.
    pub columns: u32,
    /// Gap around each panel in pixels.
    pub margin: u32,
    pub background: [u8; 3],
    pub style: PanelStyle,
}

impl RenderConfig {
    pub fn new(panel_size: (u32, u32), columns: u32) -> Self {
        Self {
            panel_size,
            columns: columns.max(1),
            margin: 8,
            background: [26, 26, 26],
            style: PanelStyle::default(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }
}

/// Draws `histograms` as a grid of bar charts into one PNG.
pub fn render_histograms_to_png(
    histograms: &[&Histogram1D],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    ensure!(!histograms.is_empty(), "nothing to render");
    let path = path.as_ref();

    let (pw, ph) = config.panel_size;
    let cell_w = pw + 2 * config.margin;
    let cell_h = ph + 2 * config.margin;
    let count = histograms.len() as u32;
    let columns = config.columns.min(count);
    let rows = count.div_ceil(columns);

    let mut img = RgbImage::from_pixel(columns * cell_w, rows * cell_h, Rgb(config.background));
    for (i, h) in histograms.iter().enumerate() {
        let i = i as u32;
        let x0 = (i % columns) * cell_w + config.margin;
        let y0 = (i / columns) * cell_h + config.margin;
        draw_panel(&mut img, h, (x0, y0), config.panel_size, &config.style);
        info!(
            "{}: {} entries, mean {:.4}, peak at {:.4}",
            h.name(),
            h.entries(),
            h.mean(),
            h.bin_center(h.max_bin())
        );
    }

    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}.", path.display());
    Ok(())
}

fn draw_panel(
    img: &mut RgbImage,
    h: &Histogram1D,
    origin: (u32, u32),
    size: (u32, u32),
    style: &PanelStyle,
) {
    let (x0, y0) = origin;
    let (w, ph) = size;
    if w == 0 || ph == 0 {
        return;
    }

    let top = h.contents().iter().copied().fold(0.0_f64, f64::max);
    let bottom = h.contents().iter().copied().fold(0.0_f64, f64::min);
    let span = if top - bottom > 0.0 { top - bottom } else { 1.0 };
    let to_row = |v: f64| -> u32 {
        let frac = (top - v) / span;
        ((frac * (ph - 1) as f64).round() as u32).min(ph - 1)
    };
    let zero_row = to_row(0.0);

    let bins = h.bins() as u32;
    for px in 0..w {
        let bin = ((px as u64 * bins as u64) / w as u64) as usize;
        let value = h.contents()[bin.min(h.bins() - 1)];
        let row = to_row(value);
        let (from, to, color) = if value >= 0.0 {
            (row, zero_row, style.bar)
        } else {
            (zero_row, row, style.negative_bar)
        };
        for py in from..=to {
            img.put_pixel(x0 + px, y0 + py, Rgb(color));
        }
    }

    for px in 0..w {
        img.put_pixel(x0 + px, y0 + zero_row, Rgb(style.axis));
    }
    for py in 0..ph {
        img.put_pixel(x0, y0 + py, Rgb(style.axis));
    }
}
