#![forbid(unsafe_code)]

mod histogram;
mod rendering;

pub use histogram::Histogram1D;
pub use rendering::{init_tracing, render_histograms_to_png, PanelStyle, RenderConfig};
