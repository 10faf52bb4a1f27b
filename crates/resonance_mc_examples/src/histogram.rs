//! Fixed-binning one-dimensional histograms.
use anyhow::{ensure, Result};

/// Histogram with uniform bins over `[lo, hi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram1D {
    name: String,
    lo: f64,
    hi: f64,
    contents: Vec<f64>,
    underflow: f64,
    overflow: f64,
    entries: usize,
    sum_w: f64,
    sum_wx: f64,
}

impl Histogram1D {
    pub fn new(name: impl Into<String>, bins: usize, lo: f64, hi: f64) -> Self {
        debug_assert!(bins > 0, "histogram needs at least one bin");
        debug_assert!(hi > lo, "histogram range must be non-empty");
        Self {
            name: name.into(),
            lo,
            hi,
            contents: vec![0.0; bins.max(1)],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
            sum_w: 0.0,
            sum_wx: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fill(&mut self, x: f64) {
        self.fill_weighted(x, 1.0);
    }

    pub fn fill_weighted(&mut self, x: f64, w: f64) {
        self.entries += 1;
        if x.is_nan() {
            return;
        }
        if x < self.lo {
            self.underflow += w;
            return;
        }
        if x >= self.hi {
            self.overflow += w;
            return;
        }

        let bin = ((x - self.lo) / self.bin_width()) as usize;
        let bin = bin.min(self.contents.len() - 1);
        self.contents[bin] += w;
        self.sum_w += w;
        self.sum_wx += w * x;
    }

    pub fn bins(&self) -> usize {
        self.contents.len()
    }

    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.contents.len() as f64
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        self.lo + (bin as f64 + 0.5) * self.bin_width()
    }

    pub fn contents(&self) -> &[f64] {
        &self.contents
    }

    /// Number of `fill` calls, including out-of-range values.
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    /// Weighted mean of in-range fills.
    pub fn mean(&self) -> f64 {
        if self.sum_w == 0.0 {
            0.0
        } else {
            self.sum_wx / self.sum_w
        }
    }

    /// Bin with the largest content.
    pub fn max_bin(&self) -> usize {
        self.contents
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map_or(0, |(i, _)| i)
    }

    /// Bin-by-bin `self - other`, named `name`.
    pub fn subtract(&self, other: &Histogram1D, name: impl Into<String>) -> Result<Histogram1D> {
        ensure!(
            self.contents.len() == other.contents.len() && self.range() == other.range(),
            "cannot subtract '{}' from '{}': binning differs",
            other.name,
            self.name
        );

        let mut out = Histogram1D::new(name, self.bins(), self.lo, self.hi);
        for (dst, (a, b)) in out
            .contents
            .iter_mut()
            .zip(self.contents.iter().zip(&other.contents))
        {
            *dst = a - b;
        }
        out.underflow = self.underflow - other.underflow;
        out.overflow = self.overflow - other.overflow;
        out.entries = self.entries + other.entries;
        out.sum_w = self.sum_w - other.sum_w;
        out.sum_wx = self.sum_wx - other.sum_wx;
        Ok(out)
    }
}
