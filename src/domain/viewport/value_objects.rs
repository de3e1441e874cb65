use serde::Serialize;

/// Value Object - pixel size of the host region
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContainerGeometry {
    pub width: f64,
    pub height: f64,
}

impl ContainerGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width available to the scale once both margins are taken off.
    pub fn effective_width(&self, margin: f64) -> f64 {
        (self.width - 2.0 * margin).max(0.0)
    }
}

/// Value Object - linear mapping from sequence coordinates to pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self { domain: (0.0, 1.0), range: (0.0, 1.0) }
    }
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Whole-sequence scale: half a letter of padding on both ends.
    pub fn for_sequence(seq_len: usize, container: &ContainerGeometry, margin: f64) -> Self {
        Self::new(
            (0.5, seq_len as f64 + 0.5),
            (margin, container.width - margin),
        )
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Sequence coordinate to pixel
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel back to sequence coordinate
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Pixel width of one sequence position
    pub fn step_px(&self) -> f64 {
        self.apply(2.0) - self.apply(1.0)
    }

    /// Integer window `[floor(d0), ceil(d1)]` used to filter features.
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow {
            start: self.domain.0.floor() as i64,
            end: self.domain.1.ceil() as i64,
        }
    }

    /// Step between "nice" ticks: 1, 2 or 5 times a power of ten.
    pub fn tick_step(&self, count: usize) -> Option<f64> {
        let (lo, hi) = ordered(self.domain);
        let span = hi - lo;
        if count == 0 || !span.is_finite() || span <= 0.0 {
            return None;
        }
        let raw = span / count as f64;
        let mut step = 10f64.powf(raw.log10().floor());
        let err = count as f64 / span * step;
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }
        Some(step)
    }

    /// Tick values inside the domain, in ascending order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let Some(step) = self.tick_step(count) else {
            return Vec::new();
        };
        let (lo, hi) = ordered(self.domain);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    /// Label text for a tick, with as many decimals as the step needs.
    pub fn tick_label(value: f64, step: f64) -> String {
        if step >= 1.0 {
            format!("{}", value.round() as i64)
        } else {
            let decimals = (-step.log10().floor()).max(0.0) as usize;
            format!("{:.*}", decimals, value)
        }
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Value Object - integer sequence window, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleWindow {
    pub start: i64,
    pub end: i64,
}

impl VisibleWindow {
    /// 1-indexed positions inside the window that exist in a sequence of
    /// `seq_len` letters.
    pub fn positions(&self, seq_len: usize) -> std::ops::RangeInclusive<usize> {
        let first = (self.start + 1).max(1) as usize;
        let last = self.end.clamp(0, seq_len as i64) as usize;
        first..=last
    }
}
