use crate::domain::config::DisplayConfig;
use crate::domain::logging::LogComponent;
use crate::domain::sequence::Feature;
use crate::log_debug;
use std::collections::BTreeMap;

/// Number of regular rows that fit into a container of `height` pixels.
///
/// Zero when the container is too small to hold a single row.
pub fn row_capacity(config: &DisplayConfig, height: f64) -> usize {
    let usable = height - 2.0 * config.margin - config.axis_height;
    let pitch = config.row_pitch();
    if !usable.is_finite() || usable <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (usable / pitch).floor() as usize
}

/// Occupied intervals of a single display row.
///
/// Intervals are half-open and 0-indexed: a feature `start..=end` occupies
/// `start - 1..end`.
pub trait RowOccupancy: Default {
    fn is_free(&self, start: usize, end: usize) -> bool;
    fn occupy(&mut self, start: usize, end: usize);
}

/// One flag per sequence position
#[derive(Debug, Clone, Default)]
pub struct DenseRow {
    cells: Vec<bool>,
}

impl RowOccupancy for DenseRow {
    fn is_free(&self, start: usize, end: usize) -> bool {
        let end = end.min(self.cells.len());
        start >= end || !self.cells[start..end].iter().any(|&c| c)
    }

    fn occupy(&mut self, start: usize, end: usize) {
        if end > self.cells.len() {
            self.cells.resize(end, false);
        }
        self.cells[start..end].iter_mut().for_each(|c| *c = true);
    }
}

/// Disjoint intervals keyed by start; lookups are `O(log n)` per row
#[derive(Debug, Clone, Default)]
pub struct IntervalRow {
    intervals: BTreeMap<usize, usize>,
}

impl RowOccupancy for IntervalRow {
    fn is_free(&self, start: usize, end: usize) -> bool {
        if start >= end {
            return true;
        }
        // Disjoint intervals sorted by start are also sorted by end, so only
        // the last one starting before `end` can reach into `start..end`.
        match self.intervals.range(..end).next_back() {
            Some((_, &occupied_end)) => occupied_end <= start,
            None => true,
        }
    }

    fn occupy(&mut self, start: usize, end: usize) {
        if start < end {
            self.intervals.insert(start, end);
        }
    }
}

/// Summary of one packing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowLayout {
    /// Capacity; also the index of the overflow row
    pub nrows: usize,
    /// Highest regular row index in use plus one
    pub rows_used: usize,
    pub overflow: usize,
}

/// Greedy first-fit packing of features into display rows
#[derive(Debug, Clone, Copy)]
pub struct RowAssigner {
    nrows: usize,
}

impl RowAssigner {
    pub fn new(nrows: usize) -> Self {
        Self { nrows }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Assign rows with the default dense occupancy grid.
    pub fn assign(&self, features: &mut [Feature]) -> RowLayout {
        self.assign_with::<DenseRow>(features)
    }

    /// Features are placed in slice order. Each takes the lowest row whose
    /// occupied set misses `[start-1, end)`; when every row is taken it lands
    /// on the overflow row `nrows`, which is never marked.
    pub fn assign_with<R: RowOccupancy>(&self, features: &mut [Feature]) -> RowLayout {
        let mut grid: Vec<R> = (0..self.nrows).map(|_| R::default()).collect();
        let mut layout = RowLayout { nrows: self.nrows, ..RowLayout::default() };

        for feature in features.iter_mut() {
            let start = feature.start.saturating_sub(1);
            let end = feature.end;

            match grid.iter().position(|row| row.is_free(start, end)) {
                Some(row) => {
                    grid[row].occupy(start, end);
                    feature.row = row;
                    layout.rows_used = layout.rows_used.max(row + 1);
                }
                None => {
                    feature.row = self.nrows;
                    layout.overflow += 1;
                }
            }
        }

        log_debug!(
            LogComponent::Domain("RowAssigner"),
            "packed {} features into {} of {} rows ({} overflow)",
            features.len(),
            layout.rows_used,
            self.nrows,
            layout.overflow
        );
        layout
    }
}
