use std::sync::atomic::{AtomicU32, Ordering};

// Per-pair mismatch counters, one cell for every (A string, B string)
// combination, stored row-major in one flat allocation. Cells are atomics
// so any number of workers can bump the same pair without losing counts.
// Relaxed ordering is enough: cells are independent commutative counters,
// and readers only look after the worker threads have joined.
pub struct MismatchMatrix {
    cells: Vec<AtomicU32>,
    rows: usize,
    cols: usize,
}

impl MismatchMatrix {
    // Allocate exactly rows * cols counters, all zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || AtomicU32::new(0));
        MismatchMatrix { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn increment(&self, row: usize, col: usize) {
        self.cells[row * self.cols + col].fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols + col].load(Ordering::Relaxed)
    }

    // Sum of every cell.
    pub fn total(&self) -> u64 {
        self.cells
            .iter()
            .map(|cell| cell.load(Ordering::Relaxed) as u64)
            .sum()
    }

    // Plain row-major copy of the counters.
    pub fn snapshot(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|cell| cell.load(Ordering::Relaxed))
            .collect()
    }
}
