use std::ops::Range;

// Maps a worker index to its contiguous slice of a flattened iteration
// space. The split is static: the first `total % workers` workers take one
// extra item, so slice sizes never differ by more than one and workers past
// the end of a small space get an empty range.
pub fn worker_range(worker: usize, workers: usize, total: usize) -> Range<usize> {
    assert!(worker < workers, "Worker index out of range");
    let base = total / workers;
    let extra = total % workers;
    let start = worker * base + worker.min(extra);
    let length = base + usize::from(worker < extra);
    start..start + length
}

#[cfg(test)]
mod tests {
    use super::*;

    // Concatenating the per-worker ranges in order must tile 0..total
    // exactly, with no gap and no overlap.
    fn assert_tiles(workers: usize, total: usize) {
        let mut next = 0;
        for worker in 0..workers {
            let range = worker_range(worker, workers, total);
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, total);
    }

    #[test]
    fn ranges_tile_the_iteration_space() {
        for workers in 1..=9 {
            for total in 0..=40 {
                assert_tiles(workers, total);
            }
        }
    }

    #[test]
    fn sizes_differ_by_at_most_one() {
        for workers in 1..=9 {
            for total in 0..=40 {
                let sizes: Vec<usize> = (0..workers)
                    .map(|worker| worker_range(worker, workers, total).len())
                    .collect();
                let smallest = *sizes.iter().min().unwrap();
                let largest = *sizes.iter().max().unwrap();
                assert!(largest - smallest <= 1);
            }
        }
    }

    #[test]
    fn extra_items_go_to_the_leading_workers() {
        assert_eq!(worker_range(0, 3, 11), 0..4);
        assert_eq!(worker_range(1, 3, 11), 4..8);
        assert_eq!(worker_range(2, 3, 11), 8..11);
    }

    #[test]
    fn more_workers_than_items_leaves_the_tail_empty() {
        assert_eq!(worker_range(0, 4, 2), 0..1);
        assert_eq!(worker_range(1, 4, 2), 1..2);
        assert!(worker_range(2, 4, 2).is_empty());
        assert!(worker_range(3, 4, 2).is_empty());
    }

    #[test]
    fn an_empty_space_yields_only_empty_ranges() {
        for worker in 0..5 {
            assert!(worker_range(worker, 5, 0).is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "Worker index")]
    fn worker_index_must_be_below_the_worker_count() {
        worker_range(2, 2, 10);
    }
}
