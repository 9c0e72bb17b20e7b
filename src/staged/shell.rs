use crate::{StepResult, StepSort};

/// Ciura's experimentally derived base gaps.
const BASE_GAPS: [usize; 8] = [1, 4, 10, 23, 57, 132, 301, 701];

/// Shell sort: insertion sort generalized over a descending gap schedule.
///
/// The schedule extends the Ciura gaps by repeated *9/4 growth (truncating,
/// forced strictly increasing) until it reaches `size`, then keeps only gaps
/// below `size`, largest first. Within one gap the mechanics are exactly the
/// one-step insertion walk, restricted to elements `gap` apart.
#[derive(Debug, Default)]
pub struct ShellSort {
    size: usize,
    gaps: Vec<usize>,
    gap_idx: usize,
    i: usize,
    j: usize,
    done: bool,
}

impl ShellSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_gaps(size: usize) -> Vec<usize> {
        let mut gaps = BASE_GAPS.to_vec();

        while let Some(&last) = gaps.last() {
            if last >= size {
                break;
            }
            gaps.push((last * 9 / 4).max(last + 1));
        }

        gaps.retain(|&gap| gap < size);
        gaps.reverse();
        gaps
    }
}

impl StepSort for ShellSort {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            done: size <= 1,
            ..Self::default()
        };

        if self.done {
            return;
        }

        self.gaps = Self::build_gaps(size);
        if let Some(&gap) = self.gaps.first() {
            self.i = gap;
            self.j = gap;
        } else {
            self.done = true;
        }
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.gap_idx >= self.gaps.len() {
            self.done = true;
            return StepResult::finished();
        }

        let gap = self.gaps[self.gap_idx];
        let mut res = StepResult::compare(self.j - gap, self.j);

        if v[self.j - gap] > v[self.j] {
            v.swap(self.j - gap, self.j);
            res.swapped = true;

            if self.j >= gap * 2 {
                self.j -= gap;
            } else {
                self.i += 1;
                self.j = self.i;
            }
        } else {
            self.i += 1;
            self.j = self.i;
        }

        if self.i >= self.size {
            self.gap_idx += 1;
            if let Some(&next) = self.gaps.get(self.gap_idx) {
                self.i = next;
                self.j = next;
            } else {
                self.done = true;
                res.done = true;
            }
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
