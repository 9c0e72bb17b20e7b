use crate::{StepResult, StepSort};

/// Comb sort. The compare gap shrinks by 10/13 each full pass, floored at 1;
/// the run ends only once a full gap-1 pass produced no swap.
#[derive(Debug, Default)]
pub struct CombSort {
    size: usize,
    gap: usize,
    i: usize,
    swapped_in_pass: bool,
    done: bool,
}

impl CombSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_gap(gap: usize) -> usize {
        let gap = gap * 10 / 13;
        if gap < 1 {
            return 1;
        }
        gap
    }
}

impl StepSort for CombSort {
    fn name(&self) -> &'static str {
        "Comb Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            gap: Self::next_gap(size),
            i: 0,
            swapped_in_pass: false,
            done: size <= 1,
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.i >= self.size - self.gap {
            if self.gap == 1 && !self.swapped_in_pass {
                self.done = true;
                return StepResult::finished();
            }

            self.gap = Self::next_gap(self.gap);
            self.i = 0;
            self.swapped_in_pass = false;
        }

        let mut res = StepResult::compare(self.i, self.i + self.gap);

        if v[self.i] > v[self.i + self.gap] {
            v.swap(self.i, self.i + self.gap);
            res.swapped = true;
            self.swapped_in_pass = true;
        }

        self.i += 1;

        if self.i >= self.size - self.gap && self.gap == 1 && !self.swapped_in_pass {
            self.done = true;
            res.done = true;
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
