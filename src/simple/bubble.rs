use crate::{StepResult, StepSort};

/// Bubble sort, one adjacent compare-and-maybe-swap per step.
///
/// `i` counts completed passes, `j` walks the shrinking unsorted prefix.
/// A pass that produced no swap ends the run early.
#[derive(Debug, Default)]
pub struct BubbleSort {
    size: usize,
    i: usize,
    j: usize,
    swapped_in_pass: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            done: size <= 1,
            ..Self::default()
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.i >= self.size - 1 {
            self.done = true;
            return StepResult::finished();
        }

        let mut res = StepResult::compare(self.j, self.j + 1);

        if v[self.j] > v[self.j + 1] {
            v.swap(self.j, self.j + 1);
            res.swapped = true;
            self.swapped_in_pass = true;
        }

        self.j += 1;

        if self.j >= self.size - self.i - 1 {
            if !self.swapped_in_pass {
                self.done = true;
                res.done = true;
            } else {
                self.swapped_in_pass = false;
                self.j = 0;
                self.i += 1;
                if self.i >= self.size - 1 {
                    self.done = true;
                    res.done = true;
                }
            }
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
