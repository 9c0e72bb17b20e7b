use crate::{StepResult, StepSort};

/// Selection sort, with the minimum scan decoupled from the commit swap.
///
/// Scan steps compare `j` against the running minimum and never swap. Once
/// the scan reaches the end of the unsorted suffix, a single commit step
/// swaps the minimum into position `i` and advances the boundary.
#[derive(Debug, Default)]
pub struct SelectionSort {
    size: usize,
    i: usize,
    j: usize,
    min: usize,
    committing: bool,
    done: bool,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            i: 0,
            j: 1,
            min: 0,
            committing: false,
            done: size <= 1,
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.i + 1 >= self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.committing {
            let mut res = StepResult {
                hi1: Some(self.i),
                hi2: Some(self.min),
                ..StepResult::default()
            };

            if self.min != self.i {
                v.swap(self.i, self.min);
                res.swapped = true;
            }

            self.committing = false;
            self.i += 1;
            self.min = self.i;
            self.j = self.i + 1;

            if self.i + 1 >= self.size {
                self.done = true;
                res.done = true;
            }

            return res;
        }

        let res = StepResult::compare(self.j, self.min);

        if v[self.j] < v[self.min] {
            self.min = self.j;
        }

        self.j += 1;
        if self.j >= self.size {
            self.committing = true;
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
