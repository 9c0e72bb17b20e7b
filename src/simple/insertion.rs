use crate::{StepResult, StepSort};

/// Insertion sort. `i` is the first unsorted position, `j` trails the element
/// currently being inserted back into the sorted prefix.
#[derive(Debug, Default)]
pub struct InsertionSort {
    size: usize,
    i: usize,
    j: usize,
    done: bool,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            i: 1,
            j: 1,
            done: size <= 1,
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.i >= self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.j == 0 || self.j > self.i {
            self.j = self.i;
        }

        let mut res = StepResult::compare(self.j - 1, self.j);

        if v[self.j - 1] > v[self.j] {
            v.swap(self.j - 1, self.j);
            res.swapped = true;
            self.j -= 1;

            if self.j == 0 {
                self.i += 1;
                self.j = self.i;
            }
        } else {
            self.i += 1;
            self.j = self.i;
        }

        if self.i >= self.size {
            self.done = true;
            res.done = true;
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
