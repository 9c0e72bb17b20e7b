use crate::{StepResult, StepSort};

/// Cocktail (bidirectional bubble) sort. Passes alternate direction and the
/// active window shrinks from both ends; a swap-free pass ends the run.
#[derive(Debug, Default)]
pub struct CocktailSort {
    size: usize,
    start: usize,
    end: usize,
    j: usize,
    forward: bool,
    swapped_in_pass: bool,
    done: bool,
}

impl CocktailSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for CocktailSort {
    fn name(&self) -> &'static str {
        "Cocktail Sort"
    }

    fn reset(&mut self, size: usize) {
        *self = Self {
            size,
            start: 0,
            end: size.saturating_sub(1),
            j: 0,
            forward: true,
            swapped_in_pass: false,
            done: size <= 1,
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        if self.start >= self.end {
            self.done = true;
            return StepResult::finished();
        }

        let mut res;
        if self.forward {
            res = StepResult::compare(self.j, self.j + 1);

            if v[self.j] > v[self.j + 1] {
                v.swap(self.j, self.j + 1);
                res.swapped = true;
                self.swapped_in_pass = true;
            }

            self.j += 1;
            if self.j >= self.end {
                if !self.swapped_in_pass {
                    self.done = true;
                    res.done = true;
                } else {
                    self.swapped_in_pass = false;
                    self.end -= 1;
                    self.forward = false;
                    self.j = self.end;
                }
            }
        } else {
            res = StepResult::compare(self.j - 1, self.j);

            if v[self.j - 1] > v[self.j] {
                v.swap(self.j - 1, self.j);
                res.swapped = true;
                self.swapped_in_pass = true;
            }

            self.j -= 1;
            if self.j <= self.start {
                if !self.swapped_in_pass {
                    self.done = true;
                    res.done = true;
                } else {
                    self.swapped_in_pass = false;
                    self.start += 1;
                    self.forward = true;
                    self.j = self.start;
                }
            }
        }

        if self.start >= self.end && !self.done {
            self.done = true;
            res.done = true;
        }

        res
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
