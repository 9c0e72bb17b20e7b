use std::cmp::Ordering;

use crate::{StepResult, StepSort};

/// Ranges at or below this length skip partitioning entirely and run through
/// the insertion fallback.
const INSERTION_MAX: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
enum State {
    /// Pop the next `(lo, hi)` range off the stack and decide how to sort it.
    #[default]
    Select,
    /// One-step insertion sort scoped to `[lo, hi]`.
    Insertion {
        lo: usize,
        hi: usize,
        i: usize,
        j: usize,
    },
    /// Dutch-national-flag 3-way partition against the saved pivot value.
    /// `[lo, lt)` is less, `[lt, cur)` equal, `[cur, gt)` unscanned and
    /// `[gt, hi]` greater; `gt` is an exclusive bound.
    Partition {
        lo: usize,
        hi: usize,
        pivot: i32,
        lt: usize,
        cur: usize,
        gt: usize,
    },
}

/// Iterative quicksort over an explicit range stack.
///
/// The pivot is always the midpoint element, never randomized, so adversarial
/// inputs can force quadratic behavior; that is a preserved property of the
/// visualization, not something to fix. To bound stack depth, the larger
/// sub-range is pushed first so the smaller one is processed next.
#[derive(Debug, Default)]
pub struct QuickSort {
    size: usize,
    stack: Vec<(usize, usize)>,
    state: State,
    done: bool,
}

impl QuickSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn reset(&mut self, size: usize) {
        self.size = size;
        self.stack.clear();
        self.state = State::Select;
        self.done = size <= 1;

        if !self.done {
            self.stack.push((0, size - 1));
        }
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        match self.state {
            State::Select => {
                let Some((lo, hi)) = self.stack.pop() else {
                    self.done = true;
                    return StepResult::finished();
                };

                if hi - lo + 1 <= INSERTION_MAX {
                    self.state = State::Insertion {
                        lo,
                        hi,
                        i: lo + 1,
                        j: lo + 1,
                    };
                    StepResult::default()
                } else {
                    let mid = lo + (hi - lo) / 2;
                    self.state = State::Partition {
                        lo,
                        hi,
                        pivot: v[mid],
                        lt: lo,
                        cur: lo,
                        gt: hi + 1,
                    };
                    StepResult {
                        hi1: Some(mid),
                        ..StepResult::default()
                    }
                }
            }
            State::Insertion { lo, hi, mut i, mut j } => {
                if i > hi {
                    self.state = State::Select;
                    return StepResult::default();
                }

                let mut res = StepResult::compare(j - 1, j);

                if v[j - 1] > v[j] {
                    v.swap(j - 1, j);
                    res.swapped = true;
                    j -= 1;

                    if j == lo {
                        i += 1;
                        j = i;
                    }
                } else {
                    i += 1;
                    j = i;
                }

                self.state = if i > hi {
                    State::Select
                } else {
                    State::Insertion { lo, hi, i, j }
                };
                res
            }
            State::Partition {
                lo,
                hi,
                pivot,
                mut lt,
                mut cur,
                mut gt,
            } => {
                if cur >= gt {
                    // Partition complete. Equal elements in [lt, gt) are
                    // already in final position and are never pushed.
                    let left_len = lt - lo;
                    let right_len = hi + 1 - gt;

                    let left = (left_len > 1).then(|| (lo, lt - 1));
                    let right = (right_len > 1).then(|| (gt, hi));

                    if left_len >= right_len {
                        self.stack.extend(left);
                        self.stack.extend(right);
                    } else {
                        self.stack.extend(right);
                        self.stack.extend(left);
                    }

                    self.state = State::Select;
                    return StepResult::default();
                }

                let mut res = StepResult {
                    hi1: Some(cur),
                    compared: true,
                    ..StepResult::default()
                };

                match v[cur].cmp(&pivot) {
                    Ordering::Less => {
                        if cur != lt {
                            v.swap(cur, lt);
                            res.swapped = true;
                        }
                        lt += 1;
                        cur += 1;
                    }
                    Ordering::Greater => {
                        gt -= 1;
                        if cur != gt {
                            v.swap(cur, gt);
                            res.swapped = true;
                        }
                    }
                    Ordering::Equal => cur += 1,
                }

                self.state = State::Partition {
                    lo,
                    hi,
                    pivot,
                    lt,
                    cur,
                    gt,
                };
                res
            }
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
