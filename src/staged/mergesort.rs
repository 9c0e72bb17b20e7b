use crate::{StepResult, StepSort};

/// Runs up to this length are pre-sorted with one-step insertion sort before
/// any merging happens; merging then starts at this width.
const RUN_LEN: usize = 4;

#[derive(Debug, Clone, Copy)]
enum State {
    /// Insertion-sort the run starting at `run`, then move to the next run.
    Presort { run: usize, i: usize, j: usize },
    /// Walk `left` across the sequence looking for the next run pair.
    Scan { left: usize },
    /// Merge `[left, mid)` and `[mid, right)` into the scratch buffer, one
    /// element per call; `a`/`b` are the run heads, `out` the buffer cursor.
    Merge {
        left: usize,
        mid: usize,
        right: usize,
        a: usize,
        b: usize,
        out: usize,
    },
    /// Copy `[pos, right)` back from the buffer, one element per call.
    CopyBack {
        next_left: usize,
        right: usize,
        pos: usize,
    },
}

/// Bottom-up iterative mergesort with insertion-presorted runs.
///
/// Ties prefer the left run head, preserving stability. The scratch buffer is
/// allocated once per `reset` and indexed with the same absolute positions as
/// the sequence.
#[derive(Debug)]
pub struct MergeSort {
    size: usize,
    width: usize,
    buf: Vec<i32>,
    state: State,
    done: bool,
}

impl Default for MergeSort {
    fn default() -> Self {
        MergeSort {
            size: 0,
            width: 0,
            buf: Vec::new(),
            state: State::Scan { left: 0 },
            done: false,
        }
    }
}

impl MergeSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepSort for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn reset(&mut self, size: usize) {
        self.size = size;
        self.width = RUN_LEN;
        self.done = size <= 1;
        self.buf.clear();
        self.buf.resize(size, 0);
        self.state = State::Presort { run: 0, i: 1, j: 1 };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        match self.state {
            State::Presort { run, mut i, mut j } => {
                let run_end = (run + RUN_LEN).min(self.size);

                if i >= run_end {
                    let next = run + RUN_LEN;
                    self.state = if next >= self.size {
                        State::Scan { left: 0 }
                    } else {
                        State::Presort {
                            run: next,
                            i: next + 1,
                            j: next + 1,
                        }
                    };
                    return StepResult::default();
                }

                let mut res = StepResult::compare(j - 1, j);

                if v[j - 1] > v[j] {
                    v.swap(j - 1, j);
                    res.swapped = true;
                    j -= 1;

                    if j == run {
                        i += 1;
                        j = i;
                    }
                } else {
                    i += 1;
                    j = i;
                }

                self.state = State::Presort { run, i, j };
                res
            }
            State::Scan { left } => {
                if left + self.width >= self.size {
                    // The tail, if any, is a single already-sorted run.
                    self.width *= 2;
                    if self.width >= self.size {
                        self.done = true;
                        return StepResult::finished();
                    }
                    self.state = State::Scan { left: 0 };
                    return StepResult::default();
                }

                let mid = left + self.width;
                let right = (left + 2 * self.width).min(self.size);
                self.state = State::Merge {
                    left,
                    mid,
                    right,
                    a: left,
                    b: mid,
                    out: left,
                };
                StepResult::default()
            }
            State::Merge {
                left,
                mid,
                right,
                mut a,
                mut b,
                mut out,
            } => {
                let mut res = StepResult::default();

                if a < mid && b < right {
                    res = StepResult::compare(a, b);
                    if v[b] < v[a] {
                        self.buf[out] = v[b];
                        b += 1;
                    } else {
                        self.buf[out] = v[a];
                        a += 1;
                    }
                } else if a < mid {
                    // One run is exhausted, drain the other without comparing.
                    res.hi1 = Some(a);
                    self.buf[out] = v[a];
                    a += 1;
                } else {
                    res.hi1 = Some(b);
                    self.buf[out] = v[b];
                    b += 1;
                }

                out += 1;

                self.state = if a >= mid && b >= right {
                    State::CopyBack {
                        next_left: left + 2 * self.width,
                        right,
                        pos: left,
                    }
                } else {
                    State::Merge {
                        left,
                        mid,
                        right,
                        a,
                        b,
                        out,
                    }
                };
                res
            }
            State::CopyBack {
                next_left,
                right,
                mut pos,
            } => {
                v[pos] = self.buf[pos];

                let res = StepResult {
                    hi1: Some(pos),
                    ..StepResult::default()
                };

                pos += 1;
                self.state = if pos >= right {
                    State::Scan { left: next_left }
                } else {
                    State::CopyBack {
                        next_left,
                        right,
                        pos,
                    }
                };
                res
            }
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
