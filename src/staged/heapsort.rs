use crate::{StepResult, StepSort};

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Sift candidate roots from `size / 2 - 1` down to 0 into place.
    Build { idx: usize },
    /// Swap the root with the shrinking heap's last element, then restore.
    /// `end` is the current heap length.
    Extract { end: usize },
}

#[derive(Debug, Clone, Copy)]
enum SiftStage {
    /// Compute child indices; skips ahead when children are missing.
    Children,
    /// Compare the two children to pick the larger.
    PickChild { left: usize, right: usize },
    /// Compare root against the chosen child, swap and descend if needed.
    Compare { child: usize },
}

#[derive(Debug, Clone, Copy)]
struct Sift {
    root: usize,
    limit: usize,
    stage: SiftStage,
}

impl Sift {
    fn new(root: usize, limit: usize) -> Self {
        Sift {
            root,
            limit,
            stage: SiftStage::Children,
        }
    }
}

/// Heapsort: build then extract, sharing one three-stage sift-down
/// sub-machine that advances a single stage per call.
#[derive(Debug)]
pub struct HeapSort {
    size: usize,
    phase: Phase,
    sift: Option<Sift>,
    done: bool,
}

impl Default for HeapSort {
    fn default() -> Self {
        HeapSort {
            size: 0,
            phase: Phase::Extract { end: 0 },
            sift: None,
            done: false,
        }
    }
}

impl HeapSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance_sift(&mut self, mut sift: Sift, v: &mut [i32]) -> StepResult {
        match sift.stage {
            SiftStage::Children => {
                let left = 2 * sift.root + 1;
                let right = left + 1;

                if left >= sift.limit {
                    self.finish_sift();
                    return StepResult::default();
                }

                sift.stage = if right < sift.limit {
                    SiftStage::PickChild { left, right }
                } else {
                    SiftStage::Compare { child: left }
                };
                self.sift = Some(sift);
                StepResult::default()
            }
            SiftStage::PickChild { left, right } => {
                let res = StepResult::compare(left, right);

                sift.stage = SiftStage::Compare {
                    child: if v[right] > v[left] { right } else { left },
                };
                self.sift = Some(sift);
                res
            }
            SiftStage::Compare { child } => {
                let mut res = StepResult::compare(sift.root, child);

                if v[child] > v[sift.root] {
                    v.swap(sift.root, child);
                    res.swapped = true;
                    sift.root = child;
                    sift.stage = SiftStage::Children;
                    self.sift = Some(sift);
                } else {
                    self.finish_sift();
                }

                res
            }
        }
    }

    fn finish_sift(&mut self) {
        if let Phase::Build { idx } = self.phase {
            self.phase = if idx == 0 {
                Phase::Extract { end: self.size }
            } else {
                Phase::Build { idx: idx - 1 }
            };
        }
    }
}

impl StepSort for HeapSort {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn reset(&mut self, size: usize) {
        self.size = size;
        self.sift = None;
        self.done = size <= 1;
        self.phase = if self.done {
            Phase::Extract { end: 0 }
        } else {
            Phase::Build { idx: size / 2 - 1 }
        };
    }

    fn step(&mut self, v: &mut [i32]) -> StepResult {
        if self.done || self.size <= 1 || v.len() < self.size {
            self.done = true;
            return StepResult::finished();
        }

        let sift = match self.sift.take() {
            Some(sift) => sift,
            None => match self.phase {
                Phase::Build { idx } => Sift::new(idx, self.size),
                Phase::Extract { end } => {
                    if end <= 1 {
                        self.done = true;
                        return StepResult::finished();
                    }

                    let end = end - 1;
                    v.swap(0, end);
                    self.phase = Phase::Extract { end };
                    self.sift = Some(Sift::new(0, end));

                    return StepResult {
                        hi1: Some(0),
                        hi2: Some(end),
                        swapped: true,
                        ..StepResult::default()
                    };
                }
            },
        };

        self.advance_sift(sift, v)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
