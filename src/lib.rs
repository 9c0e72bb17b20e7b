//! Sorting algorithms reworked as resumable state machines.
//!
//! Each algorithm advances exactly one primitive operation, one comparison
//! and at most one swap, per [`StepSort::step`] call. A driver that renders
//! one frame per call gets one animation frame per algorithmic step. The
//! naturally recursive algorithms (quicksort, heapsort, mergesort) are
//! decomposed into explicit stack/stage state so that control returns to the
//! caller after every elementary operation and resumes correctly later.

pub mod patterns;
pub mod simple;
pub mod staged;

/// What a single `step` call did, for highlighting and statistics.
///
/// The engine never retains this value and never accumulates counters itself.
/// Drivers sum the `compared`/`swapped` flags across calls if they want
/// running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// First highlighted position, if any.
    pub hi1: Option<usize>,
    /// Second highlighted position, if any.
    pub hi2: Option<usize>,
    /// This step performed an element comparison.
    pub compared: bool,
    /// This step exchanged two elements.
    pub swapped: bool,
    /// No algorithmic work remains until the next `reset`.
    pub done: bool,
}

impl StepResult {
    pub(crate) fn finished() -> Self {
        StepResult {
            done: true,
            ..StepResult::default()
        }
    }

    pub(crate) fn compare(a: usize, b: usize) -> Self {
        StepResult {
            hi1: Some(a),
            hi2: Some(b),
            compared: true,
            ..StepResult::default()
        }
    }
}

/// The uniform contract shared by all nine algorithms.
///
/// Lifecycle: `reset(size)` once, then `step` once per tick until the result
/// reports `done`. `reset` may be called again at any time and discards all
/// in-flight state. The slice is owned by the caller and only borrowed for
/// the duration of one `step` call.
///
/// Inconsistencies are handled by defensive completion rather than errors:
/// `size <= 1` at reset, or a slice shorter than the recorded size at step
/// time, immediately and silently mark the run done without any indexed
/// access. Once `done` is set it stays set until the next `reset`.
pub trait StepSort {
    /// Static display label.
    fn name(&self) -> &'static str;

    /// (Re)initialize all cursor state for sorting exactly `size` elements.
    fn reset(&mut self, size: usize);

    /// Advance by at most one comparison and at most one swap.
    ///
    /// Safe to call when already done: reports `done` and mutates nothing.
    fn step(&mut self, v: &mut [i32]) -> StepResult;

    /// The monotonic completion flag.
    fn is_done(&self) -> bool;
}

/// One fresh instance of every algorithm, in display order.
pub fn all() -> Vec<Box<dyn StepSort>> {
    vec![
        Box::new(simple::BubbleSort::new()),
        Box::new(simple::InsertionSort::new()),
        Box::new(simple::SelectionSort::new()),
        Box::new(simple::CocktailSort::new()),
        Box::new(simple::CombSort::new()),
        Box::new(staged::ShellSort::new()),
        Box::new(staged::QuickSort::new()),
        Box::new(staged::HeapSort::new()),
        Box::new(staged::MergeSort::new()),
    ]
}
