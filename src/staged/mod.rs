//! Algorithms that carry explicit sub-state machines: a gap schedule for
//! shell sort, a range stack with 3-way partitioning for quicksort, a
//! sift-down sub-machine for heapsort and merge/copy-back staging for
//! mergesort. The classic recursive or loop-bounded formulations are encoded
//! as persisted continuation data so one call advances one operation.

pub mod heapsort;
pub mod mergesort;
pub mod quicksort;
pub mod shell;

pub use heapsort::HeapSort;
pub use mergesort::MergeSort;
pub use quicksort::QuickSort;
pub use shell::ShellSort;
