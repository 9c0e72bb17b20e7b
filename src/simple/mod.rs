//! Single bounded index-walk state machines: one or two cursors over the
//! sorted/unsorted boundary, one textbook inner-loop iteration per step.

pub mod bubble;
pub mod cocktail;
pub mod comb;
pub mod insertion;
pub mod selection;

pub use bubble::BubbleSort;
pub use cocktail::CocktailSort;
pub use comb::CombSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;
