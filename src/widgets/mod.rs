//! Reusable widgets for the countup TUI.

pub mod amount;

pub use amount::{AmountDisplay, CounterState};
