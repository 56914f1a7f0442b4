//! Animated count-up currency display for the terminal.
//!
//! The heart of the crate is [`widgets::AmountDisplay`], a ratatui widget
//! that forwards a fixed currency configuration to the [`counter`] animation
//! primitive and hosts the text it produces. The remaining modules make up
//! the `countup` binary.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod counter;
pub mod event;
pub mod handler;
pub mod logging;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod widgets;
