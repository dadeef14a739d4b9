//! Debounced, cached autocomplete for the terminal
//!
//! The widget lives in [`autocomplete`]; [`fetch`] and [`cache`] decide when
//! suggestions are fetched and which results are shown, and [`app`] wires
//! everything into a runnable host.

pub mod app;
pub mod autocomplete;
pub mod cache;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod highlight;
pub mod source;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;
